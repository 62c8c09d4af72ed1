use std::fs::File;
use std::process;

use env_logger::{Env, Target};
use log::debug;
use slide_puzzle::{ui, GameConfig, PuzzleEngine, PuzzleError, Result};

fn init_logging(config: &GameConfig) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));

    // stderr would scribble over the alternate screen
    if let Some(path) = &config.log_file {
        let file = File::create(path).map_err(|source| PuzzleError::LogFile {
            path: path.clone(),
            source,
        })?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn run() -> Result<()> {
    let config = GameConfig::from_env()?;
    init_logging(&config)?;
    debug!("effective config: {}", config.to_json()?);

    let mut engine = PuzzleEngine::from_config(config)?;
    ui::run(&mut engine)
}

fn main() {
    if let Err(err) = run() {
        eprintln!("slide-puzzle: {}", err);
        process::exit(1);
    }
}
