//! Terminal front end: draws the board with crossterm and forwards left
//! clicks to the engine.

pub mod layout;

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use log::debug;
use rand::Rng;

use crate::engine::{MoveOutcome, PuzzleEngine, WinEvent};
use crate::error::Result;
use crate::image::ImageProvider;
use crate::position::Position;

use layout::{tile_label, BoardLayout, TILE_HEIGHT, TILE_WIDTH};

/// Take over the terminal and play until the user quits.
pub fn run<P: ImageProvider, R: Rng>(engine: &mut PuzzleEngine<P, R>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;

    let result = event_loop(engine, &mut stdout);

    // Restore the terminal even when the loop failed
    let restored = execute!(stdout, Show, DisableMouseCapture, LeaveAlternateScreen)
        .and_then(|_| disable_raw_mode());
    result?;
    restored?;
    Ok(())
}

fn event_loop<P: ImageProvider, R: Rng, W: Write>(
    engine: &mut PuzzleEngine<P, R>,
    out: &mut W,
) -> Result<()> {
    let mut win: Option<WinEvent> = None;
    draw(out, engine, win)?;

    loop {
        match event::read()? {
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('r') => {
                    engine.reset_game()?;
                    win = None;
                }
                KeyCode::Char('n') => {
                    engine.new_game()?;
                    win = None;
                }
                _ => continue,
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let layout = BoardLayout::new(engine.size());
                let Some(pos) = layout.hit_test(column, row) else {
                    continue;
                };
                match engine.on_tile_clicked(pos) {
                    MoveOutcome::Ignored => continue,
                    MoveOutcome::Moved { .. } => {}
                    MoveOutcome::Solved(event) => {
                        debug!("showing win banner for {} steps", event.steps);
                        win = Some(event);
                    }
                }
            }
            Event::Resize(..) => {}
            _ => continue,
        }
        draw(out, engine, win)?;
    }
}

fn draw<P: ImageProvider, R: Rng, W: Write>(
    out: &mut W,
    engine: &PuzzleEngine<P, R>,
    win: Option<WinEvent>,
) -> Result<()> {
    let size = engine.size();
    let layout = BoardLayout::new(size);

    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print(format!("Steps: {}", engine.steps())),
        MoveTo(0, 1),
        Print(format!(
            "Image: {}",
            engine.image().map_or("-", |image| image.as_str())
        ))
    )?;

    for tile in engine.tiles() {
        let color = if tile.is_home() {
            Color::Green
        } else {
            Color::White
        };
        draw_tile(out, &layout, tile.current, &tile_label(tile, size), color)?;
    }

    let footer = layout.bottom() + 1;
    match win {
        Some(event) => {
            // The last piece is only shown once the picture is complete
            let last = (size * size).to_string();
            draw_tile(out, &layout, engine.empty(), &last, Color::Yellow)?;
            queue!(
                out,
                MoveTo(0, footer),
                SetForegroundColor(Color::Yellow),
                Print(format!("Solved in {} steps!", event.steps)),
                ResetColor
            )?;
        }
        None => {
            queue!(out, MoveTo(0, footer), Print("Click a tile next to the gap to slide it."))?;
        }
    }
    queue!(
        out,
        MoveTo(0, footer + 1),
        Print("[r] reset  [n] new image  [q] quit")
    )?;

    out.flush()?;
    Ok(())
}

fn draw_tile<W: Write>(
    out: &mut W,
    layout: &BoardLayout,
    pos: Position,
    label: &str,
    color: Color,
) -> Result<()> {
    let (x, y) = layout.cell_origin(pos);
    let inner = TILE_WIDTH as usize - 2;

    queue!(
        out,
        SetForegroundColor(color),
        MoveTo(x, y),
        Print(format!("┌{}┐", "─".repeat(inner))),
        MoveTo(x, y + TILE_HEIGHT / 2),
        Print(format!("│{:^inner$}│", label, inner = inner)),
        MoveTo(x, y + TILE_HEIGHT - 1),
        Print(format!("└{}┘", "─".repeat(inner))),
        ResetColor
    )?;
    Ok(())
}
