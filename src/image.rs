//! Source image identifiers and their session-scoped cache.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{PuzzleError, Result};

/// Category words a fresh image is drawn from.
pub const DEFAULT_KEYWORDS: [&str; 5] = ["nature", "girl", "models", "animal", "men"];

pub const DEFAULT_IMAGE_PX: u32 = 600;

/// Opaque identifier (URL) of the picture the tiles are cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageId(String);

impl ImageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Supplies image identifiers. Fetching the pixels is the renderer's job.
pub trait ImageProvider {
    fn fresh_image(&mut self, keyword: &str) -> ImageId;
}

/// Issues random-photo URLs for a square image of `px` pixels.
#[derive(Debug, Clone)]
pub struct RandomImageProvider {
    px: u32,
}

impl RandomImageProvider {
    pub fn new(px: u32) -> Self {
        Self { px }
    }
}

impl Default for RandomImageProvider {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_PX)
    }
}

impl ImageProvider for RandomImageProvider {
    fn fresh_image(&mut self, keyword: &str) -> ImageId {
        ImageId(format!(
            "https://source.unsplash.com/random/{px}x{px}?{keyword}",
            px = self.px
        ))
    }
}

/// Pick one keyword uniformly from the vocabulary.
pub fn random_keyword<'a, R: Rng + ?Sized>(keywords: &'a [String], rng: &mut R) -> Result<&'a str> {
    keywords
        .choose(rng)
        .map(String::as_str)
        .ok_or(PuzzleError::EmptyKeywords)
}

/// The one value that survives resets: the image chosen for this session.
#[derive(Debug, Clone, Default)]
pub struct SessionImage {
    current: Option<ImageId>,
}

impl SessionImage {
    pub fn get(&self) -> Option<&ImageId> {
        self.current.as_ref()
    }

    /// Return the cached image, or store and return the one produced by
    /// `fresh` when nothing is cached or `refresh` is set.
    pub fn resolve<F>(&mut self, refresh: bool, fresh: F) -> Result<&ImageId>
    where
        F: FnOnce() -> Result<ImageId>,
    {
        let image = match self.current.take() {
            Some(cached) if !refresh => cached,
            previous => match fresh() {
                Ok(image) => image,
                Err(err) => {
                    // Keep the session picture when no replacement could be made
                    self.current = previous;
                    return Err(err);
                }
            },
        };
        let image: &ImageId = self.current.insert(image);
        Ok(image)
    }
}
