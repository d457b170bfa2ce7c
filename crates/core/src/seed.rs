//! Reproducible description of a rendered frame.
//!
//! A [`Seed`] captures everything needed to recreate a snapshot: scene name,
//! viewport size, parameters, PRNG seed, and how many frames to advance.

use crate::error::FxError;
use serde::{Deserialize, Serialize};

/// Everything needed to reproduce a scene snapshot.
///
/// Two identical `Seed` values fed to the same binary produce bit-identical
/// output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    pub scene: String,
    pub width: usize,
    pub height: usize,
    #[serde(default = "empty_params")]
    pub params: serde_json::Value,
    pub seed: u64,
    #[serde(default)]
    pub steps: usize,
}

fn empty_params() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Seed {
    /// Creates a Seed with empty params (`{}`) and zero steps.
    pub fn new(scene: &str, width: usize, height: usize, seed: u64) -> Self {
        Self {
            scene: scene.to_string(),
            width,
            height,
            params: empty_params(),
            seed,
            steps: 0,
        }
    }

    /// Checks that the seed describes a raster that can be allocated:
    /// non-zero dimensions and no overflow of `width * height * 4`.
    pub fn validate(&self) -> Result<(), FxError> {
        if self.width == 0 || self.height == 0 {
            return Err(FxError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(FxError::InvalidDimensions)?;
        Ok(())
    }
}
