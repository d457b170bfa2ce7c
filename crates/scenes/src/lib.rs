#![deny(unsafe_code)]
//! Scene registry: maps scene names to implementations and renders them
//! offline onto a CPU raster.
//!
//! This crate sits between `portfolio-fx-core` (which defines the `Scene`
//! trait) and the individual scene crates (`portfolio-fx-neural`). The CLI
//! depends on it so name dispatch lives in one place.

pub mod raster;

#[cfg(feature = "png")]
pub mod snapshot;

use portfolio_fx_core::error::FxError;
use portfolio_fx_core::scene::{Scene, Viewport};
use portfolio_fx_core::seed::Seed;
use portfolio_fx_core::surface::Surface;
use portfolio_fx_neural::ParticleField;
use raster::Raster;
use serde_json::{json, Value};

/// All available scene names.
const SCENE_NAMES: &[&str] = &["neural"];

/// Every available scene, behind one `Scene` implementation.
///
/// Use [`SceneKind::from_name`] for string-based construction.
pub enum SceneKind {
    /// Neural-network particle background.
    Neural(ParticleField),
}

impl SceneKind {
    /// Constructs a scene by name for a `width` x `height` viewport.
    ///
    /// Returns `FxError::UnknownScene` if the name is not recognized.
    pub fn from_name(
        name: &str,
        width: f64,
        height: f64,
        seed: u64,
        params: &Value,
    ) -> Result<Self, FxError> {
        match name {
            "neural" => Ok(SceneKind::Neural(ParticleField::from_json(
                width, height, seed, params,
            )?)),
            _ => Err(FxError::UnknownScene(name.to_string())),
        }
    }

    /// Returns a slice of all recognized scene names.
    pub fn list_scenes() -> &'static [&'static str] {
        SCENE_NAMES
    }

    /// Name, defaults, and parameter schema of every scene.
    pub fn catalog() -> Result<Value, FxError> {
        SCENE_NAMES
            .iter()
            .map(|&name| {
                let scene = SceneKind::from_name(name, 0.0, 0.0, 1, &json!({}))?;
                Ok(json!({
                    "name": name,
                    "params": scene.params(),
                    "schema": scene.param_schema(),
                }))
            })
            .collect::<Result<Vec<_>, FxError>>()
            .map(Value::Array)
    }
}

impl Scene for SceneKind {
    fn advance(&mut self) {
        match self {
            SceneKind::Neural(s) => s.advance(),
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        match self {
            SceneKind::Neural(s) => s.render(surface),
        }
    }

    fn resize(&mut self, width: f64, height: f64) {
        match self {
            SceneKind::Neural(s) => s.resize(width, height),
        }
    }

    fn viewport(&self) -> Viewport {
        match self {
            SceneKind::Neural(s) => s.viewport(),
        }
    }

    fn params(&self) -> Value {
        match self {
            SceneKind::Neural(s) => s.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            SceneKind::Neural(s) => s.param_schema(),
        }
    }
}

/// Builds the scene a [`Seed`] describes, advances it `seed.steps` frames,
/// and renders the final frame onto a fresh raster.
pub fn render_seed(seed: &Seed) -> Result<Raster, FxError> {
    seed.validate()?;
    let (w, h) = (seed.width as f64, seed.height as f64);
    let mut scene = SceneKind::from_name(&seed.scene, w, h, seed.seed, &seed.params)?;
    (0..seed.steps).for_each(|_| scene.advance());
    let mut raster = Raster::new(seed.width, seed.height);
    scene.render(&mut raster);
    log::debug!(
        "rendered {} at {}x{} after {} steps",
        seed.scene,
        seed.width,
        seed.height,
        seed.steps
    );
    Ok(raster)
}
