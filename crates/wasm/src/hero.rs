//! Floating particles in the hero section (`#neuralParticles`).

use portfolio_fx_effects::{hero_particles, hero::DEFAULT_HERO_PARTICLES};
use wasm_bindgen::JsValue;
use web_sys::Document;

const CONTAINER_ID: &str = "neuralParticles";

/// Appends one `div.particle` per hero particle. No-op without the container.
pub fn mount(document: &Document) -> Result<(), JsValue> {
    let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
        return Ok(());
    };
    let mut rng = js_sys::Math::random;
    for particle in hero_particles(DEFAULT_HERO_PARTICLES, &mut rng) {
        let div = document.create_element("div")?;
        div.set_class_name("particle");
        div.set_attribute("style", &particle.style())?;
        container.append_child(&div)?;
    }
    log::debug!("hero: {DEFAULT_HERO_PARTICLES} particles");
    Ok(())
}
