use crate::constants::{PARTICLES_ID, PARTICLE_CLASS};
use crate::core::constants::{PARTICLE_COUNT, PARTICLE_RESPAWN_TOP_PX};
use crate::core::{needs_respawn, respawn_left_pct, ParticleStyle};
use crate::dom;
use crate::frame;
use anyhow::anyhow;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

fn spawn_particles(
    document: &web::Document,
    container: &web::Element,
    rng: &mut StdRng,
) -> anyhow::Result<Vec<web::Element>> {
    let mut particles = Vec::with_capacity(PARTICLE_COUNT);
    for _ in 0..PARTICLE_COUNT {
        let el = document
            .create_element("div")
            .map_err(|e| anyhow!("create particle: {:?}", e))?;
        el.set_class_name(PARTICLE_CLASS);
        _ = el.set_attribute("style", &ParticleStyle::random(rng).css_text());
        container
            .append_child(&el)
            .map_err(|e| anyhow!("append particle: {:?}", e))?;
        particles.push(el);
    }
    Ok(particles)
}

/// Fill `#particles` and recycle particles that drift below the viewport.
/// Pages without the container get no background. Particles are detached on
/// `beforeunload`, which also ends the recycling loop.
pub fn start(document: &web::Document) -> anyhow::Result<()> {
    let Some(container) = document.get_element_by_id(PARTICLES_ID) else {
        log::info!("[particles] no #{}, skipping", PARTICLES_ID);
        return Ok(());
    };
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let mut rng = StdRng::from_entropy();
    let particles = spawn_particles(document, &container, &mut rng)?;
    log::info!("[particles] spawned {}", particles.len());

    let to_remove = particles.clone();
    dom::add_listener(&window, "beforeunload", move |_ev: web::Event| {
        for p in &to_remove {
            p.remove();
        }
    });

    frame::start_loop(move || {
        let attached = particles.first().map_or(false, |p| p.is_connected());
        if !container.is_connected() || !attached {
            return false;
        }
        let viewport = dom::viewport_height(&window);
        for p in &particles {
            if needs_respawn(p.get_bounding_client_rect().top(), viewport) {
                dom::set_style(p, "top", &format!("{}px", PARTICLE_RESPAWN_TOP_PX));
                dom::set_style(p, "left", &format!("{:.3}%", respawn_left_pct(&mut rng)));
            }
        }
        true
    });
    Ok(())
}
