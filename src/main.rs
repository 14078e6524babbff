//! Zombie Crab entry point
//!
//! Native builds run a headless session driven by the frame loop; the browser
//! build is started from `platform::web` and this binary does nothing there.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use zombie_crab::Settings;

    env_logger::init();
    log::info!("Zombie Crab (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Settings::default()
            }
        },
        None => Settings::default(),
    };

    match headless::run(&settings) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Headless run failed: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;
    use zombie_crab::Settings;
    use zombie_crab::error::Result;
    use zombie_crab::platform::{FrameLoop, ManualFrameHost};
    use zombie_crab::sim::{Action, CooldownState, Simulation, Snapshot};

    /// Zombies inside this range get shot at
    const ENGAGE_RANGE: f32 = 160.0;
    /// Heal when health drops below this
    const HEAL_BELOW: u32 = 50;

    /// Run the configured number of frames; returns the final snapshot as JSON
    pub fn run(settings: &Settings) -> Result<String> {
        let mut sim = Simulation::new(settings.resolve_seed());
        let mut frames = FrameLoop::new(ManualFrameHost::new());
        frames.start()?;

        for _ in 0..settings.headless_ticks {
            if settings.autopilot {
                autopilot(&mut sim);
            }
            let Some(snap) = frames.pump(&mut sim)? else {
                break;
            };
            if settings.report_every > 0 && snap.tick % settings.report_every == 0 {
                report(snap);
            }
        }

        frames.stop();
        Ok(sim.snapshot().to_json()?)
    }

    fn report(snap: &Snapshot) {
        log::info!(
            "tick {:>5} | hp {:>3} | score {:>3} | zombies {:>2} | pellets {:>2}",
            snap.tick,
            snap.player.health,
            snap.score,
            snap.zombies.len(),
            snap.pellets.len()
        );
    }

    /// Face the nearest zombie and shoot it when close, wander otherwise
    fn autopilot(sim: &mut Simulation) {
        let snap = sim.snapshot();
        let player = snap.player.pos;
        let nearest = snap
            .zombies
            .iter()
            .map(|z| z.pos)
            .min_by(|a, b| {
                a.distance(player)
                    .partial_cmp(&b.distance(player))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        let heal = snap.player.health < HEAL_BELOW;
        let ready = snap.cooldown_state == CooldownState::Ready;
        let tick = snap.tick;

        if heal {
            sim.trigger(Action::Heal);
        }

        match nearest {
            Some(target) if target.distance(player) < ENGAGE_RANGE => {
                // Just over the deadzone: turns to face without charging in
                sim.move_stick(angle_deg(target - player), 25.0);
                if ready {
                    sim.trigger(Action::Fire);
                }
            }
            _ => {
                let heading = (tick as f32 * 0.01).sin() * 180.0 + 180.0;
                sim.move_stick(heading, 60.0);
            }
        }
    }

    fn angle_deg(v: Vec2) -> f32 {
        v.y.atan2(v.x).to_degrees().rem_euclid(360.0)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_headless_run_is_reproducible() {
            let settings = Settings {
                seed: Some(1234),
                headless_ticks: 300,
                report_every: 0,
                autopilot: true,
            };
            let first = run(&settings).unwrap();
            let second = run(&settings).unwrap();
            assert_eq!(first, second);
            assert!(first.contains("\"tick\":300"));
        }
    }
}
