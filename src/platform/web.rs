//! Browser bindings
//!
//! `WebGame` is the handle the page holds: joystick and button handlers call
//! into it, and it drives the simulation from `requestAnimationFrame`.
//! Stopping (or dropping the handle) cancels the outstanding animation frame.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::frame::{FrameHost, FrameLoop, FrameToken};
use crate::error::{Result, SimError};
use crate::sim::{Action, Simulation};

type FrameCallback = Closure<dyn FnMut(f64)>;

/// `requestAnimationFrame` / `cancelAnimationFrame` on the page window
pub struct BrowserFrameHost {
    window: web_sys::Window,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameHost for BrowserFrameHost {
    fn request_frame(&mut self) -> Result<FrameToken> {
        let slot = self.callback.borrow();
        let callback = slot
            .as_ref()
            .ok_or_else(|| SimError::Host("frame callback not installed".into()))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map(|id| FrameToken(id as i64))
            .map_err(|e| SimError::Host(format!("{:?}", e)))
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if let Err(e) = self.window.cancel_animation_frame(token.0 as i32) {
            log::warn!("cancelAnimationFrame failed: {:?}", e);
        }
    }
}

struct Inner {
    sim: Simulation,
    frames: FrameLoop<BrowserFrameHost>,
}

/// Game handle exported to the page
#[wasm_bindgen]
pub struct WebGame {
    inner: Rc<RefCell<Inner>>,
    // Keeps the animation-frame closure alive for as long as the handle
    _callback: Rc<RefCell<Option<FrameCallback>>>,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> std::result::Result<WebGame, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let seed = seed.unwrap_or_else(|| js_sys::Date::now() as u64);

        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let host = BrowserFrameHost {
            window,
            callback: callback.clone(),
        };
        let inner = Rc::new(RefCell::new(Inner {
            sim: Simulation::new(seed),
            frames: FrameLoop::new(host),
        }));

        let weak = Rc::downgrade(&inner);
        let closure = FrameCallback::new(move |_time: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let mut guard = inner.borrow_mut();
            let Inner { sim, frames } = &mut *guard;
            if let Err(e) = frames.on_frame(sim) {
                log::error!("Frame failed: {}", e);
            }
        });
        *callback.borrow_mut() = Some(closure);

        Ok(WebGame {
            inner,
            _callback: callback,
        })
    }

    /// Begin ticking once per animation frame
    pub fn start(&self) -> std::result::Result<(), JsValue> {
        self.inner
            .borrow_mut()
            .frames
            .start()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn stop(&self) {
        self.inner.borrow_mut().frames.stop();
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().frames.is_running()
    }

    /// Joystick move: `angle` in degrees, `distance` 0..100
    pub fn move_stick(&self, angle: f32, distance: f32) {
        self.inner.borrow_mut().sim.move_stick(angle, distance);
    }

    pub fn stop_stick(&self) {
        self.inner.borrow_mut().sim.stop_stick();
    }

    pub fn fire(&self) {
        self.inner.borrow_mut().sim.trigger(Action::Fire);
    }

    pub fn toggle_run(&self) {
        self.inner.borrow_mut().sim.trigger(Action::ToggleRun);
    }

    pub fn heal(&self) {
        self.inner.borrow_mut().sim.trigger(Action::Heal);
    }

    /// Latest snapshot as JSON for the renderer and HUD
    pub fn snapshot_json(&self) -> std::result::Result<String, JsValue> {
        self.inner
            .borrow()
            .sim
            .snapshot()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Zombie Crab starting...");
}
