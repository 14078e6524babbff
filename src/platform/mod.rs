//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame scheduling (animation frames vs. explicit pumping)
//! - Browser bindings for input and actions

pub mod frame;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use frame::{FrameHost, FrameLoop, FrameToken, ManualFrameHost};
