//! Frame scheduling
//!
//! The host delivers frames (an animation-frame callback in the browser, an
//! explicit pump when headless). `FrameLoop` holds at most one outstanding
//! registration: each delivered frame consumes it, runs one tick and
//! registers the next. Stopping cancels the outstanding registration, so no
//! further ticks run.

use std::collections::VecDeque;

use crate::error::{Result, SimError};
use crate::sim::{Simulation, Snapshot};

/// Handle for one requested frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(pub i64);

/// Something that can call us back on the next frame
pub trait FrameHost {
    /// Ask for one callback on the next frame
    fn request_frame(&mut self) -> Result<FrameToken>;
    /// Withdraw a request; the callback must not fire afterwards
    fn cancel_frame(&mut self, token: FrameToken);
}

/// Drives a `Simulation` from host frames
#[derive(Debug)]
pub struct FrameLoop<H: FrameHost> {
    host: H,
    token: Option<FrameToken>,
    frames: u64,
}

impl<H: FrameHost> FrameLoop<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            token: None,
            frames: 0,
        }
    }

    /// Register the recurring frame callback
    pub fn start(&mut self) -> Result<()> {
        if self.token.is_some() {
            log::warn!("Frame loop start ignored: already running");
            return Err(SimError::AlreadyRunning);
        }
        self.token = Some(self.host.request_frame()?);
        log::info!("Frame loop started");
        Ok(())
    }

    /// Cancel the outstanding registration, if any
    pub fn stop(&mut self) {
        if let Some(token) = self.token.take() {
            self.host.cancel_frame(token);
            log::info!("Frame loop stopped after {} frames", self.frames);
        }
    }

    pub fn is_running(&self) -> bool {
        self.token.is_some()
    }

    /// Frames ticked since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Host callback: run one tick and register the next frame
    ///
    /// A frame arriving while stopped does nothing. If the host cannot
    /// schedule the next frame the loop stops and the error is returned.
    pub fn on_frame<'a>(&mut self, sim: &'a mut Simulation) -> Result<Option<&'a Snapshot>> {
        if self.token.take().is_none() {
            return Ok(None);
        }

        self.frames += 1;
        let snapshot = sim.step();

        match self.host.request_frame() {
            Ok(token) => self.token = Some(token),
            Err(err) => {
                log::error!("Frame loop halted: {err}");
                return Err(err);
            }
        }
        Ok(Some(snapshot))
    }
}

impl<H: FrameHost> Drop for FrameLoop<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Host for headless runs and tests: frames are delivered by `next_frame`
#[derive(Debug, Default)]
pub struct ManualFrameHost {
    next_token: i64,
    pending: VecDeque<FrameToken>,
}

impl ManualFrameHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests not yet delivered or cancelled
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Pop the oldest pending request, as the display would on vsync
    pub fn next_frame(&mut self) -> Option<FrameToken> {
        self.pending.pop_front()
    }
}

impl FrameHost for ManualFrameHost {
    fn request_frame(&mut self) -> Result<FrameToken> {
        self.next_token += 1;
        let token = FrameToken(self.next_token);
        self.pending.push_back(token);
        Ok(token)
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.pending.retain(|t| *t != token);
    }
}

impl FrameLoop<ManualFrameHost> {
    /// Deliver one frame if the host has one pending
    pub fn pump<'a>(&mut self, sim: &'a mut Simulation) -> Result<Option<&'a Snapshot>> {
        match self.host.next_frame() {
            Some(_) => self.on_frame(sim),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_start_registers_single_frame() {
        let mut frames = FrameLoop::new(ManualFrameHost::new());
        frames.start().unwrap();
        assert!(frames.is_running());
        assert_eq!(frames.host().pending(), 1);

        assert!(matches!(frames.start(), Err(SimError::AlreadyRunning)));
        assert_eq!(frames.host().pending(), 1);
    }

    #[test]
    fn test_each_frame_ticks_once() {
        let mut sim = Simulation::new(1);
        let mut frames = FrameLoop::new(ManualFrameHost::new());
        frames.start().unwrap();

        for expected in 1..=5 {
            let snap = frames.pump(&mut sim).unwrap().map(|s| s.tick);
            assert_eq!(snap, Some(expected));
            assert_eq!(frames.host().pending(), 1);
        }
        assert_eq!(frames.frames(), 5);
    }

    #[test]
    fn test_stop_cancels_pending_frame() {
        let mut sim = Simulation::new(1);
        let mut frames = FrameLoop::new(ManualFrameHost::new());
        frames.start().unwrap();
        frames.pump(&mut sim).unwrap();

        frames.stop();
        assert!(!frames.is_running());
        assert_eq!(frames.host().pending(), 0);
        assert!(frames.pump(&mut sim).unwrap().is_none());
        assert_eq!(sim.snapshot().tick, 1);
    }

    #[test]
    fn test_stale_frame_is_ignored() {
        let mut sim = Simulation::new(1);
        let mut frames = FrameLoop::new(ManualFrameHost::new());
        frames.start().unwrap();
        frames.stop();

        // A callback that was already in flight when stop ran
        assert!(frames.on_frame(&mut sim).unwrap().is_none());
        assert_eq!(sim.snapshot().tick, 0);
    }

    #[test]
    fn test_restart_after_stop() {
        let mut sim = Simulation::new(1);
        let mut frames = FrameLoop::new(ManualFrameHost::new());
        frames.start().unwrap();
        frames.stop();
        frames.start().unwrap();
        assert_eq!(frames.host().pending(), 1);
        assert!(frames.pump(&mut sim).unwrap().is_some());
    }

    /// Host shared with the test so it can be inspected after the loop is gone
    struct SharedHost(Rc<RefCell<ManualFrameHost>>);

    impl FrameHost for SharedHost {
        fn request_frame(&mut self) -> Result<FrameToken> {
            self.0.borrow_mut().request_frame()
        }

        fn cancel_frame(&mut self, token: FrameToken) {
            self.0.borrow_mut().cancel_frame(token);
        }
    }

    #[test]
    fn test_drop_cancels_pending_frame() {
        let host = Rc::new(RefCell::new(ManualFrameHost::new()));
        let mut sim = Simulation::new(1);

        let mut frames = FrameLoop::new(SharedHost(host.clone()));
        frames.start().unwrap();
        assert_eq!(host.borrow().pending(), 1);

        // Deliver one frame, which registers the next
        let delivered = host.borrow_mut().next_frame();
        assert!(delivered.is_some());
        frames.on_frame(&mut sim).unwrap();
        assert_eq!(host.borrow().pending(), 1);

        drop(frames);
        assert_eq!(host.borrow().pending(), 0);
        assert_eq!(sim.snapshot().tick, 1);
    }

    struct FailingHost;

    impl FrameHost for FailingHost {
        fn request_frame(&mut self) -> Result<FrameToken> {
            Err(SimError::Host("no display".into()))
        }

        fn cancel_frame(&mut self, _token: FrameToken) {}
    }

    #[test]
    fn test_host_failure_on_start() {
        let mut frames = FrameLoop::new(FailingHost);
        assert!(matches!(frames.start(), Err(SimError::Host(_))));
        assert!(!frames.is_running());
    }
}
