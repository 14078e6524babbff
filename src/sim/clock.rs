//! Simulation session: the single owner of the game state
//!
//! Hosts feed it stick readings and action triggers between frames and call
//! `step` once per delivered frame. Observers only ever see the published
//! `Snapshot`.

use super::actions::{self, Action};
use super::input::StickInput;
use super::movement::face_stick;
use super::snapshot::Snapshot;
use super::state::GameState;
use super::tick::{TickInput, tick};

#[derive(Debug, Clone)]
pub struct Simulation {
    state: GameState,
    stick: StickInput,
    snapshot: Snapshot,
}

impl Simulation {
    pub fn new(seed: u64) -> Self {
        Self::from_state(GameState::new(seed))
    }

    /// Wrap an existing state (useful for scripted scenarios)
    pub fn from_state(mut state: GameState) -> Self {
        log::info!("Simulation started with seed: {}", state.seed);
        let snapshot = Snapshot::capture(&mut state);
        Self {
            state,
            stick: StickInput::default(),
            snapshot,
        }
    }

    /// Record a stick reading; replaces any reading not yet consumed
    ///
    /// Facing follows the reading right away so a shot fired before the next
    /// tick goes where the stick points.
    pub fn move_stick(&mut self, angle_deg: f32, distance: f32) {
        self.stick = StickInput::from_device(angle_deg, distance);
        face_stick(&mut self.state.player, self.stick.vector());
    }

    /// Stick released
    pub fn stop_stick(&mut self) {
        self.stick = StickInput::default();
    }

    pub fn stick(&self) -> StickInput {
        self.stick
    }

    /// Run an action handler now, outside the tick
    pub fn trigger(&mut self, action: Action) {
        actions::apply(&mut self.state, action);
    }

    /// Advance one tick and publish a fresh snapshot
    pub fn step(&mut self) -> &Snapshot {
        let input = TickInput {
            stick: self.stick.vector(),
        };
        tick(&mut self.state, &input);
        self.snapshot = Snapshot::capture(&mut self.state);
        &self.snapshot
    }

    /// Snapshot from the most recent step
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}
