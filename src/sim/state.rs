//! Game state and core simulation types
//!
//! `GameState` is the single authoritative copy of the world. It is owned by
//! the simulation session and only mutated by `tick` and the action handlers.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::map_center;

/// The player-controlled crab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Facing angle (radians)
    pub angle: f32,
    pub running: bool,
    /// 0..=MAX_HEALTH, never removed at 0
    pub health: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: map_center(),
            angle: 0.0,
            running: false,
            health: MAX_HEALTH,
        }
    }
}

impl Player {
    /// Tip of the shotgun, one radius out along the facing angle
    pub fn weapon_tip(&self) -> Vec2 {
        self.pos + Vec2::from_angle(self.angle) * PLAYER_RADIUS
    }

    /// Speed for this tick (before the stick magnitude is applied)
    pub fn speed(&self) -> f32 {
        if self.running {
            PLAYER_SPEED * RUN_MULTIPLIER
        } else {
            PLAYER_SPEED
        }
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = (self.health + amount).min(MAX_HEALTH);
    }
}

/// A shotgun pellet. No id: pellets are ephemeral and nothing refers to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pellet {
    pub pos: Vec2,
    /// Heading (radians), fixed for the pellet's life
    pub angle: f32,
    /// Remaining lifetime in ticks
    pub lifetime: u32,
}

impl Pellet {
    pub fn new(pos: Vec2, angle: f32) -> Self {
        Self {
            pos,
            angle,
            lifetime: PELLET_LIFETIME,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::from_angle(self.angle) * PELLET_SPEED
    }
}

/// A zombie pursuing the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zombie {
    pub id: u32,
    pub pos: Vec2,
    pub health: u32,
}

impl Zombie {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            health: ZOMBIE_START_HEALTH,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

/// Fire gate. The only explicit state machine in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CooldownState {
    /// Cooldown is zero, fire will be accepted
    Ready,
    /// Cooldown is counting down, fire is rejected
    Cooling,
}

/// Something that happened since the last published snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Fired { pellets: usize },
    FireRejected { cooldown: u32 },
    Healed { health: u32 },
    RunToggled { running: bool },
    ZombieHit { id: u32, health: u32 },
    ZombieKilled { id: u32 },
    ZombieSpawned { id: u32 },
    PlayerHurt { health: u32 },
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawner randomness
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// Active pellets (insertion order)
    pub pellets: Vec<Pellet>,
    /// Active zombies (insertion order, which is also id order)
    pub zombies: Vec<Zombie>,
    /// Cumulative zombie deaths
    pub score: u64,
    /// Ticks until the shotgun can fire again
    pub shoot_cooldown: u32,
    /// Events not yet published
    pub events: Vec<GameEvent>,
    /// Next zombie ID, never reused
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self::empty(seed);

        state.spawn_zombie(Vec2::new(100.0, 100.0));
        state.spawn_zombie(Vec2::new(700.0, 700.0));

        state
    }

    /// A world with the player at center and no zombies
    pub fn empty(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            player: Player::default(),
            pellets: Vec::new(),
            zombies: Vec::new(),
            score: 0,
            shoot_cooldown: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new zombie ID
    pub fn next_zombie_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a zombie at `pos` with a fresh id
    pub fn spawn_zombie(&mut self, pos: Vec2) -> u32 {
        let id = self.next_zombie_id();
        self.zombies.push(Zombie::new(id, pos));
        id
    }

    pub fn cooldown_state(&self) -> CooldownState {
        if self.shoot_cooldown == 0 {
            CooldownState::Ready
        } else {
            CooldownState::Cooling
        }
    }
}
