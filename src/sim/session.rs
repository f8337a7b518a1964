//! Game session: owns every piece of mutable game state
//!
//! The frame driver holds one `Session` and passes it explicitly to `tick` and
//! the renderer. Nothing lives in globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::can_harvest;
use super::garden::Garden;
use super::robot::Robot;
use super::vegetable::VegetableKind;
use crate::config::GameConfig;
use crate::platform::input::{HeldKeys, InputEvent};

/// Something worth telling the driver about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The robot harvested a vegetable
    Harvested { id: u32, kind: VegetableKind },
    /// Every vegetable of the round has been harvested
    GardenCleared { round: u32 },
    /// A new round started from the restart button
    Restarted { round: u32 },
}

#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    /// Seed the session was created with
    seed: u64,
    rng: Pcg32,
    pub robot: Robot,
    pub garden: Garden,
    /// Keys currently held according to the input backend
    held: HeldKeys,
    /// Keys applied during the last `update` (drives the thruster flame)
    applied: HeldKeys,
    /// Round counter, 1-based
    round: u32,
    /// Frames simulated since the session started
    frame: u64,
    cleared_announced: bool,
    events: Vec<GameEvent>,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let config = config.sanitized();
        let mut rng = Pcg32::seed_from_u64(seed);
        let garden = generate_garden(&config, &mut rng);
        let robot = Robot::centered(&config);

        log::info!(
            "Session started with seed {} ({} vegetables)",
            seed,
            garden.total()
        );

        Self {
            config,
            seed,
            rng,
            robot,
            garden,
            held: HeldKeys::new(),
            applied: HeldKeys::new(),
            round: 1,
            frame: 0,
            cleared_announced: false,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn held_keys(&self) -> &HeldKeys {
        &self.held
    }

    pub fn applied_keys(&self) -> &HeldKeys {
        &self.applied
    }

    /// Consume a discrete input event.
    ///
    /// Key events update the held set. Once the garden is cleared, a click
    /// or a key press with the pointer inside the restart button restarts
    /// the round.
    pub fn handle_input(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Click { x, y } => self.press_restart(Vec2::new(x, y)),
            InputEvent::KeyDownAt { x, y, .. } => {
                self.held.apply(event);
                self.press_restart(Vec2::new(x, y));
            }
            _ => self.held.apply(event),
        }
    }

    fn press_restart(&mut self, pointer: Vec2) {
        if self.is_complete() && self.config.restart_button().contains(pointer) {
            self.reset();
        }
    }

    /// Advance the robot one frame from `held`
    pub fn update(&mut self, held: &HeldKeys) {
        self.robot.update(held, &self.config);
        self.applied = *held;
    }

    /// Harvest every uncollected vegetable in range; returns how many were taken
    pub fn check_harvest(&mut self) -> usize {
        let distance = self.config.harvest_distance();
        let mut harvested = 0;
        for veg in self.garden.iter_mut() {
            if can_harvest(&self.robot, veg, distance) {
                veg.harvest();
                harvested += 1;
                log::info!("Robot harvested {} #{}", veg.kind.name(), veg.id);
                self.events.push(GameEvent::Harvested {
                    id: veg.id,
                    kind: veg.kind,
                });
            }
        }
        harvested
    }

    /// Vegetables harvested this round (derived from the live set)
    pub fn collected_count(&self) -> usize {
        self.garden.collected_count()
    }

    /// Vegetables generated this round
    pub fn total(&self) -> usize {
        self.garden.total()
    }

    /// All vegetables of the round are harvested (some may still be fading)
    pub fn is_complete(&self) -> bool {
        self.collected_count() == self.total()
    }

    /// Start a new round: centered robot, fresh garden, no held keys
    pub fn reset(&mut self) {
        self.garden = generate_garden(&self.config, &mut self.rng);
        self.robot = Robot::centered(&self.config);
        self.held.clear();
        self.applied.clear();
        self.round += 1;
        self.cleared_announced = false;
        log::info!("Round {} started", self.round);
        self.events.push(GameEvent::Restarted { round: self.round });
    }

    /// Called once per frame after pruning
    pub(crate) fn end_frame(&mut self) {
        self.frame += 1;
        if self.is_complete() && !self.cleared_announced {
            self.cleared_announced = true;
            log::info!(
                "Garden cleared in round {} ({} vegetables)",
                self.round,
                self.total()
            );
            self.events.push(GameEvent::GardenCleared { round: self.round });
        }
    }

    /// Take all events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

fn generate_garden(config: &GameConfig, rng: &mut Pcg32) -> Garden {
    Garden::generate(
        rng,
        config.vegetable_count,
        &VegetableKind::ALL,
        config.field_width,
        config.field_height,
        config.vegetable_size,
        config.fade_duration,
    )
}
