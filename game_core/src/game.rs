use glam::IVec2;
use hecs::World;

use crate::map::HitZone;
use crate::systems::*;
use crate::*;

/// Read-only view of everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub variant: Variant,
    pub phase: Phase,
    pub arena: IVec2,
    pub bat: Bat,
    pub ball: Ball,
    pub hit_zone: HitZone,
    pub tally: Tally,
    pub message: Message,
}

/// The game loop: owns the world and every resource, driven by ticks and input
pub struct Game {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub phase: Phase,
    pub tally: Tally,
    pub message: Message,
    pub events: Events,
    pub rng: GameRng,
}

impl Game {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut game = Self {
            world: World::new(),
            time: Time::default(),
            config,
            phase: Phase::Start,
            tally: Tally::new(),
            message: Message::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
        };
        game.spawn_entities();
        game
    }

    fn spawn_entities(&mut self) {
        create_bat(&mut self.world, self.config.bat_start, self.config.bat_size);
        create_ball(
            &mut self.world,
            self.config.ball_start,
            self.config.ball_size,
            self.config.initial_ball_speed,
        );
    }

    /// Consume elapsed real time and run every tick that is due
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        let due = self.time.bank(elapsed);
        for _ in 0..due {
            self.tick();
        }
        due
    }

    /// One fixed simulation step; does nothing unless a game is running
    pub fn tick(&mut self) {
        self.events.clear();
        if !self.phase.is_playing() {
            return;
        }

        fall_ball(&mut self.world);
        check_bottom(
            &mut self.world,
            &self.config,
            &mut self.tally,
            &mut self.phase,
            &mut self.message,
            &mut self.events,
            &mut self.rng,
        );
        fade_message(&mut self.message, &self.config);
        self.time.advance_tick();
    }

    pub fn pointer_moved(&mut self, cursor_x: i32) {
        move_bat(&mut self.world, self.phase, cursor_x);
    }

    /// Start, swing, or restart depending on the phase
    pub fn click(&mut self) {
        self.events.clear();
        match click_intent(self.phase) {
            ClickIntent::Begin => {
                if self.phase.transition(PhaseAction::Begin) {
                    log::info!("Play ball! ({} rules)", self.config.variant.name());
                }
            }
            ClickIntent::Swing => {
                swing_bat(
                    &mut self.world,
                    &self.config,
                    &mut self.tally,
                    &mut self.phase,
                    &mut self.message,
                    &mut self.events,
                    &mut self.rng,
                );
            }
            ClickIntent::Restart => self.reset(),
        }
    }

    /// Restart key; only honoured once the game is over
    pub fn restart_requested(&mut self) -> bool {
        if self.phase.is_game_over() {
            self.reset();
            true
        } else {
            false
        }
    }

    /// Put every field back to its initial value
    pub fn reset(&mut self) {
        self.world.clear();
        self.spawn_entities();
        self.time = Time::default();
        self.phase = Phase::Start;
        self.tally = Tally::new();
        self.message.clear();
        self.events.clear();
        log::info!("Game reset");
    }

    pub fn bat(&self) -> Bat {
        bat_of(&self.world)
            .unwrap_or_else(|| Bat::new(self.config.bat_start, self.config.bat_size))
    }

    pub fn ball(&self) -> Ball {
        ball_of(&self.world).unwrap_or_else(|| {
            Ball::new(
                self.config.ball_start,
                self.config.ball_size,
                self.config.initial_ball_speed,
            )
        })
    }

    pub fn ball_in_hit_zone(&self) -> bool {
        ball_in_hit_zone(&self.world, self.config.variant)
    }

    pub fn frame(&self) -> Frame {
        let bat = self.bat();
        Frame {
            variant: self.config.variant,
            phase: self.phase,
            arena: self.config.arena,
            bat,
            ball: self.ball(),
            hit_zone: hit_zone(self.config.variant, &bat),
            tally: self.tally,
            message: self.message.clone(),
        }
    }
}
