use crate::params::Params;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,          // Fixed tick length
    pub now: f32,         // Total simulated time
    pub accumulator: f32, // Real time not yet consumed by a tick
    pub ticks: u64,
}

impl Time {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            now: 0.0,
            accumulator: 0.0,
            ticks: 0,
        }
    }

    /// Bank elapsed real time and return how many whole ticks are due
    pub fn bank(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, Params::MAX_FRAME_DT);
        let mut due = 0;
        while self.accumulator >= self.dt {
            self.accumulator -= self.dt;
            due += 1;
        }
        due
    }

    pub fn advance_tick(&mut self) {
        self.now += self.dt;
        self.ticks += 1;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new(Params::TICK_DT)
    }
}

/// Score and foul tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub score: u32,
    pub strikes: u32, // Shown on the HUD, never incremented
    pub fouls: u32,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_home_run(&mut self) {
        self.score += 1;
    }

    /// Count a foul; returns true when this foul reaches the limit
    pub fn add_foul(&mut self, limit: u32) -> bool {
        self.fouls += 1;
        self.fouls >= limit
    }
}

/// Transient on-screen feedback that fades out over a number of ticks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub alpha: u8,
    pub ticks_left: u32,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, text: &str, ticks: u32) {
        self.text = text.to_string();
        self.ticks_left = ticks;
        self.alpha = Params::MESSAGE_ALPHA_MAX;
    }

    /// Count one tick down and fade proportionally to the time left
    pub fn fade(&mut self, total_ticks: u32) {
        if self.ticks_left > 0 {
            self.ticks_left -= 1;
            let alpha = Params::MESSAGE_ALPHA_MAX as u32 * self.ticks_left / total_ticks.max(1);
            self.alpha = alpha.min(Params::MESSAGE_ALPHA_MAX as u32) as u8;
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.text.is_empty() && self.alpha > 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during the last tick or input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub swung: bool,
    pub home_run: bool,
    pub foul: bool,
    pub ball_respawned: bool,
    pub game_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
