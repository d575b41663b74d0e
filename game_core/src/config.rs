use glam::IVec2;

use crate::params::Params;

/// Rule set selected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Rectangular hit zone, 13 fouls, speed re-rolled on every pitch
    #[default]
    Classic,
    /// Circular hit zone, 100 fouls, on-screen feedback messages
    Arcade,
}

impl Variant {
    /// Parse a variant name as passed from the page ("classic" / "arcade")
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "classic" | "v1" | "rect" => Some(Variant::Classic),
            "arcade" | "v2" | "circle" => Some(Variant::Arcade),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Arcade => "arcade",
        }
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub variant: Variant,
    pub arena: IVec2,
    pub bat_start: IVec2,
    pub bat_size: IVec2,
    pub ball_start: IVec2,
    pub ball_size: IVec2,
    pub initial_ball_speed: i32,
    /// Inclusive speed range drawn on every respawn; `None` keeps the current speed
    pub respawn_speed: Option<(i32, i32)>,
    pub foul_limit: u32,
    /// Chance that a swing with the ball in the zone still counts as a foul
    pub mishit_chance: f64,
    pub show_messages: bool,
    pub message_ticks: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::classic()
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rectangle-zone rules. Sprite sizes default to the fixed sizes until
    /// the real images are measured, see [`Config::with_sprite_sizes`].
    pub fn classic() -> Self {
        Self {
            variant: Variant::Classic,
            arena: IVec2::new(Params::ARENA_WIDTH, Params::ARENA_HEIGHT),
            bat_start: IVec2::new(Params::BAT_START_X, Params::BAT_START_Y),
            bat_size: IVec2::splat(Params::BAT_FIXED_SIZE),
            ball_start: IVec2::new(Params::BALL_START_X, Params::BALL_START_Y),
            ball_size: IVec2::splat(Params::BALL_FIXED_SIZE),
            initial_ball_speed: Params::CLASSIC_BALL_SPEED,
            respawn_speed: Some(Params::CLASSIC_RESPAWN_SPEED),
            foul_limit: Params::CLASSIC_FOUL_LIMIT,
            mishit_chance: Params::CLASSIC_MISHIT_CHANCE,
            show_messages: false,
            message_ticks: Params::MESSAGE_TICKS,
        }
    }

    /// Circle-zone rules with fixed 100px bat and 80px ball
    pub fn arcade() -> Self {
        Self {
            variant: Variant::Arcade,
            initial_ball_speed: Params::ARCADE_BALL_SPEED,
            respawn_speed: None,
            foul_limit: Params::ARCADE_FOUL_LIMIT,
            mishit_chance: Params::ARCADE_MISHIT_CHANCE,
            show_messages: true,
            ..Self::classic()
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self::classic(),
            Variant::Arcade => Self::arcade(),
        }
    }

    /// Size the sprites from the loaded images' natural dimensions.
    /// Only the classic rules scale with the images; arcade keeps its fixed sizes.
    pub fn with_sprite_sizes(mut self, bat_image: IVec2, ball_image: IVec2) -> Self {
        if self.variant == Variant::Classic {
            self.bat_size = scale_sprite(bat_image, Params::BAT_SPRITE_FACTOR);
            self.ball_size = scale_sprite(ball_image, Params::BALL_SPRITE_FACTOR);
        }
        self
    }

    /// Largest x a freshly pitched ball may take (exclusive upper bound)
    pub fn ball_spawn_span(&self) -> i32 {
        (self.arena.x - self.ball_size.x).max(1)
    }
}

/// Scale an image size by a factor, truncating like integer pixel sizes do
pub fn scale_sprite(size: IVec2, factor: f64) -> IVec2 {
    IVec2::new(
        (size.x as f64 * factor) as i32,
        (size.y as f64 * factor) as i32,
    )
}
