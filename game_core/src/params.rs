/// Game tuning parameters for the home run derby
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (logical pixels, y grows downward)
    pub const ARENA_WIDTH: i32 = 400;
    pub const ARENA_HEIGHT: i32 = 800;

    // Bat
    pub const BAT_START_X: i32 = 200;
    pub const BAT_START_Y: i32 = 600;
    pub const BAT_SPRITE_FACTOR: f64 = 1.0 / 2.0; // Applied to player.png
    pub const BAT_FIXED_SIZE: i32 = 100; // Arcade draws the bat at 100x100

    // Ball
    pub const BALL_START_X: i32 = 200;
    pub const BALL_START_Y: i32 = 0;
    pub const BALL_SPRITE_FACTOR: f64 = 1.0 / 5.0; // Applied to ball.png
    pub const BALL_FIXED_SIZE: i32 = 80;
    pub const CLASSIC_BALL_SPEED: i32 = 5; // pixels per tick
    pub const CLASSIC_RESPAWN_SPEED: (i32, i32) = (5, 15); // inclusive
    pub const ARCADE_BALL_SPEED: i32 = 10;

    // Fouls
    pub const CLASSIC_FOUL_LIMIT: u32 = 13;
    pub const ARCADE_FOUL_LIMIT: u32 = 100;
    pub const CLASSIC_MISHIT_CHANCE: f64 = 0.5;
    pub const ARCADE_MISHIT_CHANCE: f64 = 0.2;

    // Feedback messages
    pub const MESSAGE_TICKS: u32 = 30;
    pub const MESSAGE_ALPHA_MAX: u8 = 255;

    // Timing
    pub const TICK_DT: f32 = 0.016; // 16 ms redraw timer
    pub const MAX_FRAME_DT: f32 = 0.1; // Clamp to prevent large catch-up bursts
}
