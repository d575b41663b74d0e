use hecs::World;

use super::{ball_in_hit_zone, record_foul};
use crate::{Ball, Config, Events, GameRng, Message, Phase, Tally};

/// Move the ball down by its speed
pub fn fall_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos.y += ball.speed;
    }
}

/// Handle a ball that dropped past the bottom edge.
/// A ball that leaves the field outside the hit zone is a foul. The ball
/// is pitched again from the top either way.
#[allow(clippy::too_many_arguments)]
pub fn check_bottom(
    world: &mut World,
    config: &Config,
    tally: &mut Tally,
    phase: &mut Phase,
    message: &mut Message,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let passed = world
        .query::<&Ball>()
        .iter()
        .any(|(_e, ball)| ball.pos.y > config.arena.y);
    if !passed {
        return;
    }

    if !ball_in_hit_zone(world, config.variant) {
        record_foul(tally, phase, config, message, events);
    }
    respawn_ball(world, config, events, rng);
}

/// Pitch a fresh ball from the top edge
pub fn respawn_ball(world: &mut World, config: &Config, events: &mut Events, rng: &mut GameRng) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(config, rng);
        log::debug!("Ball pitched at x={} speed={}", ball.pos.x, ball.speed);
    }
    events.ball_respawned = true;
}

/// Count down the feedback message
pub fn fade_message(message: &mut Message, config: &Config) {
    message.fade(config.message_ticks);
}
