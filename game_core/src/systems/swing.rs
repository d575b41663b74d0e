use hecs::World;
use rand::Rng;

use super::{ball_in_hit_zone, record_foul, respawn_ball};
use crate::{Config, Events, GameRng, Message, Phase, Tally};

pub const HOME_RUN_TEXT: &str = "HOME RUN!";
pub const FOUL_TEXT: &str = "FOUL!";

/// Outcome of a single swing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwingOutcome {
    HomeRun,
    /// Ball was in the zone but the swing was mistimed
    Mishit,
    Whiff,
}

/// Resolve a swing against the current ball position
#[allow(clippy::too_many_arguments)]
pub fn swing_bat(
    world: &mut World,
    config: &Config,
    tally: &mut Tally,
    phase: &mut Phase,
    message: &mut Message,
    events: &mut Events,
    rng: &mut GameRng,
) -> SwingOutcome {
    events.swung = true;

    let outcome = if ball_in_hit_zone(world, config.variant) {
        if rng.0.gen_bool(config.mishit_chance.clamp(0.0, 1.0)) {
            SwingOutcome::Mishit
        } else {
            SwingOutcome::HomeRun
        }
    } else {
        SwingOutcome::Whiff
    };

    match outcome {
        SwingOutcome::HomeRun => {
            tally.add_home_run();
            events.home_run = true;
            log::info!("Home run! Score: {}", tally.score);
            if config.show_messages {
                message.show(HOME_RUN_TEXT, config.message_ticks);
            }
            respawn_ball(world, config, events, rng);
        }
        SwingOutcome::Mishit | SwingOutcome::Whiff => {
            if config.show_messages {
                message.show(FOUL_TEXT, config.message_ticks);
            }
            // A limit-reaching foul replaces the feedback with the game over text
            record_foul(tally, phase, config, message, events);
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_bat, Ball};
    use glam::IVec2;

    struct Fixture {
        world: World,
        config: Config,
        tally: Tally,
        phase: Phase,
        message: Message,
        events: Events,
        rng: GameRng,
    }

    /// Bat at its start position with a ball either centered in it or far away
    fn setup(config: Config, ball_in_zone: bool) -> Fixture {
        let mut world = World::new();
        create_bat(&mut world, config.bat_start, config.bat_size);
        let ball_pos = if ball_in_zone {
            config.bat_start + (config.bat_size - IVec2::splat(40)) / 2
        } else {
            IVec2::new(0, 0)
        };
        create_ball(&mut world, ball_pos, IVec2::splat(40), config.initial_ball_speed);
        Fixture {
            world,
            config,
            tally: Tally::new(),
            phase: Phase::Playing,
            message: Message::new(),
            events: Events::new(),
            rng: GameRng::new(12345),
        }
    }

    fn swing(f: &mut Fixture) -> SwingOutcome {
        swing_bat(
            &mut f.world,
            &f.config,
            &mut f.tally,
            &mut f.phase,
            &mut f.message,
            &mut f.events,
            &mut f.rng,
        )
    }

    fn ball(world: &World) -> Ball {
        *world.query::<&Ball>().iter().next().unwrap().1
    }

    #[test]
    fn test_clean_hit_scores_and_repitches() {
        let config = Config {
            mishit_chance: 0.0,
            ..Config::classic()
        };
        let mut f = setup(config, true);

        assert_eq!(swing(&mut f), SwingOutcome::HomeRun);
        assert_eq!(f.tally.score, 1);
        assert_eq!(f.tally.fouls, 0);
        assert!(f.events.swung && f.events.home_run && f.events.ball_respawned);
        assert_eq!(ball(&f.world).pos.y, 0);
    }

    #[test]
    fn test_mishit_is_foul_and_ball_stays() {
        let config = Config {
            mishit_chance: 1.0,
            ..Config::classic()
        };
        let mut f = setup(config, true);
        let before = ball(&f.world).pos;

        assert_eq!(swing(&mut f), SwingOutcome::Mishit);
        assert_eq!(f.tally.score, 0);
        assert_eq!(f.tally.fouls, 1);
        assert!(f.events.foul);
        assert!(!f.events.ball_respawned);
        assert_eq!(ball(&f.world).pos, before);
    }

    #[test]
    fn test_whiff_is_always_foul() {
        let config = Config {
            mishit_chance: 0.0,
            ..Config::arcade()
        };
        let mut f = setup(config, false);

        assert_eq!(swing(&mut f), SwingOutcome::Whiff);
        assert_eq!(f.tally.fouls, 1);
        assert_eq!(f.message.text, FOUL_TEXT);
    }

    #[test]
    fn test_arcade_home_run_message() {
        let config = Config {
            mishit_chance: 0.0,
            ..Config::arcade()
        };
        let mut f = setup(config, true);

        swing(&mut f);
        assert_eq!(f.message.text, HOME_RUN_TEXT);
        assert_eq!(f.message.alpha, 255);
        assert_eq!(f.message.ticks_left, 30);
    }

    #[test]
    fn test_swing_foul_at_limit_ends_game() {
        let config = Config {
            foul_limit: 2,
            ..Config::arcade()
        };
        let mut f = setup(config, false);

        swing(&mut f);
        assert_eq!(f.phase, Phase::Playing);
        swing(&mut f);
        assert_eq!(f.phase, Phase::GameOver);
        assert_eq!(f.message.text, crate::systems::GAME_OVER_TEXT);
    }

    #[test]
    fn test_mishit_rate_roughly_matches_chance() {
        let mut f = setup(Config::classic(), true);
        let mut mishits = 0;
        for _ in 0..1000 {
            f.phase = Phase::Playing;
            f.tally = Tally::new();
            // Keep the ball in the zone between swings
            for (_e, ball) in f.world.query_mut::<&mut Ball>() {
                ball.pos = f.config.bat_start + (f.config.bat_size - ball.size) / 2;
            }
            if swing(&mut f) == SwingOutcome::Mishit {
                mishits += 1;
            }
        }
        assert!((400..600).contains(&mishits), "got {mishits} mishits");
    }
}
