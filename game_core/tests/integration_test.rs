use game_core::*;
use glam::IVec2;

/// Started game with the ball parked where the bat can never reach it
fn started(config: Config) -> Game {
    let mut game = Game::new(config, 42);
    game.click();
    assert_eq!(game.phase, Phase::Playing);
    game
}

/// Drop the ball past the bottom edge on the next tick
fn drop_ball(game: &mut Game) {
    let height = game.config.arena.y;
    for (_e, ball) in game.world.query_mut::<&mut Ball>() {
        ball.pos = IVec2::new(0, height);
    }
    game.tick();
}

fn park_ball_in_zone(game: &mut Game) {
    let bat = game.bat();
    for (_e, ball) in game.world.query_mut::<&mut Ball>() {
        ball.pos = bat.pos + (bat.size - ball.size) / 2;
        ball.speed = 0;
    }
    assert!(game.ball_in_hit_zone());
}

#[test]
fn test_thirteen_missed_balls_end_classic_game() {
    let mut game = started(Config::classic());

    for n in 1..=12 {
        drop_ball(&mut game);
        assert_eq!(game.tally.fouls, n);
        assert_eq!(game.phase, Phase::Playing, "foul {n} must not end the game");
    }
    drop_ball(&mut game);
    assert_eq!(game.tally.fouls, 13);
    assert_eq!(game.phase, Phase::GameOver);
    assert!(game.events.game_over);
}

#[test]
fn test_arcade_needs_a_hundred_fouls() {
    let mut game = started(Config::arcade());
    for _ in 0..99 {
        game.click(); // ball starts at the top, nowhere near the bat
    }
    assert_eq!(game.tally.fouls, 99);
    assert_eq!(game.phase, Phase::Playing);

    game.click();
    assert_eq!(game.tally.fouls, 100);
    assert_eq!(game.phase, Phase::GameOver);
}

#[test]
fn test_game_over_is_terminal_until_reset() {
    let config = Config {
        foul_limit: 1,
        ..Config::classic()
    };
    let mut game = started(config);
    drop_ball(&mut game);
    assert_eq!(game.phase, Phase::GameOver);

    let frozen = game.frame();
    for _ in 0..20 {
        game.tick();
        game.pointer_moved(5);
    }
    assert_eq!(game.frame(), frozen, "Nothing moves after game over");

    game.click();
    assert_eq!(game.phase, Phase::Start);
}

#[test]
fn test_reset_restores_initial_state() {
    let config = Config {
        foul_limit: 3,
        mishit_chance: 0.0,
        ..Config::arcade()
    };
    let mut game = started(config);
    game.pointer_moved(80);
    park_ball_in_zone(&mut game);
    game.click();
    assert_eq!(game.tally.score, 1);

    for _ in 0..3 {
        game.click();
    }
    assert_eq!(game.phase, Phase::GameOver);
    assert!(game.restart_requested());

    assert_eq!(game.tally, Tally::default());
    assert_eq!(game.phase, Phase::Start);
    assert_eq!(game.bat().pos, IVec2::new(200, 600));
    assert_eq!(game.ball().pos, IVec2::new(200, 0));
    assert_eq!(game.ball().speed, 10);
    assert_eq!(game.message, Message::default());
    assert_eq!(game.world.len(), 2, "Reset must not leak entities");
}

#[test]
fn test_ball_falls_at_its_speed_and_repitches() {
    let mut game = started(Config::classic());
    assert_eq!(game.ball().speed, 5);

    for _ in 0..160 {
        game.tick();
    }
    assert_eq!(game.ball().pos.y, 800);
    assert_eq!(game.tally.fouls, 0);

    game.tick();
    let ball = game.ball();
    assert_eq!(ball.pos.y, 0);
    assert!(ball.pos.x >= 0 && ball.pos.x <= 400 - ball.size.x);
    assert!((5..=15).contains(&ball.speed));
    assert_eq!(game.tally.fouls, 1);
}

#[test]
fn test_home_runs_accumulate() {
    let config = Config {
        mishit_chance: 0.0,
        ..Config::classic()
    };
    let mut game = started(config);
    for expected in 1..=5 {
        park_ball_in_zone(&mut game);
        game.click();
        assert!(game.events.home_run);
        assert_eq!(game.tally.score, expected);
    }
    assert_eq!(game.tally.fouls, 0);
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut game = started(Config::classic());
        game.rng = GameRng::new(seed);
        let mut trace = Vec::new();
        for _ in 0..2000 {
            game.tick();
            trace.push((game.ball().pos, game.ball().speed));
        }
        (trace, game.tally)
    };
    assert_eq!(play(9), play(9));
}

#[test]
fn test_advance_runs_fixed_ticks() {
    let mut game = started(Config::classic());
    let ran = game.advance(0.050);
    assert_eq!(ran, 3);
    assert_eq!(game.ball().pos.y, 15);
    assert_eq!(game.time.ticks, 3);
}

#[test]
fn test_classic_sprites_sized_from_images() {
    let config = Config::classic().with_sprite_sizes(IVec2::new(240, 260), IVec2::new(200, 200));
    let game = Game::new(config, 1);
    assert_eq!(game.bat().size, IVec2::new(120, 130));
    assert_eq!(game.ball().size, IVec2::new(40, 40));
    assert_eq!(
        game.frame().hit_zone,
        HitZone::Rect(Aabb::from_pos_size(IVec2::new(200, 600), IVec2::new(120, 130)))
    );
}
