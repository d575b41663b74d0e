use crate::{Config, Events, Message, Phase, PhaseAction, Tally};

/// Feedback text shown when the game ends
pub const GAME_OVER_TEXT: &str = "GAME OVER";

/// Count a foul and end the game once the limit is reached
pub fn record_foul(
    tally: &mut Tally,
    phase: &mut Phase,
    config: &Config,
    message: &mut Message,
    events: &mut Events,
) {
    events.foul = true;
    let reached = tally.add_foul(config.foul_limit);
    log::info!("Foul! ({}/{})", tally.fouls, config.foul_limit);

    if reached && phase.transition(PhaseAction::Finish) {
        events.game_over = true;
        log::info!(
            "Game over: {} home runs, {} fouls",
            tally.score,
            tally.fouls
        );
        if config.show_messages {
            message.show(GAME_OVER_TEXT, config.message_ticks);
        }
    }
}
