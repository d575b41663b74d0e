//! Game phase state machine
//!
//! `Start` waits for the first click, `Playing` runs the pitch loop, and
//! `GameOver` holds the final tally until the player restarts.

/// Coarse game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Start,
    Playing,
    GameOver,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseAction {
    Begin,
    Finish,
    Restart,
}

impl Phase {
    /// Next phase for a given action, if the transition is valid
    pub fn next(self, action: PhaseAction) -> Option<Phase> {
        match (self, action) {
            (Phase::Start, PhaseAction::Begin) => Some(Phase::Playing),
            (Phase::Playing, PhaseAction::Finish) => Some(Phase::GameOver),
            (Phase::GameOver, PhaseAction::Restart) => Some(Phase::Start),
            _ => None,
        }
    }

    /// Apply a transition in place; invalid actions leave the phase unchanged
    pub fn transition(&mut self, action: PhaseAction) -> bool {
        match self.next(action) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, Phase::GameOver)
    }
}
