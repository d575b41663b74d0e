use hecs::World;

use crate::{Bat, Phase};

/// What a click should do in the current phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickIntent {
    Begin,
    Swing,
    Restart,
}

/// Map a click to its intent
pub fn click_intent(phase: Phase) -> ClickIntent {
    match phase {
        Phase::Start => ClickIntent::Begin,
        Phase::Playing => ClickIntent::Swing,
        Phase::GameOver => ClickIntent::Restart,
    }
}

/// Center the bat on the cursor while a game is running
pub fn move_bat(world: &mut World, phase: Phase, cursor_x: i32) {
    if !phase.is_playing() {
        return;
    }
    for (_entity, bat) in world.query_mut::<&mut Bat>() {
        bat.follow_cursor(cursor_x);
    }
}
