use hecs::World;

use crate::map::HitZone;
use crate::{Ball, Bat, Variant};

/// Hit zone for a bat under the given rules
pub fn hit_zone(variant: Variant, bat: &Bat) -> HitZone {
    match variant {
        Variant::Classic => HitZone::Rect(bat.bounds()),
        Variant::Arcade => HitZone::Circle {
            center: bat.bounds().center(),
            radius: bat.size.x / 2,
        },
    }
}

/// Whether the ball currently sits inside the bat's hit zone
pub fn ball_in_zone(variant: Variant, bat: &Bat, ball: &Ball) -> bool {
    match hit_zone(variant, bat) {
        // The whole ball must be inside the bat's box
        HitZone::Rect(zone) => zone.contains_box(&ball.bounds()),
        HitZone::Circle { center, radius } => {
            let d = ball.bounds().center() - center;
            let (dx, dy, r) = (d.x as i64, d.y as i64, radius as i64);
            dx * dx + dy * dy <= r * r
        }
    }
}

/// Look up the bat and ball and judge them; false if either is missing
pub fn ball_in_hit_zone(world: &World, variant: Variant) -> bool {
    match (bat_of(world), ball_of(world)) {
        (Some(bat), Some(ball)) => ball_in_zone(variant, &bat, &ball),
        _ => false,
    }
}

pub fn bat_of(world: &World) -> Option<Bat> {
    world.query::<&Bat>().iter().next().map(|(_e, bat)| *bat)
}

pub fn ball_of(world: &World) -> Option<Ball> {
    world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball)
}
