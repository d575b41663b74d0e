//! Pointer and keyboard input mapping

/// Keys that restart a finished game
pub fn is_restart_key(key: &str) -> bool {
    matches!(key, "F5" | "r" | "R")
}

/// Convert a pointer offset on the displayed canvas into arena pixels.
/// The canvas may be scaled by CSS, so the offset is rescaled by the
/// ratio of arena width to displayed width.
pub fn to_arena_x(offset_x: f64, display_width: f64, arena_width: i32) -> i32 {
    if display_width <= 0.0 || !offset_x.is_finite() {
        return offset_x as i32;
    }
    (offset_x * arena_width as f64 / display_width).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restart_keys() {
        assert!(is_restart_key("F5"));
        assert!(is_restart_key("r"));
        assert!(!is_restart_key("Enter"));
        assert!(!is_restart_key("F4"));
    }

    #[test]
    fn test_unscaled_canvas() {
        assert_eq!(to_arena_x(123.0, 400.0, 400), 123);
    }

    #[test]
    fn test_scaled_canvas() {
        // Canvas shown at half size
        assert_eq!(to_arena_x(100.0, 200.0, 400), 200);
        // Shown at 1.5x
        assert_eq!(to_arena_x(300.0, 600.0, 400), 200);
    }

    #[test]
    fn test_degenerate_display_width() {
        assert_eq!(to_arena_x(50.0, 0.0, 400), 50);
    }
}
