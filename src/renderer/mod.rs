//! Canvas 2D rendering module
//!
//! The drawing surface the core writes shapes and text to. Pure output:
//! nothing here feeds back into the simulation.

#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

/// Fill color for a brick, keyed by its display value
pub fn brick_color(display_value: u32) -> &'static str {
    match display_value {
        3 => "#D7263D",
        2 => "#FF8C00",
        _ => "#0095DD",
    }
}

/// Background color for an opaque theme tag. The core never inspects
/// the tag; it only lands here.
pub fn theme_background(theme: &str) -> &'static str {
    match theme {
        "midnight" => "#0B1026",
        "sunset" => "#2B1B2F",
        "forest" => "#11221A",
        _ => "#000000",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brick_color_keyed_by_display_value() {
        assert_eq!(brick_color(1), "#0095DD");
        assert_eq!(brick_color(2), "#FF8C00");
        assert_eq!(brick_color(3), "#D7263D");
        // Values outside the marker range fall back to the default
        assert_eq!(brick_color(7), "#0095DD");
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        assert_eq!(theme_background("nope"), "#000000");
        assert_eq!(theme_background("midnight"), "#0B1026");
    }
}
