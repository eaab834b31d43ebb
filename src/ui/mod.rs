//! HUD readout, modal notification service, and menu wiring
//!
//! The simulation never touches the DOM; this module consumes events
//! and state the tick loop hands it. Modal outcomes come back as a
//! single boolean through a callback.

use crate::consts::TOTAL_LEVELS;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::{show_modal, update_hud};

/// Formatted score/lives readout pushed to the text display whenever
/// score or lives change
pub fn hud_text(score: u32, lives: u32) -> String {
    format!("Score: {score} Lives: {lives}")
}

/// Icon shown in a modal header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Info,
    Success,
    Trophy,
}

impl IconKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            IconKind::Info => "\u{2139}",
            IconKind::Success => "\u{2713}",
            IconKind::Trophy => "\u{1F3C6}",
        }
    }
}

/// A modal display request; the answer is a single confirmed boolean
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalRequest {
    pub title: String,
    pub body: String,
    pub icon: IconKind,
    pub confirm_label: String,
    /// When present the modal shows a cancel path with this label
    pub cancel_label: Option<String>,
}

impl ModalRequest {
    /// Level-clear notification; acknowledgment starts the next level
    pub fn level_complete(next_level: u32) -> Self {
        Self {
            title: "Level Complete".into(),
            body: format!("On to level {next_level} of {TOTAL_LEVELS}"),
            icon: IconKind::Success,
            confirm_label: "Next Level".into(),
            cancel_label: None,
        }
    }

    /// Terminal loss; confirm restarts, cancel quits
    pub fn game_over(score: u32) -> Self {
        Self {
            title: "Game Over".into(),
            body: format!("Your score: {score}"),
            icon: IconKind::Info,
            confirm_label: "Restart".into(),
            cancel_label: Some("Quit".into()),
        }
    }

    /// Terminal win; acknowledgment only
    pub fn game_won(score: u32) -> Self {
        Self {
            title: "You Win!".into(),
            body: format!("All {TOTAL_LEVELS} levels cleared. Final score: {score}"),
            icon: IconKind::Trophy,
            confirm_label: "OK".into(),
            cancel_label: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hud_text_format() {
        assert_eq!(hud_text(0, 100), "Score: 0 Lives: 100");
        assert_eq!(hud_text(42, 7), "Score: 42 Lives: 7");
    }

    #[test]
    fn test_game_over_offers_cancel() {
        let request = ModalRequest::game_over(13);
        assert!(request.cancel_label.is_some());
        assert!(request.body.contains("13"));
    }

    #[test]
    fn test_ack_only_modals_have_no_cancel() {
        assert!(ModalRequest::level_complete(2).cancel_label.is_none());
        assert!(ModalRequest::game_won(99).cancel_label.is_none());
    }
}
