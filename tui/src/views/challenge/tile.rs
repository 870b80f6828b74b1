use crate::theme::{Shades, Theme};
use chop_core::{ChallengeState, Symbol};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Paragraph},
};

/// How far the player got with a given tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileStatus {
    /// Not typed yet.
    Pending,
    /// Typed correctly.
    Correct,
    /// The tile the challenge failed on.
    Missed,
}

impl TileStatus {
    /// Status of the tile at `index` given the challenge's progress and state.
    pub fn of(index: usize, progress: usize, state: ChallengeState) -> Self {
        if index < progress {
            TileStatus::Correct
        } else if index == progress && matches!(state, ChallengeState::Failed(_)) {
            TileStatus::Missed
        } else {
            TileStatus::Pending
        }
    }

    pub fn shades(&self, theme: &Theme) -> Shades {
        match self {
            TileStatus::Pending => theme.pending,
            TileStatus::Correct => theme.correct,
            TileStatus::Missed => theme.missed,
        }
    }
}

/// A single keyboard tile.
///
/// It is to be rendered as follows:
///
/// ```txt
/// ╭─────╮
/// │  Q  │
/// ╰─────╯
/// ```
#[derive(Debug)]
pub struct Tile {
    pub symbol: Symbol,
    pub status: TileStatus,
}

impl Tile {
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let shades = self.status.shades(theme);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(shades.border));

        let letter = Paragraph::new(self.symbol.to_string())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .bg(shades.fill)
                    .fg(shades.text)
                    .add_modifier(Modifier::BOLD),
            )
            .block(block);

        frame.render_widget(letter, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chop_core::FailReason;

    #[test]
    fn test_status_while_active() {
        let state = ChallengeState::Active;
        assert_eq!(TileStatus::of(0, 2, state), TileStatus::Correct);
        assert_eq!(TileStatus::of(1, 2, state), TileStatus::Correct);
        // the next tile is only highlighted once it was missed
        assert_eq!(TileStatus::of(2, 2, state), TileStatus::Pending);
        assert_eq!(TileStatus::of(3, 2, state), TileStatus::Pending);
    }

    #[test]
    fn test_status_after_failure() {
        let state = ChallengeState::Failed(FailReason::Timeout);
        assert_eq!(TileStatus::of(4, 5, state), TileStatus::Correct);
        assert_eq!(TileStatus::of(5, 5, state), TileStatus::Missed);
        assert_eq!(TileStatus::of(6, 5, state), TileStatus::Pending);
    }

    #[test]
    fn test_status_after_success() {
        let state = ChallengeState::Succeeded;
        assert!((0..15).all(|i| TileStatus::of(i, 15, state) == TileStatus::Correct));
    }
}
