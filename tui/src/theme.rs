//! Color palette for Chop.
//!
//! Each tile color comes in three shades: a darkened fill, the base border,
//! and a brightened letter.

use ratatui::style::Color;

/// The three shades a tile is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shades {
    /// Tile background.
    pub fill: Color,
    /// Tile border.
    pub border: Color,
    /// Letter inside the tile.
    pub text: Color,
}

/// A color theme for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Screen background.
    pub background: Color,
    /// Header title ("Alphabet").
    pub title: Color,
    /// Hints, keyboard art, footer.
    pub dimmed: Color,

    // Tiles
    /// A symbol not typed yet.
    pub pending: Shades,
    /// A symbol typed correctly.
    pub correct: Shades,
    /// The symbol the player failed on.
    pub missed: Shades,

    // Status bar
    /// Empty part of the countdown bar.
    pub timer_track: Color,
    /// Remaining time.
    pub timer_fill: Color,
    /// Banner shown after a success.
    pub success: Shades,
    /// Banner shown after a failure.
    pub failure: Shades,
}

/// Default theme, dark blue background with green/maroon outcomes.
pub const DEFAULT: Theme = Theme {
    background: Color::Rgb(0, 20, 43),
    title: Color::Rgb(0, 228, 48),
    dimmed: Color::Rgb(130, 130, 130),
    pending: Shades {
        fill: Color::Rgb(0, 33, 69),
        border: Color::Rgb(0, 82, 172),    // Dark blue
        text: Color::Rgb(153, 186, 222),
    },
    correct: Shades {
        fill: Color::Rgb(0, 47, 18),
        border: Color::Rgb(0, 117, 44),    // Dark green
        text: Color::Rgb(153, 200, 171),
    },
    missed: Shades {
        fill: Color::Rgb(76, 13, 22),
        border: Color::Rgb(190, 33, 55),   // Maroon
        text: Color::Rgb(229, 166, 175),
    },
    timer_track: Color::Rgb(56, 56, 56),
    timer_fill: Color::Rgb(179, 113, 0),   // Orange
    success: Shades {
        fill: Color::Rgb(0, 47, 18),
        border: Color::Rgb(0, 117, 44),
        text: Color::Rgb(77, 158, 107),
    },
    failure: Shades {
        fill: Color::Rgb(76, 13, 22),
        border: Color::Rgb(190, 33, 55),
        text: Color::Rgb(210, 100, 115),
    },
};
