use crate::{App, assets::KeyboardArt, theme::Theme};
use chop_core::Challenge;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use std::time::Instant;

mod status;
pub use status::*;

mod tile;
pub use tile::*;

/// Number of tiles on a full row.
pub const TILES_PER_ROW: usize = 6;
const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;
/// Horizontal gap between two tiles.
const TILE_GAP: u16 = 1;

/// Width of a full row of tiles, which is also the width of the whole view.
pub const GRID_WIDTH: u16 = TILES_PER_ROW as u16 * (TILE_WIDTH + TILE_GAP) - TILE_GAP;

/// Number of tile rows needed for `len` symbols.
pub fn grid_rows(len: usize) -> usize {
    len.div_ceil(TILES_PER_ROW)
}

/// Area of the tile at `index`, with `grid` being the top-left corner of the grid.
pub fn tile_area(grid: Rect, index: usize) -> Rect {
    let row = (index / TILES_PER_ROW) as u16;
    let col = (index % TILES_PER_ROW) as u16;
    Rect {
        x: grid.x + col * (TILE_WIDTH + TILE_GAP),
        y: grid.y + row * TILE_HEIGHT,
        width: TILE_WIDTH,
        height: TILE_HEIGHT,
    }
}

impl App {
    pub fn draw_challenge(&self, frame: &mut Frame, now: Instant) {
        draw_challenge(
            frame,
            self.controller.challenge(),
            &self.assets.keyboard,
            &self.theme,
            now,
        );
    }
}

/// Paint the whole challenge screen: header, tiles, status bar and footer.
///
/// Pure read of the challenge, nothing is kept between frames.
pub fn draw_challenge(
    frame: &mut Frame,
    challenge: &Challenge,
    keyboard: &KeyboardArt,
    theme: &Theme,
    now: Instant,
) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let header_height = keyboard.height().max(2);
    let grid_height = grid_rows(challenge.sequence().len()) as u16 * TILE_HEIGHT;

    // center the content horizontally, keep it at the top like a window would
    let [content] = Layout::horizontal([Constraint::Length(GRID_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let [_, header, _, grid, _, status, _] = Layout::vertical([
        Constraint::Length(1),             // top padding
        Constraint::Length(header_height), // keyboard art & title
        Constraint::Length(1),             // blank
        Constraint::Length(grid_height),   // tiles
        Constraint::Length(1),             // blank
        Constraint::Length(1),             // countdown / banner
        Constraint::Min(0),
    ])
    .areas(content);

    draw_header(frame, header, keyboard, theme);

    for (i, symbol) in challenge.sequence().iter().enumerate() {
        let tile_rect = tile_area(grid, i).intersection(area);
        if tile_rect.is_empty() {
            continue; // terminal too small
        }
        let tile = Tile {
            symbol: *symbol,
            status: TileStatus::of(i, challenge.progress(), challenge.state()),
        };
        tile.render(frame, tile_rect, theme);
    }

    if !status.is_empty() {
        render_status(frame, status, challenge, now, theme);
    }

    // Footer
    if area.height > 0 {
        let footer_area = Rect {
            y: area.bottom() - 1,
            height: 1,
            ..area
        };
        let footer = Paragraph::new(Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.title)),
            Span::styled(" restart • ", Style::default().fg(theme.dimmed)),
            Span::styled("Esc", Style::default().fg(theme.title)),
            Span::styled(" quit", Style::default().fg(theme.dimmed)),
        ]))
        .centered();
        frame.render_widget(footer, footer_area);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, keyboard: &KeyboardArt, theme: &Theme) {
    let [art_area, _, text_area] = Layout::horizontal([
        Constraint::Length(keyboard.width()),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    let art: Vec<Line> = keyboard
        .lines
        .iter()
        .map(|l| Line::from(Span::styled(l.as_str(), Style::default().fg(theme.dimmed))))
        .collect();
    frame.render_widget(Paragraph::new(art), art_area);

    let text = vec![
        Line::from(Span::styled(
            "Alphabet",
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Tap the letters in order",
            Style::default().fg(theme.dimmed),
        )),
    ];
    frame.render_widget(Paragraph::new(text), text_area);
}
