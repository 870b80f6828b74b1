use crate::theme::{Shades, Theme};
use chop_core::{Challenge, ChallengeState};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Gauge, Paragraph},
};
use std::time::Instant;

/// Text and colors of the banner replacing the countdown once a challenge is over.
pub fn banner(state: ChallengeState, theme: &Theme) -> Option<(&'static str, Shades)> {
    match state {
        ChallengeState::Active => None,
        ChallengeState::Succeeded => Some(("Success!", theme.success)),
        ChallengeState::Failed(_) => Some(("Failed.", theme.failure)),
    }
}

/// Render the countdown bar, or the outcome banner for a finished challenge.
pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    challenge: &Challenge,
    now: Instant,
    theme: &Theme,
) {
    match banner(challenge.state(), theme) {
        None => {
            let countdown = Gauge::default()
                .gauge_style(Style::default().fg(theme.timer_fill).bg(theme.timer_track))
                .ratio(challenge.remaining_ratio(now))
                .label("");
            frame.render_widget(countdown, area);
        }
        Some((text, shades)) => {
            let banner = Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .bg(shades.fill)
                        .fg(shades.text)
                        .add_modifier(Modifier::BOLD),
                );
            frame.render_widget(banner, area);
        }
    }
}
