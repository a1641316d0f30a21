use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameState;

/// Renders the one-line HUD at the bottom and returns the remaining play area.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(info_line(
            state.actor.len(),
            state.deaths,
            state.tick_count,
            theme,
        ))
        .alignment(Alignment::Center),
        hud_area,
    );

    play_area
}

fn info_line(length: usize, deaths: u32, ticks: u64, theme: &Theme) -> Line<'static> {
    let label = Style::new().fg(theme.hud_label);
    let value = Style::new().fg(theme.hud_value);

    Line::from(vec![
        Span::styled("length ", label),
        Span::styled(length.to_string(), value),
        Span::styled("   deaths ", label),
        Span::styled(deaths.to_string(), value),
        Span::styled("   tick ", label),
        Span::styled(ticks.to_string(), value),
    ])
}
