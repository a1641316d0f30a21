use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::actor::{Actor, GridCell};
use crate::config::{Board, Theme, GLYPH_ACTOR, GLYPH_FOOD};
use crate::food::Food;
use crate::game::GameState;
use crate::ui::hud::render_hud;

/// Capability to paint an entity onto the play area.
///
/// Actor and Food implement this independently; they share no base state,
/// only the seam the frame renderer drives them through.
pub trait Renderable {
    fn render(&self, frame: &mut Frame<'_>, inner: Rect, board: Board, theme: &Theme);
}

impl Renderable for Food {
    fn render(&self, frame: &mut Frame<'_>, inner: Rect, board: Board, theme: &Theme) {
        let Some((x, y)) = cell_to_terminal(inner, board, self.position) else {
            return;
        };

        frame
            .buffer_mut()
            .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
    }
}

impl Renderable for Actor {
    fn render(&self, frame: &mut Frame<'_>, inner: Rect, board: Board, theme: &Theme) {
        let style = Style::new().fg(theme.actor);
        let buffer = frame.buffer_mut();

        for segment in self.segments() {
            let Some((x, y)) = cell_to_terminal(inner, board, *segment) else {
                continue;
            };

            buffer.set_string(x, y, GLYPH_ACTOR, style);
        }
    }
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let area = frame.area();
    let board = state.board();
    let play_area = render_hud(frame, area, state, theme);
    let board_area = board_rect(play_area, board);

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border))
        .style(Style::new().bg(theme.background));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    state.food.render(frame, inner, board, theme);
    state.actor.render(frame, inner, board, theme);
}

/// Centers the bordered board inside `area`, clamped to what fits.
fn board_rect(area: Rect, board: Board) -> Rect {
    let want_width = u16::try_from(board.grid_width() + 2).unwrap_or(u16::MAX);
    let want_height = u16::try_from(board.grid_height() + 2).unwrap_or(u16::MAX);

    let width = want_width.min(area.width);
    let height = want_height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Maps a grid cell to a terminal cell inside `inner`, or `None` when the
/// terminal is too small to show it.
fn cell_to_terminal(inner: Rect, board: Board, cell: GridCell) -> Option<(u16, u16)> {
    let grid_x = u16::try_from(cell.x / board.cell).ok()?;
    let grid_y = u16::try_from(cell.y / board.cell).ok()?;

    let x = inner.x.saturating_add(grid_x);
    let y = inner.y.saturating_add(grid_y);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
