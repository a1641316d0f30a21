use ratatui::style::Color;

/// Fixed board geometry in pixel units.
///
/// Constructed once at startup and passed to everything that needs geometry;
/// there is no ambient global state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Board {
    /// Board width in pixels; a multiple of `cell`.
    pub width: i32,
    /// Board height in pixels; a multiple of `cell`.
    pub height: i32,
    /// Edge length of one grid cell in pixels.
    pub cell: i32,
}

impl Board {
    /// Returns the number of cells per row.
    #[must_use]
    pub fn grid_width(self) -> i32 {
        self.width / self.cell
    }

    /// Returns the number of cells per column.
    #[must_use]
    pub fn grid_height(self) -> i32 {
        self.height / self.cell
    }

    /// Returns the total number of cells on the board.
    #[must_use]
    pub fn total_cells(self) -> usize {
        let width = usize::try_from(self.grid_width()).unwrap_or(0);
        let height = usize::try_from(self.grid_height()).unwrap_or(0);
        width * height
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            cell: CELL_SIZE,
        }
    }
}

/// Reference board width in pixels.
pub const SCREEN_WIDTH: i32 = 640;

/// Reference board height in pixels.
pub const SCREEN_HEIGHT: i32 = 480;

/// Edge length of one grid cell in pixels.
pub const CELL_SIZE: i32 = 20;

/// Base tick interval in milliseconds (20 logical updates per second).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;

/// Lowest accepted tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Glyph for one actor segment.
pub const GLYPH_ACTOR: &str = "█";

/// Glyph for the food cell.
pub const GLYPH_FOOD: &str = "●";

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    /// Solid block color for actor segments.
    pub actor: Color,
    /// Color for the food glyph.
    pub food: Color,
    pub border: Color,
    pub background: Color,
    pub hud_label: Color,
    pub hud_value: Color,
}

/// Classic palette: green snake, red food, cyan border on black.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    actor: Color::Rgb(0, 255, 0),
    food: Color::Rgb(255, 0, 0),
    border: Color::Rgb(93, 216, 228),
    background: Color::Black,
    hud_label: Color::DarkGray,
    hud_value: Color::White,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    actor: Color::Cyan,
    food: Color::Yellow,
    border: Color::Blue,
    background: Color::Black,
    hud_label: Color::DarkGray,
    hud_value: Color::Cyan,
};

/// Neon magenta theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    actor: Color::Magenta,
    food: Color::Yellow,
    border: Color::Magenta,
    background: Color::Black,
    hud_label: Color::DarkGray,
    hud_value: Color::Magenta,
};

/// All available themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Looks up a theme by case-insensitive name.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::{theme_by_name, Board, THEMES};

    #[test]
    fn default_board_matches_reference_grid() {
        let board = Board::default();

        assert_eq!(board.grid_width(), 32);
        assert_eq!(board.grid_height(), 24);
        assert_eq!(board.total_cells(), 32 * 24);
    }

    #[test]
    fn every_theme_is_found_by_name() {
        for theme in THEMES {
            let found = theme_by_name(theme.name).expect("theme should resolve by its own name");
            assert_eq!(found.name, theme.name);
        }

        assert!(theme_by_name("CLASSIC").is_some());
        assert!(theme_by_name("no-such-theme").is_none());
    }
}
