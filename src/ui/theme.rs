//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

use crate::board::Mark;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const GRID_LINE: Color32 = Color32::from_rgb(90, 93, 99);

// Mark colors
pub const X_MARK: Color32 = Color32::from_rgb(86, 156, 214);
pub const O_MARK: Color32 = Color32::from_rgb(220, 163, 86);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

/// Accent color for a mark
pub fn mark_color(mark: Mark) -> Color32 {
    match mark {
        Mark::X => X_MARK,
        Mark::O => O_MARK,
        Mark::Empty => TEXT_MUTED,
    }
}

// Functions for colors that can't be const
pub fn win_cell_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 235, 59, 48)
}

pub fn hover_mark(mark: Mark) -> Color32 {
    match mark {
        Mark::X => Color32::from_rgba_unmultiplied(86, 156, 214, 90),
        Mark::O => Color32::from_rgba_unmultiplied(220, 163, 86, 90),
        Mark::Empty => Color32::TRANSPARENT,
    }
}

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const MARK_RADIUS_RATIO: f32 = 0.30;
pub const GRID_LINE_WIDTH: f32 = 3.0;
pub const MARK_STROKE_WIDTH: f32 = 7.0;
