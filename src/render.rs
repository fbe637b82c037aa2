//! Text frame rendering
//!
//! Draws the episode into an off-terminal `console_engine` screen. The field
//! is downsampled into character cells; the basket is drawn as its
//! top-left-anchored rectangle, apples as single cells at their centers.
//! Rendering only reads the state.

use console_engine::pixel;
use console_engine::screen::Screen;

use crate::error::{EnvError, Result};
use crate::sim::EpisodeState;

/// Rows used by the info panel
pub const PANEL_ROWS: u32 = 2;

const APPLE: char = 'o';
const BASKET: char = '#';
const FLOOR: char = '-';

/// Field pixels per character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderer {
    pub cell_width: i32,
    pub cell_height: i32,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            cell_width: 10,
            cell_height: 20,
        }
    }
}

impl TextRenderer {
    /// Renderer with a custom cell size; both dimensions must be positive
    pub fn new(cell_width: i32, cell_height: i32) -> Result<Self> {
        if cell_width <= 0 || cell_height <= 0 {
            return Err(EnvError::InvalidConfig(format!(
                "cell size must be positive, got {cell_width}x{cell_height}"
            )));
        }
        Ok(Self {
            cell_width,
            cell_height,
        })
    }

    /// Cell size actually used; non-positive fields fall back to one pixel
    fn cell_size(&self) -> (i32, i32) {
        (self.cell_width.max(1), self.cell_height.max(1))
    }

    fn columns(&self, state: &EpisodeState) -> u32 {
        (state.config.field_width / self.cell_size().0 + 1) as u32
    }

    /// At least one row, even for fields shorter than a cell
    fn field_rows(&self, state: &EpisodeState) -> u32 {
        ((state.config.field_height / self.cell_size().1) as u32).max(1)
    }

    /// Screen row of the first field row
    fn field_top(&self, state: &EpisodeState) -> i32 {
        if state.config.show_panel { PANEL_ROWS as i32 } else { 0 }
    }

    /// Field pixel coordinates to screen cell
    pub fn cell(&self, state: &EpisodeState, x: i32, y: i32) -> (i32, i32) {
        let (width, height) = self.cell_size();
        (
            x.div_euclid(width),
            self.field_top(state) + y.div_euclid(height),
        )
    }

    /// Draw the current state
    pub fn draw(&self, state: &EpisodeState) -> Screen {
        let columns = self.columns(state);
        let rows = self.field_rows(state);
        let top = self.field_top(state);
        let mut screen = Screen::new(columns, top as u32 + rows + 1);

        if state.config.show_panel {
            screen.print(
                0,
                0,
                &format!(
                    "Episode: {} Score: {} Missed: {} FPS: {}",
                    state.episode, state.score, state.missed, state.config.fps
                ),
            );
            screen.print(
                0,
                1,
                &format!(
                    "Apple Per Second: {} Gravity: {}",
                    state.config.apples_per_second, state.config.gravity
                ),
            );
        }

        let max_col = columns as i32 - 1;
        let max_row = top + rows as i32 - 1;
        let clamp = |(col, row): (i32, i32)| (col.clamp(0, max_col), row.clamp(top, max_row));

        // Basket rectangle, clipped to the field
        let basket = &state.basket;
        let (left, upper) = clamp(self.cell(state, basket.pos.x, basket.pos.y));
        let (right, lower) = clamp(self.cell(
            state,
            basket.pos.x.saturating_add(basket.size.x - 1),
            basket.pos.y.saturating_add(basket.size.y - 1),
        ));
        screen.fill_rect(left, upper, right, lower, pixel::pxl(BASKET));

        for apple in &state.apples {
            let (col, row) = clamp(self.cell(state, apple.pos.x, apple.pos.y));
            screen.set_pxl(col, row, pixel::pxl(APPLE));
        }

        screen.h_line(0, max_row + 1, max_col, pixel::pxl(FLOOR));
        screen
    }

    /// Draw the current state as text
    pub fn render(&self, state: &EpisodeState) -> String {
        let screen = self.draw(state);
        let mut text =
            String::with_capacity(((screen.get_width() + 1) * screen.get_height()) as usize);
        for y in 0..screen.get_height() as i32 {
            for x in 0..screen.get_width() as i32 {
                text.push(screen.get_pxl(x, y).map(|p| p.chr).unwrap_or(' '));
            }
            text.push('\n');
        }
        text
    }
}
