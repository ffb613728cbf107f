//! Preview rendering: one flat square per cell with an optional stud on top.
//!
//! The gutter along the top and left edges numbers every column and row from
//! 1. When the cells are too small for digits it falls back to tick marks.

use image::{Rgb, RgbImage};

use crate::error::{BrickError, Result};
use crate::mosaic::{GridSize, MosaicGrid};
use crate::types::Colour;

/// Canvas and gutter colour.
pub const BACKGROUND: Colour = Colour::rgb(240, 240, 240);

/// Largest accepted cell size; larger values are clamped.
pub const MAX_CELL_PIXELS: u32 = 512;

/// Gutter labels and ticks.
const INK: Colour = Colour::rgb(96, 96, 96);

const GLYPH_WIDTH: u32 = 3;
const GLYPH_HEIGHT: u32 = 5;

/// 3x5 digit glyphs, one byte per row, leftmost pixel in bit 2.
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

/// Stud radius as a fraction of the cell size.
const STUD_RADIUS: f32 = 0.35;

/// Stud highlight applied to the cell colour.
const STUD_HIGHLIGHT: f32 = 1.15;

/// Renders a [`MosaicGrid`] as an RGB image.
#[derive(Debug, Clone, Copy)]
pub struct MosaicRenderer {
    cell_pixels: u32,
    draw_studs: bool,
    gutter: bool,
}

impl MosaicRenderer {
    /// A renderer with `cell_pixels` square cells and the index gutter on.
    ///
    /// `cell_pixels` is clamped to `1..=MAX_CELL_PIXELS`.
    pub fn new(cell_pixels: u32, draw_studs: bool) -> Self {
        Self {
            cell_pixels: cell_pixels.clamp(1, MAX_CELL_PIXELS),
            draw_studs,
            gutter: true,
        }
    }

    pub fn with_gutter(mut self, gutter: bool) -> Self {
        self.gutter = gutter;
        self
    }

    pub fn cell_pixels(&self) -> u32 {
        self.cell_pixels
    }

    /// Width of the index strip along the top and left edges.
    pub fn margin(&self) -> u32 {
        if self.gutter {
            self.cell_pixels * 2 / 3
        } else {
            0
        }
    }

    /// Output dimensions for a grid, or `None` when they overflow `u32`.
    pub fn dimensions(&self, size: GridSize) -> Option<(u32, u32)> {
        let margin = self.margin();
        let side = |cells: u32| cells.checked_mul(self.cell_pixels)?.checked_add(margin);
        Some((side(size.width)?, side(size.height)?))
    }

    pub fn render(&self, grid: &MosaicGrid) -> Result<RgbImage> {
        let (width, height) = self
            .dimensions(grid.size())
            .ok_or_else(|| BrickError::InvalidGrid {
                message: format!(
                    "a {} preview at {} pixels per cell is too large",
                    grid.size(),
                    self.cell_pixels
                ),
            })?;
        let mut img = RgbImage::from_pixel(width, height, Rgb(BACKGROUND.to_array()));

        if self.gutter {
            self.draw_gutter(&mut img, grid);
        }

        let margin = self.margin();
        for (x, y, piece) in grid.enumerate() {
            let x0 = margin + x * self.cell_pixels;
            let y0 = margin + y * self.cell_pixels;
            let body = piece.colour.rgb();
            fill_rect(&mut img, x0, y0, self.cell_pixels, self.cell_pixels, body);
            if self.draw_studs {
                self.draw_stud(&mut img, x0, y0, body);
            }
        }

        Ok(img)
    }

    fn draw_gutter(&self, img: &mut RgbImage, grid: &MosaicGrid) {
        match self.label_scale(grid) {
            Some(scale) => self.draw_labels(img, grid, scale),
            None => self.draw_ticks(img, grid),
        }
    }

    /// Largest glyph scale at which every label fits the gutter and a cell.
    fn label_scale(&self, grid: &MosaicGrid) -> Option<u32> {
        let room = self.margin().saturating_sub(2);
        let digits = digit_count(grid.width().max(grid.height()));
        (1..=room / GLYPH_HEIGHT).rev().find(|&scale| {
            let width = label_width(digits, scale);
            width <= room && width < self.cell_pixels && GLYPH_HEIGHT * scale < self.cell_pixels
        })
    }

    /// Column numbers centred above each column, row numbers left of each row.
    fn draw_labels(&self, img: &mut RgbImage, grid: &MosaicGrid, scale: u32) {
        let margin = self.margin();
        let height = GLYPH_HEIGHT * scale;

        for x in 0..grid.width() {
            let label = (x + 1).to_string();
            let width = label_width(label.len() as u32, scale);
            let cx = margin + x * self.cell_pixels + self.cell_pixels / 2;
            draw_text(img, cx - width / 2, (margin - height) / 2, &label, scale);
        }
        for y in 0..grid.height() {
            let label = (y + 1).to_string();
            let width = label_width(label.len() as u32, scale);
            let cy = margin + y * self.cell_pixels + self.cell_pixels / 2;
            draw_text(img, (margin - width) / 2, cy - height / 2, &label, scale);
        }
    }

    /// Tick marks centred on each column and row; every fifth is longer and
    /// every tenth longer still.
    fn draw_ticks(&self, img: &mut RgbImage, grid: &MosaicGrid) {
        let margin = self.margin();
        if margin == 0 {
            return;
        }
        let tick_len = |index: u32| {
            let n = index + 1;
            let quarters = if n % 10 == 0 {
                3
            } else if n % 5 == 0 {
                2
            } else {
                1
            };
            (margin * quarters / 4).max(1)
        };

        for x in 0..grid.width() {
            let cx = margin + x * self.cell_pixels + self.cell_pixels / 2;
            let len = tick_len(x);
            fill_rect(img, cx, margin - len, 1, len, INK);
        }
        for y in 0..grid.height() {
            let cy = margin + y * self.cell_pixels + self.cell_pixels / 2;
            let len = tick_len(y);
            fill_rect(img, margin - len, cy, len, 1, INK);
        }
    }

    /// Filled disc with a one pixel black rim, sampled at pixel centres.
    fn draw_stud(&self, img: &mut RgbImage, x0: u32, y0: u32, body: Colour) {
        let size = self.cell_pixels as f32;
        let radius = size * STUD_RADIUS;
        let (cx, cy) = (x0 as f32 + size / 2.0, y0 as f32 + size / 2.0);
        let fill = Rgb(body.scaled(STUD_HIGHLIGHT).to_array());
        let rim = Rgb(Colour::BLACK.to_array());

        for py in y0..y0 + self.cell_pixels {
            for px in x0..x0 + self.cell_pixels {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                let d = (dx * dx + dy * dy).sqrt();
                if d <= radius - 1.0 {
                    img.put_pixel(px, py, fill);
                } else if d <= radius {
                    img.put_pixel(px, py, rim);
                }
            }
        }
    }
}

impl Default for MosaicRenderer {
    fn default() -> Self {
        Self::new(20, true)
    }
}

fn digit_count(n: u32) -> u32 {
    n.max(1).to_string().len() as u32
}

/// Pixel width of `digits` glyphs with one blank column between them.
fn label_width(digits: u32, scale: u32) -> u32 {
    (digits * (GLYPH_WIDTH + 1) - 1) * scale
}

fn draw_text(img: &mut RgbImage, x0: u32, y0: u32, text: &str, scale: u32) {
    let digits = text.chars().filter_map(|c| c.to_digit(10));
    for (i, digit) in digits.enumerate() {
        let left = x0 + i as u32 * (GLYPH_WIDTH + 1) * scale;
        for (row, bits) in DIGITS[digit as usize].iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                    let x = left + col * scale;
                    let y = y0 + row as u32 * scale;
                    fill_rect(img, x, y, scale, scale, INK);
                }
            }
        }
    }
}

fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, w: u32, h: u32, colour: Colour) {
    let rgb = Rgb(colour.to_array());
    let x1 = (x0 + w).min(img.width());
    let y1 = (y0 + h).min(img.height());
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x, y, rgb);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BrickColour, Piece, PieceSize, PieceType};
    use std::sync::Arc;

    fn grid(colours: &[Colour], width: u32) -> MosaicGrid {
        let cells = colours
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                Piece::new(
                    PieceType::plate(),
                    Arc::new(BrickColour::new(i.to_string(), "Test", c, Some(1))),
                    PieceSize::UNIT,
                )
            })
            .collect();
        let height = colours.len() as u32 / width;
        MosaicGrid::from_cells(GridSize::new(width, height), cells).unwrap()
    }

    #[test]
    fn test_flat_single_cell() {
        let colour = Colour::rgb(12, 34, 56);
        let img = MosaicRenderer::new(10, false)
            .with_gutter(false)
            .render(&grid(&[colour], 1))
            .unwrap();

        assert_eq!(img.dimensions(), (10, 10));
        assert!(img.pixels().all(|p| p.0 == [12, 34, 56]));
    }

    #[test]
    fn test_gutter_adds_margin() {
        let renderer = MosaicRenderer::new(10, false);
        assert_eq!(renderer.margin(), 6);

        let img = renderer.render(&grid(&[Colour::BLACK; 6], 3)).unwrap();
        assert_eq!(img.dimensions(), (36, 26));
        assert_eq!(img.get_pixel(0, 0).0, BACKGROUND.to_array());
        // first cell starts right after the gutter
        assert_eq!(img.get_pixel(6, 6).0, [0, 0, 0]);
        // tick above the first column
        assert_eq!(img.get_pixel(11, 5).0, INK.to_array());
    }

    #[test]
    fn test_cells_are_placed_row_major() {
        let red = Colour::rgb(200, 0, 0);
        let blue = Colour::rgb(0, 0, 200);
        let img = MosaicRenderer::new(4, false)
            .with_gutter(false)
            .render(&grid(&[red, red, blue, blue], 2))
            .unwrap();

        assert_eq!(img.get_pixel(5, 1).0, red.to_array());
        assert_eq!(img.get_pixel(1, 5).0, blue.to_array());
    }

    #[test]
    fn test_stud_is_highlighted_and_outlined() {
        let body = Colour::rgb(100, 100, 100);
        let img = MosaicRenderer::new(20, true)
            .with_gutter(false)
            .render(&grid(&[body], 1))
            .unwrap();

        // centre gets the highlight, corners keep the body colour
        let centre = img.get_pixel(10, 10).0;
        assert_eq!(centre, body.scaled(STUD_HIGHLIGHT).to_array());
        assert!(centre[0] > 110);
        assert_eq!(img.get_pixel(0, 0).0, [100, 100, 100]);
        assert_eq!(img.get_pixel(19, 19).0, [100, 100, 100]);
        assert!(img.pixels().any(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn test_stud_highlight_saturates() {
        let img = MosaicRenderer::new(20, true)
            .with_gutter(false)
            .render(&grid(&[Colour::rgb(250, 10, 0)], 1))
            .unwrap();
        assert_eq!(img.get_pixel(10, 10).0, [255, 11, 0]);
    }

    #[test]
    fn test_zero_cell_size_is_clamped() {
        let renderer = MosaicRenderer::new(0, false).with_gutter(false);
        let img = renderer.render(&grid(&[Colour::WHITE], 1)).unwrap();
        assert_eq!(img.dimensions(), (1, 1));
    }

    #[test]
    fn test_gutter_numbers_columns_and_rows() {
        let renderer = MosaicRenderer::new(20, false);
        assert_eq!(renderer.margin(), 13);

        let img = renderer.render(&grid(&[Colour::BLACK], 1)).unwrap();
        assert_eq!(img.dimensions(), (33, 33));

        // "1" at scale 2: column label starts at x 20, y 1
        assert_eq!(img.get_pixel(22, 1).0, INK.to_array());
        assert_eq!(img.get_pixel(20, 1).0, BACKGROUND.to_array());
        // row label starts at x 3, y 18
        assert_eq!(img.get_pixel(5, 18).0, INK.to_array());
        assert_eq!(img.get_pixel(3, 18).0, BACKGROUND.to_array());
    }

    #[test]
    fn test_two_digit_labels_shrink_to_fit() {
        let renderer = MosaicRenderer::new(20, false);
        let big = grid(&[Colour::BLACK; 12], 12);
        assert_eq!(renderer.label_scale(&big), Some(1));
        assert_eq!(label_width(2, 1), 7);

        let img = renderer.render(&big).unwrap();
        // label "12" above column 12: centre 13 + 11 * 20 + 10 = 243, left edge 240
        // '1' top row is 010, '2' top row is 111
        let y0 = (13 - 5) / 2;
        assert_eq!(img.get_pixel(241, y0).0, INK.to_array());
        assert_eq!(img.get_pixel(240, y0).0, BACKGROUND.to_array());
        assert_eq!(img.get_pixel(244, y0).0, INK.to_array());
    }

    #[test]
    fn test_small_cells_fall_back_to_ticks() {
        let renderer = MosaicRenderer::new(10, false);
        assert_eq!(renderer.label_scale(&grid(&[Colour::BLACK], 1)), None);
    }

    #[test]
    fn test_oversized_cells_are_clamped() {
        let renderer = MosaicRenderer::new(u32::MAX, true);
        assert_eq!(renderer.cell_pixels(), MAX_CELL_PIXELS);
        assert_eq!(renderer.margin(), MAX_CELL_PIXELS * 2 / 3);
    }

    #[test]
    fn test_dimensions_overflow_is_none() {
        let renderer = MosaicRenderer::default();
        assert_eq!(renderer.dimensions(GridSize::new(48, 32)), Some((973, 653)));
        assert_eq!(renderer.dimensions(GridSize::new(u32::MAX, 1)), None);
    }
}
