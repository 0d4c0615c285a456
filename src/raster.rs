// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The raster buffer: a fixed-size, row-major grid of colours that
//! the fill engine writes into and an encoder later reads from.

use image::{Rgba, RgbaImage};

/// An 8-bit-per-channel RGBA colour.  The default is all zeroes,
/// which no evaluated pixel ever produces since those are opaque.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha; 255 is opaque.
    pub a: u8,
}

impl Color {
    /// An opaque grey of intensity `n`.
    pub fn gray(n: u8) -> Color {
        Color {
            r: n,
            g: n,
            b: n,
            a: 255,
        }
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Rgba<u8> {
        Rgba([c.r, c.g, c.b, c.a])
    }
}

/// A `height` by `width` grid of colours.  The dimensions are fixed at
/// allocation.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    height: usize,
    width: usize,
    cells: Vec<Color>,
}

impl Raster {
    /// Allocate a raster with every cell set to `Color::default()`.
    pub fn allocate(height: usize, width: usize) -> Raster {
        Raster {
            height,
            width,
            cells: vec![Color::default(); height * width],
        }
    }

    /// The number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The number of columns in each row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the raster has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    // A column past the row width would otherwise silently land in
    // the next row.
    fn offset(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.height && column < self.width,
            "pixel ({}, {}) outside a {}x{} raster",
            row,
            column,
            self.height,
            self.width
        );
        row * self.width + column
    }

    /// Read one cell.  Only meaningful after a fill has completed.
    pub fn get(&self, row: usize, column: usize) -> Color {
        self.cells[self.offset(row, column)]
    }

    /// Overwrite one cell.
    pub fn set(&mut self, row: usize, column: usize, color: Color) {
        let offset = self.offset(row, column);
        self.cells[offset] = color;
    }

    /// Split the raster into its rows, each paired with its row index.
    /// The slices are disjoint, so each can be handed to a different
    /// worker.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = (usize, &mut [Color])> {
        // chunks_mut() refuses a chunk size of zero; a zero-width
        // raster has no cells, so any size yields nothing.
        let width = self.width.max(1);
        self.cells.chunks_mut(width).enumerate()
    }

    /// Copy the raster into an `image` buffer for encoding.  The row
    /// index runs along the horizontal axis, so the image is `height`
    /// pixels wide and `width` pixels tall, with the real axis of the
    /// complex plane laid out left to right.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.height as u32, self.width as u32, |x, y| {
            self.get(x as usize, y as usize).into()
        })
    }
}
