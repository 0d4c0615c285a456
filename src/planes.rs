// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes the affine
//! relationship between the integral plane of the raster, rooted at
//! 0,0, and the complex plane the escape-time recurrence runs in.
use num::Complex;

/// Describes the row and column of a pixel in the raster.  Rows run
/// along the real axis, columns along the imaginary one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels on the integral plane to points on the complex plane
/// by scaling each coordinate by `zoom / scale` and then shifting it
/// by `offset`.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    // The number of pixels that span one `zoom` worth of the complex
    // plane.
    scale: f64,
    zoom: f64,
    // Subtracted from the scaled coordinate, so that pixel 0,0 lands
    // on `-offset`.
    offset: Complex<f64>,
}

impl PlaneMapper {
    /// Constructor.  `scale` is the pixel count covering `zoom` units
    /// of the complex plane; `offset` is the negated complex value of
    /// pixel 0,0.
    pub fn new(scale: f64, zoom: f64, offset: Complex<f64>) -> PlaneMapper {
        PlaneMapper {
            scale,
            zoom,
            offset,
        }
    }

    /// Given the row and column of a pixel on the integral cartesian
    /// plane, return the complex number at the equivalent location on
    /// the complex cartesian plane.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.zoom * (pixel.0 as f64) / self.scale - self.offset.re,
            self.zoom * (pixel.1 as f64) / self.scale - self.offset.im,
        )
    }
}

impl Default for PlaneMapper {
    /// A thousand pixels to four units, with the origin at -1.5-1.0i.
    /// A 512x512 raster then spans roughly -1.5-1.0i to 0.55+1.05i.
    fn default() -> Self {
        PlaneMapper::new(1000.0, 4.0, Complex::new(1.5, 1.0))
    }
}
