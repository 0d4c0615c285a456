// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time evaluation of the Mandelbrot recurrence.
//!
//! Each pixel is mapped to a point `C` on the complex plane, and
//! `Z = Z² + C` is iterated from zero until either `|Z|` exceeds the
//! escape limit or the iteration cap is hit.  The squares of the real
//! and imaginary parts are carried from one iteration into the next
//! rather than recomputed, and whatever they are when the loop stops
//! decides the shade of grey.

use crate::planes::{Pixel, PlaneMapper};
use crate::raster::Color;

/// The parameters of an escape-time render.  Holds no mutable state,
/// so a single evaluator can be shared by every worker in a fill.
#[derive(Copy, Clone, Debug)]
pub struct EscapeTime {
    plane: PlaneMapper,
    max_iterations: usize,
    limit: f64,
}

impl EscapeTime {
    /// `limit` is the escape radius; iteration stops once `|Z|`
    /// exceeds it.
    pub fn new(plane: PlaneMapper, max_iterations: usize, limit: f64) -> EscapeTime {
        EscapeTime {
            plane,
            max_iterations,
            limit,
        }
    }

    /// Compute the colour of the pixel at `row`, `column`.
    pub fn evaluate(&self, row: usize, column: usize) -> Color {
        let c = self.plane.pixel_to_point(&Pixel(row, column));
        let limit_sqr = self.limit * self.limit;
        let (mut zr, mut zi, mut tr, mut ti) = (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64);
        let mut i = 0;
        while i < self.max_iterations && tr + ti <= limit_sqr {
            zi = 2.0 * zr * zi + c.im;
            zr = tr - ti + c.re;
            tr = zr * zr;
            ti = zi * zi;
            i += 1;
        }
        Color::gray(intensity(tr, ti))
    }
}

impl Default for EscapeTime {
    fn default() -> Self {
        EscapeTime::new(PlaneMapper::default(), 1000, 2.0)
    }
}

/// Convert the final squares of an evaluation into a grey level.
///
/// `tr * ti * 2` is truncated toward zero, then wrapped modulo 256.
/// `as i64` saturates and sends NaN to zero; `as u8` keeps the low
/// eight bits.
pub fn intensity(tr: f64, ti: f64) -> u8 {
    (tr * ti * 2.0) as i64 as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::Complex;

    #[test]
    fn evaluate_is_deterministic() {
        let et = EscapeTime::default();
        for &(row, column) in &[(0, 0), (100, 200), (375, 250), (511, 511)] {
            assert_eq!(et.evaluate(row, column), et.evaluate(row, column));
        }
    }

    #[test]
    fn evaluated_pixels_are_opaque_gray() {
        let et = EscapeTime::default();
        let c = et.evaluate(42, 17);
        assert_eq!(c.a, 255);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
    }

    #[test]
    fn origin_pixel_is_reproducible() {
        // -1.5-1.0i: Z1 = C, |Z1|² = 3.25, so a second step is taken.
        // Z2 = (2.25 - 1.0 - 1.5) + (3.0 - 1.0)i = -0.25 + 2i, |Z2|² > 4.
        let et = EscapeTime::default();
        let tr = 0.0625;
        let ti = 4.0;
        assert_eq!(et.evaluate(0, 0), Color::gray(intensity(tr, ti)));
        assert_eq!(et.evaluate(0, 0), Color::gray(0));
    }

    #[test]
    fn interior_point_runs_to_the_cap() {
        // The origin of the complex plane never escapes, and Z stays 0.
        let plane = PlaneMapper::new(1.0, 1.0, Complex::new(0.0, 0.0));
        let et = EscapeTime::new(plane, 1000, 2.0);
        assert_eq!(et.evaluate(0, 0), Color::gray(0));
    }

    #[test]
    fn one_iteration_is_always_taken() {
        // With a cap of one, Z1 = C.  For C = 1+1i, Tr = Ti = 1.
        let plane = PlaneMapper::new(1.0, 1.0, Complex::new(-1.0, -1.0));
        let et = EscapeTime::new(plane, 1, 2.0);
        assert_eq!(et.evaluate(0, 0), Color::gray(2));
    }

    #[test]
    fn zero_iterations_leave_black() {
        let et = EscapeTime::new(PlaneMapper::default(), 0, 2.0);
        assert_eq!(et.evaluate(300, 300), Color::gray(0));
    }

    #[test]
    fn intensity_truncates_then_wraps() {
        assert_eq!(intensity(0.0, 0.0), 0);
        assert_eq!(intensity(1.0, 127.95), 255);
        assert_eq!(intensity(1.0, 128.0), 0);
        assert_eq!(intensity(1.0, 150.35), 44);
        assert_eq!(intensity(1.0, 0.49), 0);
        assert_eq!(intensity(f64::NAN, 1.0), 0);
    }
}
