#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parallel Mandelbrot raster fill
//!
//! The Mandelbrot set is the set of points `C` on the complex plane
//! for which `Z = Z² + C`, iterated from zero, never runs off to
//! infinity.  Rendering it by escape time means iterating that
//! recurrence for the point under every pixel until it either leaves
//! a circle of radius two or hits an iteration cap, and shading the
//! pixel by where it ended up.
//!
//! Every pixel is independent of every other, so the work splits
//! cleanly.  The fill engine hands whole rows of a pre-allocated
//! raster to a fixed pool of worker threads; each worker owns the rows
//! it is given and writes straight into the shared buffer, so there is
//! nothing to merge once the pool has finished.
//!
//! ```
//! use mandelfill::{fill, Raster};
//!
//! let mut raster = Raster::allocate(64, 64);
//! fill(&mut raster, 4).unwrap();
//! assert_eq!(raster.get(0, 0).a, 255);
//! ```

extern crate crossbeam;
extern crate failure;
extern crate image;
extern crate log;
extern crate num;

pub mod errors;
pub mod escape;
pub mod fill;
pub mod planes;
pub mod pool;
pub mod raster;

pub use errors::FillError;
pub use escape::EscapeTime;
pub use fill::{fill, fill_with};
pub use planes::{Pixel, PlaneMapper};
pub use pool::{distribute, distribute_rows};
pub use raster::{Color, Raster};
