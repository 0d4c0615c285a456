// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The image fill engine: evaluates every pixel of a raster, spreading
//! rows across a worker pool.  A row is the unit of distribution; a
//! worker paints every column of its row before asking for another.

use log::debug;

use crate::errors::FillError;
use crate::escape::EscapeTime;
use crate::pool;
use crate::raster::{Color, Raster};

/// Fill `raster` with the default escape-time render using `workers`
/// threads.
pub fn fill(raster: &mut Raster, workers: usize) -> Result<(), FillError> {
    fill_with(&EscapeTime::default(), raster, workers)
}

/// Fill `raster` using `evaluator`.  Each worker owns the rows it is
/// handed, so the writes need no locking, and when this returns every
/// cell holds `evaluator.evaluate(row, column)`.  On error the raster
/// has not been touched.
pub fn fill_with(
    evaluator: &EscapeTime,
    raster: &mut Raster,
    workers: usize,
) -> Result<(), FillError> {
    debug!(
        "filling {}x{} raster with {} workers",
        raster.height(),
        raster.width(),
        workers
    );
    pool::distribute(raster.rows_mut(), workers, |(row, cells): (usize, &mut [Color])| {
        for (column, cell) in cells.iter_mut().enumerate() {
            *cell = evaluator.evaluate(row, column);
        }
    })
}
