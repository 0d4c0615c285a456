// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised by the fill engine.

use failure::Fail;

/// The fill cannot fail once it has started; the only failure is a
/// bad configuration, reported before any row is handed out.
#[derive(Debug, Fail, PartialEq)]
pub enum FillError {
    /// The worker pool was asked to run with no workers.
    #[fail(
        display = "invalid worker count {}: at least one worker is required",
        _0
    )]
    InvalidWorkerCount(usize),
}
