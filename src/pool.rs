// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A fixed-size worker pool.  Work items are fed through a bounded
//! channel to a set of scoped threads, each of which takes the next
//! item as soon as it finishes the last one.  The scope join is the
//! barrier: nothing returns until every worker has drained the
//! channel and exited.

use crossbeam::channel;
use log::{debug, trace};

use crate::errors::FillError;

/// Run `work` once for every item, spread across `workers` threads.
/// Items may borrow from the caller, including disjoint `&mut`
/// slices of a shared buffer.  Which worker gets which item, and in
/// what order, is unspecified.
///
/// A worker count of zero is an error, raised before the first item
/// is pulled.  No more threads are started than there are items.  A
/// panic inside `work` is resumed on the calling thread once the pool
/// has shut down.
pub fn distribute<I, F>(items: I, workers: usize, work: F) -> Result<(), FillError>
where
    I: IntoIterator,
    I::Item: Send,
    F: Fn(I::Item) + Sync,
{
    if workers == 0 {
        return Err(FillError::InvalidWorkerCount(workers));
    }

    let items: Vec<I::Item> = items.into_iter().collect();
    if items.is_empty() {
        return Ok(());
    }

    let workers = workers.min(items.len());
    debug!("starting pool of {} workers for {} items", workers, items.len());
    let (sender, receiver) = channel::bounded(workers);
    let work = &work;
    let outcome = crossbeam::scope(|spawner| {
        for id in 0..workers {
            let receiver = receiver.clone();
            spawner.spawn(move |_| {
                let mut done = 0;
                for item in receiver.iter() {
                    work(item);
                    done += 1;
                }
                trace!("worker {} exiting after {} items", id, done);
            });
        }
        drop(receiver);

        for item in items {
            // Only fails once every worker has died.
            if sender.send(item).is_err() {
                break;
            }
        }
        drop(sender);
    });

    if let Err(panic) = outcome {
        std::panic::resume_unwind(panic);
    }
    Ok(())
}

/// Run `work(row)` once for every row in `0..row_count`.
pub fn distribute_rows<F>(row_count: usize, workers: usize, work: F) -> Result<(), FillError>
where
    F: Fn(usize) + Sync,
{
    distribute(0..row_count, workers, work)
}
