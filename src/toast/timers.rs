// SPDX-License-Identifier: MPL-2.0
//! Scheduled callbacks owned by a finite toast.
//!
//! Each finite toast owns exactly two tokio tasks: a one-shot removal timer
//! and a recurring progress tick. Both are aborted together when the
//! `ToastTimers` value is dropped, which happens on every removal path.

use tokio::task::JoinHandle;

#[derive(Debug)]
pub(crate) struct ToastTimers {
    removal: JoinHandle<()>,
    progress: JoinHandle<()>,
}

impl ToastTimers {
    pub(crate) fn new(removal: JoinHandle<()>, progress: JoinHandle<()>) -> Self {
        Self { removal, progress }
    }

    pub(crate) fn cancel(&self) {
        self.removal.abort();
        self.progress.abort();
    }

    #[cfg(test)]
    pub(crate) fn removal_finished(&self) -> bool {
        self.removal.is_finished()
    }
}

impl Drop for ToastTimers {
    fn drop(&mut self) {
        self.cancel();
    }
}
