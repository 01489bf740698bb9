//! Per-instance debounce timer
//!
//! A `Debouncer` owns at most one pending timer task. Every `schedule` call
//! aborts the pending task and starts a new one; when the quiet period
//! elapses the task delivers a message on the owner's event channel. The
//! message carries a ticket, so a delivery that was already queued before a
//! reschedule or cancel is still rejected by [`Debouncer::accept`].
//!
//! Delivery always goes through a spawned task and the channel, including a
//! zero delay, so the owner never observes a synchronous fire.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Identifies one scheduled delivery
pub type Ticket = u64;

pub struct Debouncer<M> {
    delay: Duration,
    tx: UnboundedSender<M>,
    ticket: Ticket,
    pending: Option<JoinHandle<()>>,
}

impl<M: Send + 'static> Debouncer<M> {
    pub fn new(delay: Duration, tx: UnboundedSender<M>) -> Self {
        Self {
            delay,
            tx,
            ticket: 0,
            pending: None,
        }
    }

    /// Replace any pending delivery with a new one
    ///
    /// `build` receives the new ticket and produces the message sent once
    /// `delay` has passed without another `schedule` or `cancel`.
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, build: F) -> Ticket
    where
        F: FnOnce(Ticket) -> M + Send + 'static,
    {
        self.cancel();
        self.ticket = self.ticket.wrapping_add(1);

        let ticket = self.ticket;
        let delay = self.delay;
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Owner gone: nothing left to notify
            let _ = tx.send(build(ticket));
        }));

        ticket
    }

    /// Drop the pending delivery, if any. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Claim a delivered ticket
    ///
    /// Returns true only for the latest ticket while it is still pending,
    /// and releases the timer. Superseded or cancelled tickets return false.
    pub fn accept(&mut self, ticket: Ticket) -> bool {
        if self.pending.is_some() && ticket == self.ticket {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

impl<M> Drop for Debouncer<M> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
