use std::time::{Duration, Instant};

use log::trace;

/// Handle of a scheduled type-ahead search. A newer keystroke supersedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchTicket(u64);

#[derive(Debug, Clone, Copy)]
struct PendingSearch {
    ticket: SearchTicket,
    due: Instant,
}

/// Accumulates type-ahead characters and schedules a single search for
/// them.
///
/// At most one search is pending. Each keystroke cancels the pending one and
/// schedules a new search `delay` later, so only the last keystroke of a
/// burst triggers it. Time is passed in by the caller; nothing here sleeps
/// or spawns.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    query: String,
    pending: Option<PendingSearch>,
    issued: u64,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, query: String::new(), pending: None, issued: 0 }
    }

    /// Appends `symbol` to the query and reschedules the search.
    pub fn push(&mut self, symbol: char, now: Instant) -> SearchTicket {
        self.query.push(symbol);
        self.issued += 1;
        let ticket = SearchTicket(self.issued);
        if let Some(superseded) = self.pending.replace(PendingSearch { ticket, due: now + self.delay }) {
            trace!("Search {:?} superseded by {:?}", superseded.ticket, ticket);
        }
        ticket
    }

    /// Drops the pending search together with the accumulated query.
    pub fn cancel(&mut self) -> Option<SearchTicket> {
        self.query.clear();
        self.pending.take().map(|pending| pending.ticket)
    }

    pub fn pending(&self) -> Option<SearchTicket> {
        self.pending.map(|pending| pending.ticket)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.pending() == Some(ticket)
    }

    /// When the pending search becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|pending| pending.due)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Hands out the accumulated query once the pending search is due, and
    /// resets the buffer. Returns `None` before the deadline or when nothing
    /// is pending.
    pub fn fire(&mut self, now: Instant) -> Option<String> {
        let pending = self.pending?;
        if now < pending.due {
            return None;
        }
        self.pending = None;
        Some(std::mem::take(&mut self.query))
    }
}
