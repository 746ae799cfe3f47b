// assets.rs - Outstanding model fetches
//
// The host performs the actual fetch. Each request gets a ticket stamped
// with the current epoch; tearing the scene down bumps the epoch so that
// completions arriving afterwards are ignored instead of spliced into a
// scene that no longer exists.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ticket {
    pub id: u32,
    pub epoch: u32,
}

#[derive(Debug)]
pub struct AssetQueue<T> {
    epoch: u32,
    next: u32,
    pending: HashMap<u32, (String, T)>,
}

impl<T> Default for AssetQueue<T> {
    fn default() -> Self {
        Self { epoch: 0, next: 0, pending: HashMap::new() }
    }
}

impl<T> AssetQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// `payload` is whatever the scene needs to finish the job on completion
    pub fn request(&mut self, url: &str, payload: T) -> Ticket {
        let ticket = Ticket { id: self.next, epoch: self.epoch };
        self.next = self.next.wrapping_add(1);
        self.pending.insert(ticket.id, (url.to_string(), payload));
        log::debug!("requesting {url} ({ticket:?})");
        ticket
    }

    /// Claim a successful completion. None for stale or unknown tickets.
    pub fn resolve(&mut self, ticket: Ticket) -> Option<(String, T)> {
        if ticket.epoch != self.epoch {
            log::debug!("ignoring late completion {ticket:?}, epoch is {}", self.epoch);
            return None;
        }
        let entry = self.pending.remove(&ticket.id);
        if entry.is_none() {
            log::debug!("unknown ticket {ticket:?}");
        }
        entry
    }

    /// Claim a failed completion. The object simply never appears.
    pub fn fail(&mut self, ticket: Ticket, reason: &str) -> Option<Error> {
        let (url, _) = self.resolve(ticket)?;
        let err = Error::AssetLoad { url, reason: reason.to_string() };
        log::error!("{err}");
        Some(err)
    }

    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    pub fn reset(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.pending.clear();
    }
}
