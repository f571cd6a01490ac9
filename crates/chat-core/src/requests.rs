//! Per-kind request generations.
//!
//! Every request gets a [`Ticket`]. For kinds that supersede, only the
//! ticket of the most recently started request stays current, so a slow
//! response can never overwrite the result of a later request.

use std::collections::HashMap;

use chat_types::event::RequestKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub kind: RequestKind,
    pub generation: u64,
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: HashMap<RequestKind, u64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, kind: RequestKind) -> Ticket {
        let generation = self.latest.entry(kind).or_insert(0);
        *generation += 1;
        Ticket {
            kind,
            generation: *generation,
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        if !ticket.kind.supersedes() {
            return true;
        }
        self.latest.get(&ticket.kind) == Some(&ticket.generation)
    }
}
