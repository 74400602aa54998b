//! Request/result state shared by the domain, keyword, and audit panels.
//!
//! DESIGN
//! ======
//! Each trigger issues a [`Ticket`] carrying a per-panel sequence number.
//! A completion is applied only when its ticket is still the latest one, so
//! a slow response can never overwrite the result of a newer request. There
//! is no cancellation: superseded requests run to completion and are dropped.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use reports::{ApiError, normalize_query};

/// Lifecycle of the most recent request.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelStatus<T> {
    Idle,
    Submitting,
    Success(T),
    Failed(String),
}

/// Handle for one in-flight request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub seq: u64,
    /// Trimmed, non-empty query text.
    pub query: String,
}

/// Per-panel state. Lives in an `RwSignal` owned by the panel component.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelState<T> {
    pub status: PanelStatus<T>,
    latest: u64,
}

impl<T> Default for PanelState<T> {
    fn default() -> Self {
        Self { status: PanelStatus::Idle, latest: 0 }
    }
}

impl<T> PanelState<T> {
    /// Start a request for `raw`.
    ///
    /// Blank input returns `None` and leaves the state untouched. Otherwise
    /// the previous payload is dropped, the panel moves to `Submitting`, and
    /// the returned ticket supersedes every earlier one.
    pub fn begin(&mut self, raw: &str) -> Option<Ticket> {
        let query = normalize_query(raw)?;
        self.latest += 1;
        self.status = PanelStatus::Submitting;
        Some(Ticket { seq: self.latest, query })
    }

    /// Start an input-less request (history refresh).
    pub fn begin_fetch(&mut self) -> Ticket {
        self.latest += 1;
        self.status = PanelStatus::Submitting;
        Ticket { seq: self.latest, query: String::new() }
    }

    /// Apply a completion. Returns `false` when the ticket is stale.
    pub fn resolve(&mut self, ticket: &Ticket, result: Result<T, ApiError>) -> bool {
        if ticket.seq != self.latest {
            return false;
        }
        self.status = match result {
            Ok(value) => PanelStatus::Success(value),
            Err(err) => PanelStatus::Failed(err.to_string()),
        };
        true
    }

    /// Back to `Idle`, invalidating anything still in flight.
    pub fn reset(&mut self) {
        self.latest += 1;
        self.status = PanelStatus::Idle;
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self.status, PanelStatus::Submitting)
    }

    #[must_use]
    pub fn result(&self) -> Option<&T> {
        match &self.status {
            PanelStatus::Success(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            PanelStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
