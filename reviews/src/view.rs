//! # View State
//!
//! Helpers for the rendering collaborator's list screen.
//!
//! Filter selection is an immutable value threaded through a single reduce
//! function instead of ambient mutable widget state. In-flight list fetches
//! carry a generation ticket; a response whose ticket is no longer current is
//! dropped instead of overwriting newer state.

use crate::filter::ReviewFilter;

#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    SetRegion(Option<String>),
    SetVenue(Option<String>),
    SetGenre(Option<String>),
    Clear,
}

/// The one way filter state changes: old state in, event in, new state out.
pub fn reduce(state: ReviewFilter, event: FilterEvent) -> ReviewFilter {
    match event {
        FilterEvent::SetRegion(region) => ReviewFilter { region, ..state },
        FilterEvent::SetVenue(venue) => ReviewFilter { venue, ..state },
        FilterEvent::SetGenre(genre) => ReviewFilter { genre, ..state },
        FilterEvent::Clear => ReviewFilter::default(),
    }
}

/// Hands out a ticket per fetch and only accepts the latest one back.
#[derive(Debug, Default)]
pub struct FetchCoordinator {
    current: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch, superseding every ticket handed out before.
    pub fn begin(&mut self) -> FetchTicket {
        self.current += 1;
        FetchTicket {
            generation: self.current,
        }
    }

    /// Whether a finished fetch may commit its result to view state.
    pub fn accept(&self, ticket: FetchTicket) -> bool {
        ticket.generation == self.current
    }
}
