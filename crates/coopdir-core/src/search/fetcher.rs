use std::future::Future;
use std::time::Duration;

use crate::models::CoopRecord;
use crate::Result;

use super::tracker::{RequestTicket, RequestTracker};

/// Window used to coalesce rapid successive searches into one request.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Anything that can answer a directory search URL with records.
pub trait CoopSource {
    fn fetch_coops(&self, url: &str) -> impl Future<Output = Result<Vec<CoopRecord>>> + Send;
}

/// How a single search request ended.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The query URL was empty; results should be cleared.
    Cleared,
    /// A newer request was issued before this one finished.
    Superseded,
    /// Records for the most recent request.
    Loaded(Vec<CoopRecord>),
    /// The most recent request failed.
    Failed(crate::Error),
}

/// Debounced, latest-request-wins wrapper around a [`CoopSource`].
#[derive(Debug)]
pub struct DebouncedFetcher<S> {
    source: S,
    tracker: RequestTracker,
    window: Duration,
}

impl<S: CoopSource> DebouncedFetcher<S> {
    pub fn new(source: S) -> Self {
        Self::with_window(source, DEFAULT_DEBOUNCE)
    }

    pub fn with_window(source: S, window: Duration) -> Self {
        Self {
            source,
            tracker: RequestTracker::new(),
            window,
        }
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Issue a ticket for a new search, superseding any earlier one.
    pub fn begin(&self) -> RequestTicket {
        self.tracker.issue()
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.tracker.is_current(ticket)
    }

    /// Run the search for `ticket`.
    ///
    /// Waits out the debounce window first; a ticket superseded during the
    /// wait never reaches the network. A response that arrives after the
    /// ticket was superseded is dropped and reported as `Superseded`.
    pub async fn run(&self, ticket: RequestTicket, url: &str) -> FetchOutcome {
        if !self.is_current(ticket) {
            return FetchOutcome::Superseded;
        }
        if url.is_empty() {
            return FetchOutcome::Cleared;
        }

        tokio::time::sleep(self.window).await;
        if !self.is_current(ticket) {
            tracing::debug!("Search #{} coalesced into a newer one", ticket.id());
            return FetchOutcome::Superseded;
        }

        tracing::debug!("Search #{}: GET {}", ticket.id(), url);
        let result = self.source.fetch_coops(url).await;
        if !self.is_current(ticket) {
            tracing::debug!("Search #{} finished after being superseded", ticket.id());
            return FetchOutcome::Superseded;
        }

        match result {
            Ok(records) => FetchOutcome::Loaded(records),
            Err(error) => FetchOutcome::Failed(error),
        }
    }

    /// Begin and run a search in one step.
    pub async fn search(&self, url: &str) -> FetchOutcome {
        let ticket = self.begin();
        self.run(ticket, url).await
    }
}
