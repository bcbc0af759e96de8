/*
  Snare, a time-bounded chess move chooser.
  Copyright (C) 2022 The Snare Authors.

  Snare is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Snare is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Limits on how long a search may run, and the `TurnClock` trait through
//! which a search asks whether its turn is over.

use super::search::SearchError;

use std::{
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Mutex,
    },
    time::{Duration, Instant},
};

/// Something a search can poll to find out whether it must stop.
pub trait TurnClock {
    /// Called once at the start of every decision.
    ///
    /// # Errors
    ///
    /// Will return an error if the clock could not be reset.
    fn start(&self) -> Result<(), SearchError> {
        Ok(())
    }

    /// Report that `nodes` more nodes have been searched since the last poll,
    /// and determine whether the turn is over.
    fn poll(&self, nodes: u64) -> bool;
}

#[derive(Debug)]
/// A limit to how long an engine should search for.
pub struct SearchLimit {
    /// Whether the search is over, either by a direct stop or by running out
    /// of time or nodes.
    over: AtomicBool,
    /// The cumulative number of nodes which have been searched since the first
    /// call to `start`.
    num_nodes: AtomicU64,
    /// A cap on the total number of nodes to search. If the cap is `None`,
    /// then there is no limit to the number of nodes to search.
    pub nodes_cap: Mutex<Option<u64>>,
    /// The time at which the search will end. Will be `None` if the search is
    /// untimed.
    end_time: Mutex<Option<Instant>>,
    /// The duration of the search. If the duration is `None`, then there is
    /// no limit to the duration of the search.
    pub search_duration: Mutex<Option<Duration>>,
}

impl SearchLimit {
    /// Create a new `SearchLimit` which will never stop.
    pub fn new() -> SearchLimit {
        SearchLimit {
            over: AtomicBool::new(false),
            num_nodes: AtomicU64::new(0),
            nodes_cap: Mutex::new(None),
            end_time: Mutex::new(None),
            search_duration: Mutex::new(None),
        }
    }

    /// Create a new `SearchLimit` which stops after the given duration.
    pub fn with_duration(duration: Duration) -> SearchLimit {
        let mut limit = SearchLimit::new();
        limit.search_duration = Mutex::new(Some(duration));
        limit
    }

    /// Create a new `SearchLimit` which stops after searching the given number
    /// of nodes.
    pub fn with_nodes(nodes_cap: u64) -> SearchLimit {
        let mut limit = SearchLimit::new();
        limit.nodes_cap = Mutex::new(Some(nodes_cap));
        limit
    }

    /// Start the search limit, resetting its node count and setting its end
    /// time relative to now.
    ///
    /// # Errors
    ///
    /// Will return an error if a lock was poisoned.
    pub fn start(&self) -> Result<(), SearchError> {
        self.num_nodes.store(0, Ordering::Relaxed);
        self.over.store(false, Ordering::Relaxed);
        let now = Instant::now();
        *self.end_time.lock()? = (*self.search_duration.lock()?).map(|dur| now + dur);
        Ok(())
    }

    #[inline(always)]
    /// Poll whether the search is over.
    pub fn is_over(&self) -> bool {
        self.over.load(Ordering::Relaxed)
    }

    /// Immediately end the search.
    pub fn stop(&self) {
        self.over.store(true, Ordering::Relaxed);
    }

    /// Check the elapsed time to see if this search is over, and if so, update
    /// accordingly.
    ///
    /// # Errors
    ///
    /// Will return an error if a lock was poisoned.
    pub fn update_time(&self) -> Result<bool, SearchError> {
        if let Some(end) = *self.end_time.lock()? {
            if Instant::now() > end {
                self.over.store(true, Ordering::Relaxed);
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Increment the total number of nodes searched.
    ///
    /// # Errors
    ///
    /// Will return an error if a lock was poisoned.
    pub fn add_nodes(&self, nodes: u64) -> Result<(), SearchError> {
        self.num_nodes.fetch_add(nodes, Ordering::Relaxed);
        if let Some(max_nodes) = *self.nodes_cap.lock()? {
            if self.num_nodes.load(Ordering::Relaxed) > max_nodes {
                self.over.store(true, Ordering::Relaxed);
            }
        }
        Ok(())
    }

}

impl Default for SearchLimit {
    fn default() -> Self {
        SearchLimit::new()
    }
}

impl TurnClock for SearchLimit {
    fn start(&self) -> Result<(), SearchError> {
        SearchLimit::start(self)
    }

    /// A poisoned lock ends the turn, since the limit can no longer be
    /// trusted.
    fn poll(&self, nodes: u64) -> bool {
        if self.add_nodes(nodes).is_err() {
            self.stop();
        }
        match self.update_time() {
            Ok(timed_out) => timed_out || self.is_over(),
            Err(_) => true,
        }
    }
}

/// A turn clock backed by a host-provided predicate, which returns `true`
/// once the turn is over.
pub struct Callback<F>(pub F);

impl<F: Fn() -> bool> TurnClock for Callback<F> {
    #[inline(always)]
    fn poll(&self, _nodes: u64) -> bool {
        (self.0)()
    }
}
