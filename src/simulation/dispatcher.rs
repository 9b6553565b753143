//! Moves arriving passengers from the feed into their route's queue

use log::warn;

use super::route::RouteState;
use super::types::Passenger;

/// Cursor over a feed sorted ascending by arrival tick
///
/// An unsorted feed is not detected: a passenger whose arrival tick is
/// already in the past stalls the cursor and is never dispatched.
#[derive(Debug, Clone, Default)]
pub struct ArrivalDispatcher {
    cursor: usize,
    dropped: usize,
}

impl ArrivalDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch every passenger arriving at `tick`
    ///
    /// Passengers with an unrecognized route tag are dropped, but the cursor
    /// still moves past them. Returns everything taken from the feed this
    /// tick, dropped passengers included.
    pub fn dispatch(
        &mut self,
        tick: u32,
        feed: &[Passenger],
        routes: &mut [RouteState],
    ) -> Vec<Passenger> {
        let mut arrivals = Vec::new();

        while let Some(passenger) = feed.get(self.cursor) {
            if passenger.arrival_tick != tick {
                break;
            }
            self.cursor += 1;
            arrivals.push(*passenger);

            let route = match passenger.tag.route() {
                Some(route) => route,
                None => {
                    self.dropped += 1;
                    warn!(
                        "tick {}: dropping passenger with unknown route type '{}'",
                        tick,
                        passenger.tag.code()
                    );
                    continue;
                }
            };

            match routes.iter_mut().find(|state| state.route == route) {
                Some(state) => state.enqueue(*passenger),
                None => {
                    self.dropped += 1;
                    warn!("tick {}: no state for route {:?}", tick, route);
                }
            }
        }

        arrivals
    }

    /// Index of the next passenger not yet taken from the feed
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether every passenger in `feed` has been taken
    pub fn is_exhausted(&self, feed: &[Passenger]) -> bool {
        self.cursor >= feed.len()
    }

    /// Number of passengers dropped so far
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}
