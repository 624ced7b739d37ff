/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::BTreeSet;
use std::ops::Bound::{Excluded, Unbounded};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Floor;

/**
 * Pending stops of the car, split by the direction the caller wants to travel.
 *
 * Both queues are ordered sets, so a floor is queued at most once per direction and
 * the scheduler can ask for the floors above or below the car without scanning.
 * Look-ups never mutate the queues; a floor only leaves a queue when the car stops there.
 *
 * # Fields
 * - `up`:      Floors waiting for an upward pickup or stop, iterated ascending.
 * - `down`:    Floors waiting for a downward pickup or stop, iterated descending.
 */
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestQueues {
    up: BTreeSet<Floor>,
    down: BTreeSet<Floor>,
}

impl RequestQueues {
    pub fn new() -> RequestQueues {
        RequestQueues::default()
    }

    pub fn add_up(&mut self, floor: Floor) -> bool {
        self.up.insert(floor)
    }

    pub fn add_down(&mut self, floor: Floor) -> bool {
        self.down.insert(floor)
    }

    /// Smallest up-floor strictly above `floor`.
    pub fn peek_up_above(&self, floor: Floor) -> Option<Floor> {
        self.up.range((Excluded(floor), Unbounded)).next().copied()
    }

    /// Smallest up-floor strictly below `floor`.
    pub fn peek_up_below(&self, floor: Floor) -> Option<Floor> {
        self.up.range(..floor).next().copied()
    }

    /// Largest down-floor strictly below `floor`.
    pub fn peek_down_below(&self, floor: Floor) -> Option<Floor> {
        self.down.range(..floor).next_back().copied()
    }

    /// Largest down-floor strictly above `floor`.
    pub fn peek_down_above(&self, floor: Floor) -> Option<Floor> {
        self.down.range((Excluded(floor), Unbounded)).next_back().copied()
    }

    /// Up-floor closest to `floor`. Ties go to the floor above.
    pub fn nearest_up(&self, floor: Floor) -> Option<Floor> {
        nearest(&self.up, floor, true)
    }

    /// Down-floor closest to `floor`. Ties go to the floor below.
    pub fn nearest_down(&self, floor: Floor) -> Option<Floor> {
        nearest(&self.down, floor, false)
    }

    pub fn remove_up_if_present(&mut self, floor: Floor) -> bool {
        self.up.remove(&floor)
    }

    pub fn remove_down_if_present(&mut self, floor: Floor) -> bool {
        self.down.remove(&floor)
    }

    /// Clears `floor` from both queues. One stop serves both call types.
    pub fn remove_floor(&mut self, floor: Floor) -> bool {
        let removed_up = self.remove_up_if_present(floor);
        let removed_down = self.remove_down_if_present(floor);
        removed_up || removed_down
    }

    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }

    pub fn clear(&mut self) {
        self.up.clear();
        self.down.clear();
    }

    pub fn up_ascending(&self) -> Vec<Floor> {
        self.up.iter().copied().collect()
    }

    pub fn down_descending(&self) -> Vec<Floor> {
        self.down.iter().rev().copied().collect()
    }
}

fn nearest(queue: &BTreeSet<Floor>, floor: Floor, prefer_above: bool) -> Option<Floor> {
    let below = queue.range(..=floor).next_back().copied();
    let above = queue.range(floor..).next().copied();

    match (below, above) {
        (Some(b), Some(a)) => {
            let (dist_below, dist_above) = (floor - b, a - floor);
            if dist_above < dist_below || (dist_above == dist_below && prefer_above) {
                Some(a)
            } else {
                Some(b)
            }
        }
        (Some(b), None) => Some(b),
        (None, a) => a,
    }
}
