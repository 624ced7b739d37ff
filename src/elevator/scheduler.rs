/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::queues::RequestQueues;
use crate::shared::{Direction, Floor};

/**
 * Picks the next floor the car should drive toward.
 *
 * While moving the car keeps sweeping in its direction of travel. When no stop is left
 * ahead in that direction it first rises (or sinks) to the farthest pending
 * opposite-direction call before turning around. An idle car goes to whichever queued
 * floor is closest, preferring the up-queue on a tie.
 *
 * The choice only depends on the arguments, and `None` means there is nothing left to do.
 */
pub fn choose_target(queues: &RequestQueues, floor: Floor, direction: Direction) -> Option<Floor> {
    match direction {
        Direction::Up => queues
            .peek_up_above(floor)
            .or_else(|| queues.peek_down_above(floor))
            .or_else(|| queues.peek_down_below(floor))
            .or_else(|| queues.peek_up_below(floor)),

        Direction::Down => queues
            .peek_down_below(floor)
            .or_else(|| queues.peek_up_below(floor))
            .or_else(|| queues.peek_up_above(floor))
            .or_else(|| queues.peek_down_above(floor)),

        Direction::Idle => closest(floor, queues.nearest_up(floor), queues.nearest_down(floor)),
    }
}

fn closest(floor: Floor, up: Option<Floor>, down: Option<Floor>) -> Option<Floor> {
    match (up, down) {
        (Some(u), Some(d)) => {
            if floor.abs_diff(u) <= floor.abs_diff(d) {
                Some(u)
            } else {
                Some(d)
            }
        }
        (Some(u), None) => Some(u),
        (None, d) => d,
    }
}
