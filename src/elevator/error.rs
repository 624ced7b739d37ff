/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Floor;

/// Errors surfaced to whoever drives the car. The messages are shown to clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElevatorError {
    #[error("floor {floor} is out of range, floors go from 0 to {max_floor}")]
    InvalidFloor { floor: i32, max_floor: Floor },
    #[error("direction must be -1 (down), 0 (internal) or 1 (up), got {0}")]
    InvalidDirection(i32),
    #[error("steps must be at least 1, got {0}")]
    InvalidStepCount(i64),
    #[error("elevator controller is not running")]
    ControllerGone,
}
