/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::ElevatorError;

/***************************************/
/*       Public data structures        */
/***************************************/
pub type Floor = u8;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(into = "i8", try_from = "i8")]
pub enum Direction {
    Up,
    Down,
    Idle,
}

impl Direction {
    pub fn to_i8(&self) -> i8 {
        match *self {
            Direction::Up => 1,
            Direction::Down => -1,
            Direction::Idle => 0,
        }
    }

    /// Direction the car has to travel to get from `from` to `to`.
    pub fn between(from: Floor, to: Floor) -> Direction {
        if to > from {
            Direction::Up
        } else if to < from {
            Direction::Down
        } else {
            Direction::Idle
        }
    }
}

impl From<Direction> for i8 {
    fn from(item: Direction) -> Self {
        item.to_i8()
    }
}

impl TryFrom<i8> for Direction {
    type Error = ElevatorError;

    fn try_from(item: i8) -> Result<Self, Self::Error> {
        match item {
            1 => Ok(Direction::Up),
            -1 => Ok(Direction::Down),
            0 => Ok(Direction::Idle),
            other => Err(ElevatorError::InvalidDirection(other as i32)),
        }
    }
}

/// Origin of a stop request: a button inside the car or a hall button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Cab,
    HallUp,
    HallDown,
}

impl TryFrom<i32> for Call {
    type Error = ElevatorError;

    fn try_from(item: i32) -> Result<Self, Self::Error> {
        match item {
            0 => Ok(Call::Cab),
            1 => Ok(Call::HallUp),
            -1 => Ok(Call::HallDown),
            other => Err(ElevatorError::InvalidDirection(other)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub id: String,
    #[serde(rename = "currentFloor")]
    pub current_floor: Floor,
    pub direction: Direction,
    #[serde(rename = "queueUp")]
    pub queue_up: Vec<Floor>,
    #[serde(rename = "queueDown")]
    pub queue_down: Vec<Floor>,
    #[serde(rename = "activeTarget")]
    pub active_target: Option<Floor>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceInfo {
    pub service: String,
    pub status: String,
}

impl ServiceInfo {
    pub fn ready() -> ServiceInfo {
        ServiceInfo {
            service: "elevator".to_string(),
            status: "ready".to_string(),
        }
    }
}
