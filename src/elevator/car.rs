/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ElevatorConfig;
use crate::elevator::queues::RequestQueues;
use crate::elevator::scheduler::choose_target;
use crate::elevator::ElevatorError;
use crate::shared::{Call, Direction, Floor, Snapshot};

/**
 * A single elevator car advanced one discrete floor-step at a time.
 *
 * The car owns its request queues and decides on its own which floor to visit next.
 * It does no I/O and never blocks, so whoever owns it decides when time passes by
 * calling `step`.
 *
 * # Fields
 * - `id`:              Identifier reported in every snapshot.
 * - `max_floor`:       Highest floor served. The lowest one is always 0.
 * - `time_per_floor`:  Seconds needed to travel one floor. Only used for reporting.
 * - `current_floor`:   Floor the car is at.
 * - `direction`:       Direction of travel, `Idle` when the car has nothing to do.
 * - `active_target`:   Floor the car is currently driving toward.
 * - `queues`:          Pending up and down stops.
 */
#[derive(Debug, Clone)]
pub struct Car {
    id: String,
    max_floor: Floor,
    time_per_floor: f64,
    current_floor: Floor,
    direction: Direction,
    active_target: Option<Floor>,
    queues: RequestQueues,
}

impl Car {
    pub fn new(id: impl Into<String>, max_floor: Floor, time_per_floor: f64) -> Car {
        Car {
            id: id.into(),
            max_floor,
            time_per_floor,
            current_floor: 0,
            direction: Direction::Idle,
            active_target: None,
            queues: RequestQueues::new(),
        }
    }

    pub fn from_config(config: &ElevatorConfig) -> Car {
        Car::new(config.id.clone(), config.max_floor, config.time_per_floor)
    }

    pub fn status(&self) -> Snapshot {
        Snapshot {
            id: self.id.clone(),
            current_floor: self.current_floor,
            direction: self.direction,
            queue_up: self.queues.up_ascending(),
            queue_down: self.queues.down_descending(),
            active_target: self.active_target,
        }
    }

    /// Queues a stop. `direction` is 1 or -1 for a hall call and 0 for a button inside the car.
    pub fn request_floor(&mut self, floor: i32, direction: i32) -> Result<Snapshot, ElevatorError> {
        let floor = self.validate_floor(floor)?;
        let call = Call::try_from(direction)?;

        let queued = match call {
            Call::Cab => {
                if floor > self.current_floor {
                    self.queues.add_up(floor)
                } else if floor < self.current_floor {
                    self.queues.add_down(floor)
                } else {
                    false
                }
            }
            Call::HallUp => {
                if self.can_board_here(floor, Direction::Up) {
                    debug!("{}: boarding up-call at floor {} directly", self.id, floor);
                    false
                } else {
                    self.queues.add_up(floor)
                }
            }
            Call::HallDown => {
                if self.can_board_here(floor, Direction::Down) {
                    debug!("{}: boarding down-call at floor {} directly", self.id, floor);
                    false
                } else {
                    self.queues.add_down(floor)
                }
            }
        };

        match self.active_target {
            None if self.direction == Direction::Idle => self.retarget(),
            Some(target) if queued && self.is_on_the_way(floor, target) => {
                // Only stops the scheduler would pick on this sweep may cut in line
                if choose_target(&self.queues, self.current_floor, self.direction) == Some(floor) {
                    debug!("{}: floor {} is on the way to {}, stopping there first", self.id, floor, target);
                    self.active_target = Some(floor);
                }
            }
            _ => (),
        }

        Ok(self.status())
    }

    /// Advances the car by exactly `steps` single-floor moves.
    pub fn step(&mut self, steps: i64) -> Result<Snapshot, ElevatorError> {
        if steps < 1 {
            return Err(ElevatorError::InvalidStepCount(steps));
        }

        for _ in 0..steps {
            self.advance_once();
        }

        Ok(self.status())
    }

    pub fn reset(&mut self) -> Snapshot {
        info!("{}: reset to floor 0", self.id);
        self.current_floor = 0;
        self.direction = Direction::Idle;
        self.active_target = None;
        self.queues.clear();
        self.status()
    }

    /// Seconds until the car reaches its active target, if it has one.
    pub fn eta_to_target(&self) -> Option<f64> {
        self.active_target
            .map(|target| f64::from(self.current_floor.abs_diff(target)) * self.time_per_floor)
    }

    pub fn time_per_floor(&self) -> f64 {
        self.time_per_floor
    }

    pub fn max_floor(&self) -> Floor {
        self.max_floor
    }

    fn advance_once(&mut self) {
        let target = match self.active_target {
            Some(target) => target,
            None => {
                self.retarget();
                match self.active_target {
                    Some(target) => target,
                    None => return,
                }
            }
        };

        if self.current_floor < target {
            self.direction = Direction::Up;
            self.current_floor += 1;
        } else if self.current_floor > target {
            self.direction = Direction::Down;
            self.current_floor -= 1;
        }

        if self.current_floor == target {
            self.arrive(target);
        }
    }

    fn arrive(&mut self, floor: Floor) {
        self.queues.remove_floor(floor);
        info!("{}: arrived at floor {}", self.id, floor);
        self.retarget();
    }

    /// Asks the scheduler for a new target and lines the direction up with it.
    fn retarget(&mut self) {
        self.active_target = choose_target(&self.queues, self.current_floor, self.direction);

        let next_direction = match self.active_target {
            Some(target) => match Direction::between(self.current_floor, target) {
                Direction::Idle => self.direction,
                towards => towards,
            },
            None => Direction::Idle,
        };

        if next_direction != self.direction {
            debug!("{}: direction {:?} -> {:?} at floor {}", self.id, self.direction, next_direction, self.current_floor);
            self.direction = next_direction;
        }
        match self.active_target {
            Some(target) => debug!("{}: heading for floor {}", self.id, target),
            None if self.queues.is_empty() => debug!("{}: no requests left at floor {}", self.id, self.current_floor),
            None => (),
        }
    }

    fn validate_floor(&self, floor: i32) -> Result<Floor, ElevatorError> {
        if floor < 0 || floor > i32::from(self.max_floor) {
            return Err(ElevatorError::InvalidFloor { floor, max_floor: self.max_floor });
        }
        Ok(floor as Floor)
    }

    fn can_board_here(&self, floor: Floor, wanted: Direction) -> bool {
        floor == self.current_floor && (self.direction == Direction::Idle || self.direction == wanted)
    }

    fn is_on_the_way(&self, floor: Floor, target: Floor) -> bool {
        match self.direction {
            Direction::Up => self.current_floor < floor && floor < target,
            Direction::Down => target < floor && floor < self.current_floor,
            Direction::Idle => false,
        }
    }
}
