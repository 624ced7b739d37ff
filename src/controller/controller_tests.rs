/*
 * Unit tests for the controller module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_controller_round_trip
 *  - test_controller_forwards_errors
 *  - test_controller_shared_between_threads
 *  - test_controller_terminate
 *  - test_controller_stops_without_handles
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod controller_tests {
    use crate::controller::controller::{Command, Controller};
    use crate::controller::{spawn, CarHandle};
    use crate::elevator::{Car, ElevatorError};
    use crate::shared::Direction::{Idle, Up};
    use crossbeam_channel::unbounded;
    use std::thread::spawn as spawn_thread;

    fn setup_controller() -> (CarHandle, crossbeam_channel::Sender<()>, std::thread::JoinHandle<()>) {
        spawn(Car::new("car-1", 10, 2.0)).unwrap()
    }

    #[test]
    fn test_controller_round_trip() {
        // Purpose: Commands sent through the handle act on the car owned by the controller

        // Arrange
        let (handle, terminate_tx, controller_thread) = setup_controller();

        // Act
        let requested = handle.request_floor(3, 1).unwrap();
        let moved = handle.step(2).unwrap();
        let status = handle.status().unwrap();
        let reset = handle.reset().unwrap();

        // Assert
        assert_eq!(requested.queue_up, vec![3]);
        assert_eq!(requested.direction, Up);
        assert_eq!(moved.current_floor, 2);
        assert_eq!(status, moved);
        assert_eq!(reset.current_floor, 0);
        assert_eq!(reset.direction, Idle);

        // Cleanup
        terminate_tx.send(()).unwrap();
        controller_thread.join().unwrap();
    }

    #[test]
    fn test_controller_forwards_errors() {
        // Purpose: Validation errors come back to the caller and leave the car untouched

        // Arrange
        let (handle, terminate_tx, controller_thread) = setup_controller();

        // Act
        let bad_floor = handle.request_floor(11, 1);
        let bad_direction = handle.send(Command::Request { floor: 5, direction: 2 });
        let bad_steps = handle.step(0);

        // Assert
        assert_eq!(bad_floor, Err(ElevatorError::InvalidFloor { floor: 11, max_floor: 10 }));
        assert_eq!(bad_direction, Err(ElevatorError::InvalidDirection(2)));
        assert_eq!(bad_steps, Err(ElevatorError::InvalidStepCount(0)));
        assert_eq!(handle.status().unwrap(), Car::new("car-1", 10, 2.0).status());

        // Cleanup
        terminate_tx.send(()).unwrap();
        controller_thread.join().unwrap();
    }

    #[test]
    fn test_controller_shared_between_threads() {
        // Purpose: Requests from several threads all land in the same car

        // Arrange
        let (handle, terminate_tx, controller_thread) = setup_controller();

        // Act
        let workers: Vec<_> = (1..=4)
            .map(|floor| {
                let handle = handle.clone();
                spawn_thread(move || handle.request_floor(floor * 2, 1).unwrap())
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        // Assert
        assert_eq!(handle.status().unwrap().queue_up, vec![2, 4, 6, 8]);

        // Cleanup
        terminate_tx.send(()).unwrap();
        controller_thread.join().unwrap();
    }

    #[test]
    fn test_controller_terminate() {
        // Purpose: After terminating, handles report that the controller is gone

        // Arrange
        let (handle, terminate_tx, controller_thread) = setup_controller();

        // Act
        terminate_tx.send(()).unwrap();
        controller_thread.join().unwrap();

        // Assert
        assert_eq!(handle.status(), Err(ElevatorError::ControllerGone));
    }

    #[test]
    fn test_controller_stops_without_handles() {
        // Purpose: Dropping every sender ends the main loop

        // Arrange
        let (command_tx, command_rx) = unbounded();
        let (_terminate_tx, terminate_rx) = unbounded::<()>();
        let controller = Controller::new(Car::new("car-1", 4, 1.0), command_rx, terminate_rx);
        let controller_thread = spawn_thread(move || controller.run());
        let handle = CarHandle::new(command_tx);
        assert_eq!(handle.step(1).unwrap().current_floor, 0);

        // Act
        drop(handle);

        // Assert
        controller_thread.join().unwrap();
    }
}
