/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info, warn};
use std::thread::{Builder, JoinHandle};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::{Car, ElevatorError};
use crate::shared::Snapshot;

/***************************************/
/*               Enums                 */
/***************************************/
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Status,
    Request { floor: i32, direction: i32 },
    Step { steps: i64 },
    Reset,
}

pub type Reply = Result<Snapshot, ElevatorError>;

enum Event {
    NewCommand(Command, cbc::Sender<Reply>),
    Terminate,
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Owns the elevator car and serializes every operation on it.
 *
 * Commands arrive over a channel together with a reply channel, and each one runs to
 * completion before the next is looked at. The controller stops when the terminate
 * channel fires or when every `CarHandle` has been dropped.
 *
 * # Fields
 * - `car`:             The car this controller drives.
 * - `command_rx`:      Receives commands and the channel to answer them on.
 * - `terminate_rx`:    Receives the request to stop the controller.
 */
pub struct Controller {
    car: Car,
    command_rx: cbc::Receiver<(Command, cbc::Sender<Reply>)>,
    terminate_rx: cbc::Receiver<()>,
}

impl Controller {
    pub fn new(
        car: Car,
        command_rx: cbc::Receiver<(Command, cbc::Sender<Reply>)>,
        terminate_rx: cbc::Receiver<()>,
    ) -> Controller {
        Controller {
            car,
            command_rx,
            terminate_rx,
        }
    }

    pub fn run(mut self) {
        // Main loop
        loop {
            match self.wait_for_event() {
                Event::NewCommand(command, reply_tx) => {
                    let reply = self.handle_command(command);
                    if reply_tx.send(reply).is_err() {
                        warn!("Caller went away before the reply was sent");
                    }
                }
                Event::Terminate => break,
            }
        }

        info!("Controller stopped at floor {}", self.car.status().current_floor);
    }

    fn wait_for_event(&self) -> Event {
        cbc::select! {
            recv(self.command_rx) -> msg => match msg {
                Ok((command, reply_tx)) => Event::NewCommand(command, reply_tx),
                Err(_) => Event::Terminate,
            },
            recv(self.terminate_rx) -> _ => Event::Terminate,
        }
    }

    fn handle_command(&mut self, command: Command) -> Reply {
        let reply = match command {
            Command::Status => Ok(self.car.status()),
            Command::Request { floor, direction } => {
                debug!("Request for floor {} with direction {}", floor, direction);
                self.car.request_floor(floor, direction)
            }
            Command::Step { steps } => {
                debug!("Stepping {} floor(s)", steps);
                self.car.step(steps)
            }
            Command::Reset => Ok(self.car.reset()),
        };

        match &reply {
            Ok(snapshot) => {
                if let (Some(target), Some(eta)) = (snapshot.active_target, self.car.eta_to_target()) {
                    debug!("Floor {} reached in {:.1}s", target, eta);
                }
            }
            Err(e) => warn!("Rejected command: {}", e),
        }
        reply
    }
}

/// Client side of a running `Controller`. Every call blocks until the controller answers.
#[derive(Clone)]
pub struct CarHandle {
    command_tx: cbc::Sender<(Command, cbc::Sender<Reply>)>,
}

impl CarHandle {
    pub fn new(command_tx: cbc::Sender<(Command, cbc::Sender<Reply>)>) -> CarHandle {
        CarHandle { command_tx }
    }

    pub fn status(&self) -> Reply {
        self.send(Command::Status)
    }

    pub fn request_floor(&self, floor: i32, direction: i32) -> Reply {
        self.send(Command::Request { floor, direction })
    }

    pub fn step(&self, steps: i64) -> Reply {
        self.send(Command::Step { steps })
    }

    pub fn reset(&self) -> Reply {
        self.send(Command::Reset)
    }

    pub fn send(&self, command: Command) -> Reply {
        let (reply_tx, reply_rx) = cbc::bounded::<Reply>(1);
        self.command_tx
            .send((command, reply_tx))
            .map_err(|_| ElevatorError::ControllerGone)?;
        reply_rx.recv().map_err(|_| ElevatorError::ControllerGone)?
    }
}

/// Starts a controller for `car` on its own thread.
pub fn spawn(car: Car) -> std::io::Result<(CarHandle, cbc::Sender<()>, JoinHandle<()>)> {
    let (command_tx, command_rx) = cbc::unbounded::<(Command, cbc::Sender<Reply>)>();
    let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    let controller = Controller::new(car, command_rx, terminate_rx);
    let controller_thread = Builder::new()
        .name("elevator_controller".into())
        .spawn(move || controller.run())?;

    Ok((CarHandle::new(command_tx), terminate_tx, controller_thread))
}
