pub mod car;
pub mod error;
pub mod queues;
pub mod scheduler;


pub use car::Car;
pub use error::ElevatorError;
