pub mod controller;
pub mod controller_tests;

pub use controller::spawn;
pub use controller::CarHandle;
