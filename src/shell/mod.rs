pub mod shell;
pub mod shell_tests;

pub use shell::run;
