/* 3rd party libraries */
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

/* Custom libraries */
use config::ElevatorConfig;
use elevator::Car;

/* Modules */
mod config;
mod controller;
mod elevator;
mod shared;
mod shell;

/// Single-car elevator dispatcher driven one floor-step at a time.
#[derive(Parser, Debug)]
#[clap(name = "elevator-dispatch", version)]
struct Args {
    /// Path to the configuration file
    #[clap(long, default_value = "config.toml")]
    config: PathBuf,

    /// Overrides the car id from the configuration file
    #[clap(long)]
    id: Option<String>,

    /// Overrides the highest floor served
    #[clap(long)]
    max_floor: Option<u8>,

    /// Overrides the travel time per floor, in seconds
    #[clap(long)]
    time_per_floor: Option<f64>,

    /// Reads commands from this file instead of stdin
    #[clap(long)]
    script: Option<PathBuf>,

    /// Default log filter, RUST_LOG takes precedence
    #[clap(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn apply_overrides(&self, mut config: ElevatorConfig) -> ElevatorConfig {
        if let Some(id) = &self.id {
            config.id = id.clone();
        }
        if let Some(max_floor) = self.max_floor {
            config.max_floor = max_floor;
        }
        if let Some(time_per_floor) = self.time_per_floor {
            config.time_per_floor = time_per_floor;
        }
        config
    }
}

/* Main */
fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout is reserved for command output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level.as_str())).init();

    // Load the configuration
    let config = unwrap_or_exit!(config::load_config(&args.config), "Failed to load configuration");
    let elevator_config = args.apply_overrides(config.elevator);

    // Start the controller owning the car
    let car = Car::from_config(&elevator_config);
    info!(
        "Starting {} serving floors 0 to {}, {}s per floor",
        elevator_config.id,
        car.max_floor(),
        car.time_per_floor()
    );
    let (handle, terminate_tx, controller_thread) =
        unwrap_or_exit!(controller::spawn(car), "Failed to start the elevator controller");

    // Run the shell until input ends
    match &args.script {
        Some(path) => {
            let script = unwrap_or_exit!(File::open(path), format!("Failed to open {}", path.display()));
            shell::run(&handle, BufReader::new(script), io::stdout())?;
        }
        None => shell::run(&handle, io::stdin().lock(), io::stdout())?,
    }

    // Shut down
    let _ = terminate_tx.send(());
    if controller_thread.join().is_err() {
        log::error!("Elevator controller panicked");
    }

    Ok(())
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod main_tests {
    use super::*;

    #[test]
    fn test_overrides_replace_file_values() {
        // Purpose: Command line flags win over the configuration file

        // Arrange
        let args = Args::parse_from(["elevator-dispatch", "--id", "car-9", "--max-floor", "30"]);

        // Act
        let config = args.apply_overrides(ElevatorConfig::default());

        // Assert
        assert_eq!(config.id, "car-9");
        assert_eq!(config.max_floor, 30);
        assert_eq!(config.time_per_floor, 2.0);
        assert_eq!(args.config, PathBuf::from("config.toml"));
        assert_eq!(args.log_level, "info");
    }
}
