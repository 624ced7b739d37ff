/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, warn};
use serde_json::json;
use std::io::{BufRead, Write};
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::controller::CarHandle;
use crate::elevator::ElevatorError;
use crate::shared::ServiceInfo;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Status,
    Request { floor: i32, direction: i32 },
    Step { steps: i64 },
    Reset,
    Info,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}', type 'help' for a list of commands")]
    UnknownCommand(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("'{0}' is not a whole number")]
    NotANumber(String),
}

pub const HELP: &str = "\
Available commands:
  status                         show the elevator state
  request <floor> <direction>    direction: 1 = up, -1 = down, 0 = from inside the car
  step [n]                       move the elevator n floors (default 1)
  reset                          back to floor 0, idle, no requests
  info                           service banner
  help                           this text
  quit                           leave the shell";

/***************************************/
/*             Public API              */
/***************************************/

/// Parses one shell line. Blank lines and `#` comments give `None`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, ParseError> {
    let mut words = line.split_whitespace();
    let keyword = match words.next() {
        Some(word) if !word.starts_with('#') => word.to_lowercase(),
        _ => return Ok(None),
    };
    let args: Vec<&str> = words.collect();

    let command = match (keyword.as_str(), args.as_slice()) {
        ("status", []) => ShellCommand::Status,
        ("request", [floor, direction]) => ShellCommand::Request {
            floor: parse_number(floor)?,
            direction: parse_number(direction)?,
        },
        ("request", _) => return Err(ParseError::Usage("request <floor> <direction>")),
        ("step", []) => ShellCommand::Step { steps: 1 },
        ("step", [steps]) => ShellCommand::Step {
            steps: parse_number(steps)?,
        },
        ("step", _) => return Err(ParseError::Usage("step [n]")),
        ("reset", []) => ShellCommand::Reset,
        ("info", []) => ShellCommand::Info,
        ("help", _) => ShellCommand::Help,
        ("quit", _) | ("exit", _) => ShellCommand::Quit,
        ("status", _) | ("reset", _) | ("info", _) => {
            return Err(ParseError::Usage("status | reset | info take no arguments"))
        }
        _ => return Err(ParseError::UnknownCommand(keyword)),
    };

    Ok(Some(command))
}

/// Runs one command against the car and renders the answer as a single line.
pub fn execute(handle: &CarHandle, command: ShellCommand) -> String {
    let reply = match command {
        ShellCommand::Status => handle.status(),
        ShellCommand::Request { floor, direction } => handle.request_floor(floor, direction),
        ShellCommand::Step { steps } => handle.step(steps),
        ShellCommand::Reset => handle.reset(),
        ShellCommand::Info => return json!(ServiceInfo::ready()).to_string(),
        ShellCommand::Help => return HELP.to_string(),
        ShellCommand::Quit => return String::new(),
    };

    match reply {
        Ok(snapshot) => json!(snapshot).to_string(),
        Err(e) => render_error(&e),
    }
}

/// Reads commands line by line until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(handle: &CarHandle, input: R, mut output: W) -> std::io::Result<()> {
    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(command)) => {
                debug!("Shell command: {:?}", command);
                writeln!(output, "{}", execute(handle, command))?;
            }
            Ok(None) => (),
            Err(e) => {
                warn!("Could not parse '{}': {}", line.trim(), e);
                writeln!(output, "{}", json!({ "status": 400, "detail": e.to_string() }))?;
            }
        }
        output.flush()?;
    }
    Ok(())
}

fn parse_number<T: std::str::FromStr>(word: &str) -> Result<T, ParseError> {
    word.parse::<T>()
        .map_err(|_| ParseError::NotANumber(word.to_string()))
}

fn render_error(error: &ElevatorError) -> String {
    let status = match error {
        ElevatorError::ControllerGone => 503,
        _ => 400,
    };
    json!({ "status": status, "detail": error.to_string() }).to_string()
}
