/*
 * Unit tests for the command shell
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_parse_commands
 * - test_parse_errors
 * - test_run_session
 * - test_info_and_help
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod shell_tests {
    use crate::controller::{spawn, CarHandle};
    use crate::elevator::Car;
    use crate::shell::shell::{execute, parse_line, run, ParseError, ShellCommand, HELP};
    use serde_json::{json, Value};
    use std::io::Cursor;

    fn setup_handle() -> (CarHandle, crossbeam_channel::Sender<()>, std::thread::JoinHandle<()>) {
        spawn(Car::new("car-1", 10, 2.0)).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        // Purpose: Every command word maps to its command, with step defaulting to one floor

        // Act & Assert
        assert_eq!(parse_line("status"), Ok(Some(ShellCommand::Status)));
        assert_eq!(
            parse_line("  request 7 -1 "),
            Ok(Some(ShellCommand::Request { floor: 7, direction: -1 }))
        );
        assert_eq!(parse_line("step"), Ok(Some(ShellCommand::Step { steps: 1 })));
        assert_eq!(parse_line("STEP 4"), Ok(Some(ShellCommand::Step { steps: 4 })));
        assert_eq!(parse_line("reset"), Ok(Some(ShellCommand::Reset)));
        assert_eq!(parse_line("info"), Ok(Some(ShellCommand::Info)));
        assert_eq!(parse_line("help"), Ok(Some(ShellCommand::Help)));
        assert_eq!(parse_line("exit"), Ok(Some(ShellCommand::Quit)));
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("# comment"), Ok(None));
    }

    #[test]
    fn test_parse_errors() {
        // Purpose: Malformed lines are rejected before they reach the car

        // Act & Assert
        assert_eq!(parse_line("fly 3"), Err(ParseError::UnknownCommand("fly".to_string())));
        assert_eq!(parse_line("request 3"), Err(ParseError::Usage("request <floor> <direction>")));
        assert_eq!(parse_line("step 1 2"), Err(ParseError::Usage("step [n]")));
        assert_eq!(parse_line("request three 1"), Err(ParseError::NotANumber("three".to_string())));
        assert!(parse_line("reset now").is_err());
    }

    #[test]
    fn test_run_session() {
        // Purpose: A scripted session prints one JSON line per command and stops at quit

        // Arrange
        let (handle, terminate_tx, controller_thread) = setup_handle();
        let script = "request 5 1\nstep 5\n\nrequest 11 1\nstep 0\nbogus\nquit\nstatus\n";
        let mut output = Vec::new();

        // Act
        run(&handle, Cursor::new(script), &mut output).unwrap();

        // Assert
        let lines: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0]["queueUp"], json!([5]));
        assert_eq!(lines[0]["activeTarget"], json!(5));
        assert_eq!(lines[1]["currentFloor"], json!(5));
        assert_eq!(lines[1]["direction"], json!(0));
        assert_eq!(lines[2]["status"], json!(400));
        assert!(lines[2]["detail"].as_str().unwrap().contains("out of range"));
        assert_eq!(lines[3]["detail"], json!("steps must be at least 1, got 0"));
        assert_eq!(lines[4]["status"], json!(400));

        // Cleanup
        terminate_tx.send(()).unwrap();
        controller_thread.join().unwrap();
    }

    #[test]
    fn test_info_and_help() {
        // Purpose: The banner and help text need no round trip to the car

        // Arrange
        let (handle, terminate_tx, controller_thread) = setup_handle();
        terminate_tx.send(()).unwrap();
        controller_thread.join().unwrap();

        // Act
        let info = execute(&handle, ShellCommand::Info);
        let help = execute(&handle, ShellCommand::Help);
        let gone = execute(&handle, ShellCommand::Status);

        // Assert
        assert_eq!(
            serde_json::from_str::<Value>(&info).unwrap(),
            json!({ "service": "elevator", "status": "ready" })
        );
        assert_eq!(help, HELP);
        assert_eq!(serde_json::from_str::<Value>(&gone).unwrap()["status"], json!(503));
    }
}
