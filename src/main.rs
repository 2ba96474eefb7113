/*!

`prover <filename>`: reads a script from `filename`, runs it through the
parser and driver, and writes proof transcripts to standard output. Parse
and runtime errors go to standard error and exit the process non-zero; a
proof failing under the configured bounds is not an error — it is reported
on stdout like any other obligation, and the driver proceeds to the next
command.

*/

use std::env;
use std::fs;
use std::process::ExitCode;

use boolprover::core::driver::Driver;
use boolprover::parser::parse_script;

fn main() -> ExitCode {
  let mut args = env::args().skip(1);
  let mut verbosity: u8 = 3;
  let mut filename: Option<String> = None;

  for arg in &mut args {
    match arg.as_str() {
      "-v" | "--verbose" => verbosity = verbosity.saturating_add(1),
      _ => {
        filename = Some(arg);
        break;
      }
    }
  }

  let Some(filename) = filename else {
    eprintln!("usage: prover [-v] <filename>");
    return ExitCode::FAILURE;
  };

  boolprover::abstractions::log::set_global_logging_threshold(verbosity);

  let source = match fs::read_to_string(&filename) {
    Ok(source) => source,
    Err(io_error) => {
      eprintln!("error: could not read '{}': {}", filename, io_error);
      return ExitCode::FAILURE;
    }
  };

  let commands = match parse_script(&source) {
    Ok(commands) => commands,
    Err(parse_error) => {
      eprintln!("{}", parse_error);
      return ExitCode::FAILURE;
    }
  };

  let result = std::panic::catch_unwind(|| {
    let mut driver = Driver::new();
    driver.run_script(commands)
  });

  match result {
    Ok(transcripts) => {
      for transcript in transcripts {
        println!("{}", transcript);
      }
      ExitCode::SUCCESS
    }
    Err(panic_payload) => {
      let message = panic_payload
          .downcast_ref::<&str>()
          .map(|s| s.to_string())
          .or_else(|| panic_payload.downcast_ref::<String>().cloned())
          .unwrap_or_else(|| "unreachable branch in the core".to_string());
      eprintln!("internal error: {}", message);
      ExitCode::FAILURE
    }
  }
}
