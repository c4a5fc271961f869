/// dump_prompt — print the system prompt that would be sent for a problem.
///
/// Usage:
///   cargo run --bin dump_prompt -- problems/example.txt
///
/// Nothing is sent over the network.
use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(path) = std::env::args_os().nth(1) else {
        eprintln!("usage: dump_prompt <problem-file>");
        return ExitCode::FAILURE;
    };
    match std::fs::read_to_string(&path) {
        Ok(content) => {
            print!("{}", problem_solver_lib::dispatcher::system_prompt(&content));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}: {e}", std::path::Path::new(&path).display());
            ExitCode::FAILURE
        }
    }
}
