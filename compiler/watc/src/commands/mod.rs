//! CLI commands.

mod eval;
mod run;

pub use eval::eval_expr;
pub use run::{run_files, RunOptions};

use wat_eval::{stdout_output, EvalMode, Interpreter};

/// Read a source file, exiting with a message if it cannot be read.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("error: cannot read '{path}': {err}");
            std::process::exit(1);
        }
    }
}

/// Interpreter for a CLI run. `display` always reaches stdout.
///
/// Exits with status 1 if the prelude fails to load.
pub(crate) fn interpreter(budget: Option<u32>) -> Interpreter {
    let mode = match budget {
        Some(budget) => EvalMode::Budgeted { budget },
        None => EvalMode::Interpret,
    };
    match Interpreter::builder().mode(mode).output(stdout_output()).build() {
        Ok(interp) => interp,
        Err(err) => {
            eprintln!("error: prelude failed to load: {err}");
            std::process::exit(1);
        }
    }
}

/// Parse a `--budget=N` flag value.
pub fn parse_budget(arg: &str) -> Option<Result<u32, String>> {
    arg.strip_prefix("--budget=").map(|value| {
        value
            .parse::<u32>()
            .map_err(|_| format!("invalid budget '{value}': expected a step count"))
    })
}
