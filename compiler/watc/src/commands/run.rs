//! The `run` command: evaluate Wat source files in one interpreter.

use tracing::debug;

use super::{interpreter, read_file};

#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Step budget; `None` runs unbounded.
    pub budget: Option<u32>,
    /// Print the value of the last file.
    pub print_result: bool,
}

/// Evaluate `paths` in order, sharing one root environment.
///
/// Exits with status 1 on the first read or evaluation error.
pub fn run_files(paths: &[String], options: &RunOptions) {
    let mut interp = interpreter(options.budget);
    let mut last = None;
    for path in paths {
        let source = read_file(path);
        debug!(%path, bytes = source.len(), "running file");
        match interp.eval_source(&source) {
            Ok(value) => last = Some(value),
            Err(err) => {
                eprintln!("error: {path}: {err}");
                std::process::exit(1);
            }
        }
    }
    if options.print_result {
        if let Some(value) = last {
            println!("{}", interp.write(&value));
        }
    }
}
