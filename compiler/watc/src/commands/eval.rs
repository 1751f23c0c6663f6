//! The `eval` command: evaluate one expression from the command line.

use super::interpreter;

/// Evaluate `source` and print the result readably.
pub fn eval_expr(source: &str, budget: Option<u32>) {
    let mut interp = interpreter(budget);
    match interp.eval_source(source) {
        Ok(value) => println!("{}", interp.write(&value)),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
