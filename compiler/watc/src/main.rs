//! Wat CLI

use watc::commands::{eval_expr, parse_budget, run_files, RunOptions};

fn main() {
    watc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let mut options = RunOptions::default();
            let mut paths = Vec::new();
            for arg in args.iter().skip(2) {
                if let Some(budget) = parse_budget(arg) {
                    options.budget = Some(exit_on_error(budget));
                } else if arg == "--print" || arg == "-p" {
                    options.print_result = true;
                } else if !arg.starts_with('-') {
                    paths.push(arg.clone());
                } else {
                    eprintln!("error: unknown option '{arg}'");
                    std::process::exit(1);
                }
            }
            if paths.is_empty() {
                eprintln!("Usage: wat run <file.wat>... [--print] [--budget=N]");
                std::process::exit(1);
            }
            run_files(&paths, &options);
        }
        "eval" => {
            let mut budget = None;
            let mut source = None;
            for arg in args.iter().skip(2) {
                if let Some(parsed) = parse_budget(arg) {
                    budget = Some(exit_on_error(parsed));
                } else if source.is_none() {
                    source = Some(arg.as_str());
                }
            }
            let Some(source) = source else {
                eprintln!("Usage: wat eval <expr> [--budget=N]");
                std::process::exit(1);
            };
            eval_expr(source, budget);
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn exit_on_error<T>(result: Result<T, String>) -> T {
    match result {
        Ok(value) => value,
        Err(message) => {
            eprintln!("error: {message}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Wat - a vau-calculus Lisp with delimited continuations");
    println!();
    println!("Usage: wat <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.wat>...   Evaluate files in one environment");
    println!("  eval <expr>         Evaluate an expression and print the result");
    println!("  help                Show this message");
    println!();
    println!("Options:");
    println!("  --print, -p         (run) Print the value of the last file");
    println!("  --budget=N          Stop after N evaluation steps");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=wat_eval=debug) to enable logging.");
}
