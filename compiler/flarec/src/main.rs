//! Flare CLI
//!
//! Parses ActionScript sources and reports syntax errors.

mod commands;
mod tracing_setup;

use commands::{check_paths, lex_file, parse_file, ParseFlags};

fn main() {
    tracing_setup::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "parse" => {
            let (flags, paths) = flags_or_exit(&args[2..]);
            let [path] = paths.as_slice() else {
                eprintln!(
                    "Usage: flarec parse <file> [--tree] [--force=<context>] [--max-depth=<n>]"
                );
                std::process::exit(1);
            };
            parse_file(path, &flags);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: flarec lex <file>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "check" => {
            let (flags, paths) = flags_or_exit(&args[2..]);
            if paths.is_empty() {
                eprintln!("Usage: flarec check <files or directories...> [--max-depth=<n>]");
                std::process::exit(1);
            }
            if !check_paths(&paths, &flags.options) {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("flarec {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn flags_or_exit(args: &[String]) -> (ParseFlags, Vec<&str>) {
    match ParseFlags::from_args(args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Flare ActionScript parser");
    println!();
    println!("Usage: flarec <command> [options]");
    println!();
    println!("Commands:");
    println!("  parse <file>         Parse a file and print its syntax tree");
    println!("  lex <file>           Tokenize a file and print its tokens");
    println!("  check <paths...>     Parse .as and .mxml-script files, report errors");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Parse options:");
    println!("  --tree               Full dump with spans and trivia");
    println!("  --force=<context>    Parse a fragment: type, type-allow-empty, parameter");
    println!("  --max-depth=<n>      Nesting limit (default: 100)");
    println!();
    println!("Logging is controlled by RUST_LOG, e.g. RUST_LOG=flare_parse=debug.");
    println!();
    println!("Examples:");
    println!("  flarec parse Main.as");
    println!("  flarec parse --tree --max-depth=50 Deep.as");
    println!("  flarec check src/");
}
