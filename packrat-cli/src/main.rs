//! Command-line interface for packrat grammars
//! This binary compiles a grammar description, optionally verifies it, and
//! parses input text from a chosen start symbol.
//!
//! Usage:
//!   packrat `<grammar>` --start `<symbol>` --input `<text>`  - Parse text and print the tree
//!   packrat `<grammar>` --verify                             - Print the verifier report
//!   packrat --builtin json --start value --input '[1, 2]'    - Use a bundled grammar

use clap::{Arg, ArgAction, Command};
use packrat_parser::peg::grammars::{ARITHMETIC, JSON};
use packrat_parser::peg::{parse, verify, Grammar};
use std::io::Read;

fn main() {
    let matches = Command::new("packrat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile, verify, and run declarative grammars")
        .arg_required_else_help(true)
        .arg(
            Arg::new("grammar")
                .help("Path to the grammar description file")
                .required_unless_present("builtin")
                .index(1),
        )
        .arg(
            Arg::new("builtin")
                .long("builtin")
                .short('b')
                .help("Use a bundled grammar ('arithmetic' or 'json') instead of a file"),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .short('s')
                .help("Start symbol to parse from")
                .required_unless_present("verify"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("Input text to parse (stdin when neither --input nor --input-file is given)"),
        )
        .arg(
            Arg::new("input-file")
                .long("input-file")
                .help("Read the input text from a file"),
        )
        .arg(
            Arg::new("whitespace")
                .long("whitespace")
                .short('w')
                .help("Whitespace-skip pattern for file grammars")
                .default_value(r"\s*"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: json, json-pretty, or tree")
                .default_value("json"),
        )
        .arg(
            Arg::new("verify")
                .long("verify")
                .action(ArgAction::SetTrue)
                .help("Print the verifier report instead of parsing"),
        )
        .arg(
            Arg::new("require-full")
                .long("require-full")
                .action(ArgAction::SetTrue)
                .help("Fail unless the whole input is consumed"),
        )
        .get_matches();

    let grammar = load_grammar(&matches);

    if matches.get_flag("verify") {
        println!("{}", verify(&grammar));
        return;
    }

    let start = matches
        .get_one::<String>("start")
        .expect("start is required unless verifying");
    let input = read_input(&matches);

    let outcome = parse(start, &input, &grammar).unwrap_or_else(|e| {
        eprintln!("Parse error: {}", e);
        std::process::exit(1);
    });

    let matched = outcome.unwrap_or_else(|| {
        eprintln!("No parse: `{}` does not match the input", start);
        std::process::exit(2);
    });

    if matches.get_flag("require-full") && !matched.remainder.is_empty() {
        eprintln!("Unconsumed input: {:?}", matched.remainder);
        std::process::exit(2);
    }

    let format = matches.get_one::<String>("format").unwrap();
    let formatted = match format.as_str() {
        "json" => {
            let tree = serde_json::to_string(&matched.tree).unwrap_or_else(|e| {
                eprintln!("Error formatting tree: {}", e);
                std::process::exit(1);
            });
            format!("{}\n", tree)
        }
        "json-pretty" => {
            let tree = serde_json::to_string_pretty(&matched.tree).unwrap_or_else(|e| {
                eprintln!("Error formatting tree: {}", e);
                std::process::exit(1);
            });
            format!("{}\n", tree)
        }
        "tree" => matched.tree.render(),
        other => {
            eprintln!("Format '{}' not supported", other);
            eprintln!("Available formats: json, json-pretty, tree");
            std::process::exit(1);
        }
    };
    print!("{}", formatted);

    if !matched.remainder.is_empty() {
        eprintln!("note: unconsumed input: {:?}", matched.remainder);
    }
}

/// Resolve the grammar: a bundled one by name, or a compiled description file.
fn load_grammar(matches: &clap::ArgMatches) -> Grammar {
    if let Some(name) = matches.get_one::<String>("builtin") {
        return match name.as_str() {
            "arithmetic" => ARITHMETIC.clone(),
            "json" => JSON.clone(),
            other => {
                eprintln!("Unknown builtin grammar '{}'", other);
                eprintln!("Available builtins: arithmetic, json");
                std::process::exit(1);
            }
        };
    }

    let path = matches
        .get_one::<String>("grammar")
        .expect("grammar path is required unless a builtin is chosen");
    let description = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Cannot read {}: {}", path, e);
        std::process::exit(1);
    });
    let whitespace = matches.get_one::<String>("whitespace").unwrap();
    Grammar::compile(&description, whitespace).unwrap_or_else(|e| {
        eprintln!("Grammar error: {}", e);
        std::process::exit(1);
    })
}

fn read_input(matches: &clap::ArgMatches) -> String {
    if let Some(text) = matches.get_one::<String>("input") {
        return text.clone();
    }
    if let Some(path) = matches.get_one::<String>("input-file") {
        return std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Cannot read {}: {}", path, e);
            std::process::exit(1);
        });
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .unwrap_or_else(|e| {
            eprintln!("Cannot read stdin: {}", e);
            std::process::exit(1);
        });
    buffer
}
