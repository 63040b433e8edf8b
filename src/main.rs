// Tern: front end driver

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process;

use tern::config::FrontendConfig;
use tern::diagnostics::{ConsoleReporter, Reporter};
use tern::error::FrontendError;

struct Options {
    path: String,
    config: FrontendConfig,
    colored: bool,
}

fn usage(program_name: &str) -> ! {
    eprintln!("Usage: {} [--max-ident N] [--no-color] <file.tern>", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --max-ident N   Longest identifier accepted (default 255)");
    eprintln!("  --no-color      Plain diagnostics (also honours NO_COLOR)");
    process::exit(2);
}

fn parse_args(args: &[String]) -> Options {
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("tern");
    let mut config = FrontendConfig::default();
    let mut colored = std::env::var_os("NO_COLOR").is_none();
    let mut path = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--no-color" => colored = false,
            "--max-ident" => match iter.next().and_then(|n| n.parse::<usize>().ok()) {
                Some(n) if n > 0 => config = config.with_max_identifier_len(n),
                _ => {
                    eprintln!("Error: --max-ident expects a positive number");
                    usage(program_name);
                }
            },
            "-h" | "--help" => usage(program_name),
            _ if path.is_none() => path = Some(arg.clone()),
            _ => {
                eprintln!("Error: unexpected argument '{}'", arg);
                usage(program_name);
            }
        }
    }

    match path {
        Some(path) => Options {
            path,
            config,
            colored,
        },
        None => {
            eprintln!("Error: No input file provided");
            eprintln!();
            usage(program_name);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    if !Path::new(&options.path).exists() {
        eprintln!("Error: File '{}' not found", options.path);
        process::exit(1);
    }

    let file = File::open(&options.path)?;
    let mut reporter = ConsoleReporter::stderr(options.colored);

    eprintln!("Parsing {}...", options.path);
    let unit = tern::compile(BufReader::new(file), &options.config, &mut reporter)?;

    if unit.truncated {
        eprintln!("Warning: input ended inside a block comment");
    }
    eprintln!(
        "Parsed {} statements, {} imports, {} symbols.",
        unit.module.statements.len(),
        unit.module.imports.len(),
        unit.symbols.len()
    );
    eprintln!("{}", reporter.summary());

    let errors = reporter.error_count();
    if errors > 0 {
        eprintln!("Error: {}", FrontendError::Diagnostics(errors));
        process::exit(1);
    }

    Ok(())
}
