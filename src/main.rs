mod debug_report;

use clap::Parser;
use crowdinput::{BareParser, InputParser, ParserConfig};
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = r#"
max_set_length = 2
max_sequence_length = 4
buttons = ["a", "b", "x", "y", "l", "r", "start", "select", "wait"]
dpad = ""
conflicts = [["start", "select"]]

[touchscreen]
width = 240
height = 160
allow_drag = true
"#;

/// Parse chat messages into input sequences.
#[derive(Debug, Parser)]
#[command(name = "crowdinput", version, about)]
struct Cli {
    /// Parser configuration (TOML). Defaults to a small handheld layout.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Force ANSI color output.
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long)]
    no_color: bool,

    /// Print the token trace, set spans and timing for every message.
    #[arg(short, long)]
    verbose: bool,

    /// Messages to parse. Reads one message per line from stdin if omitted.
    input: Vec<String>,
}

struct Parsers {
    stack: Box<dyn InputParser>,
    bare: BareParser,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let parsers = match load_parsers(cli.config.as_ref()) {
        Ok(parsers) => parsers,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };
    let color = if cli.color {
        true
    } else if cli.no_color {
        false
    } else {
        io::stdout().is_terminal()
    };

    if !cli.input.is_empty() {
        for text in &cli.input {
            run(&parsers, text, cli.verbose, color);
        }
        return;
    }
    for line in io::stdin().lock().lines() {
        match line {
            Ok(text) => run(&parsers, text.trim_end(), cli.verbose, color),
            Err(err) => {
                eprintln!("error: failed to read stdin: {err}");
                std::process::exit(1);
            }
        }
    }
}

fn load_parsers(path: Option<&PathBuf>) -> Result<Parsers, crowdinput::ConfigError> {
    let config = match path {
        Some(path) => ParserConfig::from_path(path)?,
        None => ParserConfig::from_toml_str(DEFAULT_CONFIG)?,
    };
    let bare = config.clone().into_builder()?.build_bare()?;
    let stack = config.build()?;
    Ok(Parsers { stack, bare })
}

fn run(parsers: &Parsers, text: &str, verbose: bool, color: bool) {
    let outcome = parsers.stack.parse(text);
    if verbose {
        let details = parsers.bare.parse_verbose(text);
        debug_report::print_run(&details, outcome.as_ref(), color);
    } else {
        debug_report::print_outcome(text, outcome.as_ref(), color);
    }
}
