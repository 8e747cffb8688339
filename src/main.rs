mod debug_report;

use numspell::{Lexicon, spell_verbose_with, spell_with};
use std::io::{self, IsTerminal, Read};

const TRACE_ENV: &str = "NUMSPELL_TRACE";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if config.trace {
        tracing_subscriber::fmt().with_max_level(tracing::Level::TRACE).with_writer(io::stderr).init();
    }

    let lexicon = Lexicon::tigrinya();
    let input = config.input.trim();

    let outcome = if config.verbose {
        spell_verbose_with(input, lexicon).map(|res| debug_report::print_run(&res, lexicon, config.color))
    } else {
        spell_with(input, lexicon).map(|text| println!("{text}"))
    };

    if let Err(err) = outcome {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

struct CliConfig {
    input: String,
    verbose: bool,
    color: bool,
    trace: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut trace = std::env::var_os(TRACE_ENV).is_some();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("numspell {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--trace" => trace = true,
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                set_input(&mut input, value.to_string())?;
            }
            // Negative numbers look like options; anything numeric is input.
            _ if arg.starts_with('-') && !looks_numeric(&arg) => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => set_input(&mut input, arg)?,
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, verbose, color, trace })
}

fn set_input(slot: &mut Option<String>, value: String) -> Result<(), String> {
    if slot.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *slot = Some(value);
    Ok(())
}

fn looks_numeric(arg: &str) -> bool {
    arg[1..].starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "numspell {version}

Spell a number out as words (built-in lexicon: Tigrinya).

Usage:
  numspell [OPTIONS] [--] <number>
  numspell [OPTIONS] --input <number>

Options:
  -i, --input <number>       Number to spell. If omitted, reads the first
                             argument or stdin when no args are provided.
  -v, --verbose              Print a report of the decomposition steps.
  --color                    Force ANSI color output (with --verbose).
  --no-color                 Disable ANSI color output.
  --trace                    Log spelling events to stderr
                             (also enabled by {trace_env}).
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  The number could not be spelled.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        trace_env = TRACE_ENV
    )
}
