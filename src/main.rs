mod report;

use numread::{Country, Language, Options, recognize_verbose};
use std::io::{self, IsTerminal, Read};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "NUMREAD_LOG";

fn main() {
    init_tracing();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let start = Instant::now();
    match recognize_verbose(&config.input, &config.options) {
        Ok(res) => report::print_run(&res, config.color, config.verbose),
        Err(err) => {
            report::print_error(&config.input, &err, start.elapsed(), config.color);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

struct CliConfig {
    input: String,
    options: Options,
    color: bool,
    verbose: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut options = Options::default();
    let mut color = io::stdout().is_terminal();
    let mut verbose = false;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("numread {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "-v" | "--verbose" => verbose = true,
            "--language" | "-l" => {
                let value = args.next().ok_or_else(|| "error: --language expects a value".to_string())?;
                options.language = parse_language(&value)?;
            }
            "--country" | "-c" => {
                let value = args.next().ok_or_else(|| "error: --country expects a value".to_string())?;
                options.country = Some(parse_country(&value)?);
            }
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
            _ if arg.starts_with("--language=") => {
                options.language = parse_language(arg.trim_start_matches("--language="))?;
            }
            _ if arg.starts_with("--country=") => {
                options.country = Some(parse_country(arg.trim_start_matches("--country="))?);
            }
            _ if arg.starts_with("--input=") => {
                set_input(&mut input, arg.trim_start_matches("--input=").to_string())?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, options, color, verbose })
}

fn set_input(slot: &mut Option<String>, value: String) -> Result<(), String> {
    if slot.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *slot = Some(value);
    Ok(())
}

fn parse_language(value: &str) -> Result<Language, String> {
    value.parse::<Language>().map_err(|err| format!("error: {err}"))
}

fn parse_country(value: &str) -> Result<Country, String> {
    value.parse::<Country>().map_err(|err| format!("error: {err}"))
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
        "numread {version}

Enumerate every digit-string a listener could hear from dictated digit groups.

Usage:
  numread [OPTIONS] [--] <groups...>
  numread [OPTIONS] --input <text>

Example:
  numread --country greece 2 10 6 9 30 6 6 4

Options:
  -i, --input <text>         Digit groups separated by single spaces. If omitted,
                             reads remaining args or stdin when no args are provided.
  -l, --language <name>      english | greek | russian. Default: english
  -c, --country <name>       usa | greece | russia. Validate each interpretation
                             as a phone number for that country.
  -v, --verbose              Show per-group candidates and phase timings.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}                 tracing filter, e.g. numread=debug. Default: warn

Exit codes:
  0  Success.
  1  Input rejected or recognition failed.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = LOG_ENV,
    )
}
