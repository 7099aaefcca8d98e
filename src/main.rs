use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use transcript::language::{self, Expect};
use transcript::matching::{self, unescape, Markers, MatchingError, Recognizers};
use transcript::problem;
use transcript::testing::strip_ansi;

#[derive(Serialize)]
struct Report<'a> {
    status: &'static str,
    tokens: &'a [Expect],
    #[serde(skip_serializing_if = "Option::is_none")]
    problem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<usize>,
}

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("transcript")
        .version(VERSION)
        .propagate_version(true)
        .about("Check captured HTTP transcripts against an expected sequence of tokens.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("check")
                .about("Match the given transcript against a sequence of tokens")
                .arg(
                    Arg::new("expect")
                        .short('e')
                        .long("expect")
                        .required(true)
                        .value_name("TOKENS")
                        .help("Comma separated token names, or the name of a predefined sequence. Run 'transcript tokens' to list them."),
                )
                .arg(
                    Arg::new("separator")
                        .long("separator")
                        .value_name("TEXT")
                        .help("The literal printed between messages. Backslash escapes \\n, \\r, \\t are recognized. [default: \\n\\n]"),
                )
                .arg(
                    Arg::new("line-ending")
                        .long("line-ending")
                        .value_name("TEXT")
                        .help("The line ending used in start and header lines. [default: \\r\\n]"),
                )
                .arg(
                    Arg::new("strip-ansi")
                        .long("strip-ansi")
                        .action(ArgAction::SetTrue)
                        .help("Remove ANSI colour codes from the transcript before matching."),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Report the outcome as JSON on standard output."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the captured transcript, or '-' to read standard input."),
                ),
        )
        .subcommand(
            Command::new("tokens").about("List the token kinds and the predefined sequences"),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let code = run_check(submatches);
            std::process::exit(code);
        }
        Some(("tokens", _)) => {
            list_tokens();
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: transcript [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn run_check(submatches: &ArgMatches) -> i32 {
    let filename = submatches
        .get_one::<String>("filename")
        .map(String::as_str)
        .unwrap_or("-");
    let filename = Path::new(filename);

    let expected = submatches
        .get_one::<String>("expect")
        .map(String::as_str)
        .unwrap_or("");

    let tokens = match language::lookup(expected) {
        Some(tokens) => tokens.to_vec(),
        None => match language::parse_sequence(expected) {
            Ok(tokens) => tokens,
            Err(error) => {
                eprintln!("{}: {}", "error".bright_red(), error);
                return 2;
            }
        },
    };
    debug!(?tokens);

    let defaults = Markers::default();
    let markers = Markers::new(
        submatches
            .get_one::<String>("separator")
            .map(|text| unescape(text))
            .unwrap_or(defaults.separator),
        submatches
            .get_one::<String>("line-ending")
            .map(|text| unescape(text))
            .unwrap_or(defaults.line_ending),
    );

    let recognizers = match Recognizers::new(&markers) {
        Ok(recognizers) => recognizers,
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            return 2;
        }
    };

    info!("Checking transcript: {}", filename.display());

    let content = match matching::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            return 2;
        }
    };

    let content = if submatches.get_flag("strip-ansi") {
        strip_ansi(&content).into_owned()
    } else {
        content
    };

    let result = matching::check(&recognizers, &tokens, &content);

    if submatches.get_flag("json") {
        let report = make_report(&tokens, &content, &result);
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(error) => {
                eprintln!("{}: {}", "error".bright_red(), error);
                return 2;
            }
        }
    } else {
        match &result {
            Ok(()) => println!(
                "{}: {} matched {}",
                "ok".bright_green(),
                filename.to_string_lossy(),
                language::describe(&tokens)
            ),
            Err(error) => eprintln!(
                "{}",
                problem::full_matching_error(error, filename, &content)
            ),
        }
    }

    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

fn make_report<'a>(
    tokens: &'a [Expect],
    content: &str,
    result: &Result<(), MatchingError>,
) -> Report<'a> {
    match result {
        Ok(()) => Report {
            status: "ok",
            tokens,
            problem: None,
            offset: None,
            line: None,
            column: None,
        },
        Err(error) => {
            let offset = error.offset();
            let position = problem::calculate_position(content, offset);
            Report {
                status: "failed",
                tokens,
                problem: Some(error.to_string()),
                offset: Some(offset),
                line: Some(position.line + 1),
                column: Some(position.column + 1),
            }
        }
    }
}

fn list_tokens() {
    println!("{}", "Tokens".bold());
    for kind in Expect::ALL {
        println!("    {}", kind);
    }

    println!();
    println!("{}", "Sequences".bold());
    for (name, tokens) in language::SEQUENCES {
        println!("    {:20} {}", name, language::describe(tokens));
    }
}
