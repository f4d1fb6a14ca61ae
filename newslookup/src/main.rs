//! # newslookup
//!
//! A CLI and small web service for looking up microfilmed newspaper holdings.
//!
//! ## Overview
//!
//! newslookup is built on top of newslookuplib. It collects the five lookup
//! fields from flags (or from an HTTP request when serving), runs the lookup
//! against a SQLite catalog, and prints the holdings grouped by state.
//!
//! ## Usage
//!
//! ```bash
//! # Holdings covering 1900
//! newslookup --choice 1 --year 1900
//!
//! # Holdings for California, as HTML
//! newslookup --choice 2 --state ca --html
//!
//! # Holdings in any state overlapping 1850-1860
//! newslookup --choice 3 --state "all states" --begin 1850 --end 1860
//!
//! # Use another database and template
//! newslookup --db /srv/news.sqlite --template page.html --choice 2 --state ny
//!
//! # Serve the HTML lookup over HTTP
//! newslookup serve --port 8080
//! ```

mod logging;
mod render;
mod server;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use newslookuplib::{plan, Catalog, CatalogOptions, LookupRequest, DEFAULT_DATABASE};

use crate::render::{format_from_flags, render_lookup};

/// Lookup fields plus output selection, shared by the root command and `lookup`
fn lookup_args() -> Vec<Arg> {
    vec![
        Arg::new("choice")
            .long("choice")
            .default_value("")
            .hide_default_value(true)
            .help("Lookup mode: 1 = year, 2 = state, 3 = state/year range"),
        Arg::new("state")
            .long("state")
            .default_value("")
            .hide_default_value(true)
            .help("State name or abbreviation (choice 2 or 3; \"all states\" for 3)"),
        Arg::new("year")
            .long("year")
            .default_value("")
            .hide_default_value(true)
            .help("Year (choice 1)"),
        Arg::new("begin")
            .long("begin")
            .default_value("")
            .hide_default_value(true)
            .help("Beginning of year range (choice 3)"),
        Arg::new("end")
            .long("end")
            .default_value("")
            .hide_default_value(true)
            .help("End of year range (choice 3)"),
        Arg::new("html")
            .long("html")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Output HTML instead of text"),
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Output JSON instead of text"),
    ]
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("newslookup")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Look up microfilm newspaper holdings by year, state, or state and year range")
        .arg(
            Arg::new("db")
                .long("db")
                .env("NEWSLOOKUP_DB")
                .default_value(DEFAULT_DATABASE)
                .global(true)
                .help("SQLite catalog database"),
        )
        .arg(
            Arg::new("template")
                .long("template")
                .env("NEWSLOOKUP_TEMPLATE")
                .global(true)
                .help("HTML template file (defaults to the built-in page)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Enable debug logging"),
        )
        .args(lookup_args())
        .subcommand(
            Command::new("lookup")
                .about("Look up holdings (default command)")
                .args(lookup_args()),
        )
        .subcommand(
            Command::new("serve")
                .about("Serve HTML lookups over HTTP")
                .arg(
                    Arg::new("host")
                        .long("host")
                        .env("NEWSLOOKUP_HOST")
                        .default_value("127.0.0.1")
                        .help("Address to bind"),
                )
                .arg(
                    Arg::new("port")
                        .short('p')
                        .long("port")
                        .env("NEWSLOOKUP_PORT")
                        .value_parser(value_parser!(u16))
                        .default_value("8080")
                        .help("Port to listen on"),
                ),
        )
}

fn string_arg(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

/// Build the lookup request from matches
fn extract_request(matches: &ArgMatches) -> LookupRequest {
    LookupRequest::new()
        .mode(string_arg(matches, "choice"))
        .state(string_arg(matches, "state"))
        .year(string_arg(matches, "year"))
        .range(string_arg(matches, "begin"), string_arg(matches, "end"))
}

/// Build catalog options from matches
fn extract_options(matches: &ArgMatches) -> CatalogOptions {
    let mut options = CatalogOptions::new().database(string_arg(matches, "db"));
    if let Some(template) = matches.get_one::<String>("template") {
        options = options.template(template);
    }
    options
}

/// Handler for the lookup command
fn lookup_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let request = extract_request(matches);
    let format = format_from_flags(matches.get_flag("html"), matches.get_flag("json"));

    // Reject bad requests before touching the database
    plan(&request)?;

    let catalog = Catalog::open(&extract_options(matches))?;
    Ok(render_lookup(&catalog, &request, format)?)
}

/// Handler for the serve command
fn serve_handler(matches: &ArgMatches) -> anyhow::Result<()> {
    let catalog = Arc::new(Catalog::open(&extract_options(matches))?);
    let host = string_arg(matches, "host");
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);
    let addr = format!("{host}:{port}");

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(server::serve(catalog, &addr))
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("serve", sub)) => {
            logging::initialize_logging(sub.get_flag("verbose"), true)?;
            serve_handler(sub)
        }
        Some(("lookup", sub)) => {
            logging::initialize_logging(sub.get_flag("verbose"), false)?;
            print!("{}", lookup_handler(sub)?);
            Ok(())
        }
        _ => {
            // No subcommand - treat as lookup
            logging::initialize_logging(matches.get_flag("verbose"), false)?;
            print!("{}", lookup_handler(matches)?);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
