use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use quill_frontend::{error::AppError, settings::Settings};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Application error: {0}")]
    App(#[from] AppError),
    #[error("Initialization error")]
    Initialization,
}

fn main() {
    let logpath = match get_logging_path() {
        Ok(it) => it,
        Err(_) => return,
    };

    let logfile = tracing_appender::rolling::daily(logpath, "log");
    tracing_subscriber::fmt()
        .compact()
        .with_writer(logfile)
        .init();

    debug!("starting application");

    let mut settings = Settings::default();
    map_args_to_settings(&cli().get_matches(), &mut settings);

    match quill_frontend::run(settings).map_err(Error::from) {
        Ok(()) => {
            debug!("closing application");
        }
        Err(err) => {
            error!("closing application with error: {:?}", err);
            eprintln!("{}", err);
        }
    }
}

fn cli() -> Command {
    Command::new("quill")
        .about("quill - a small terminal text editor")
        .args([
            // NOTE: arguments
            Arg::new("path")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf))
                .help("file to open on startup, created on first save if missing"),
            // NOTE: options
            Arg::new("tab-size")
                .long("tab-size")
                .action(ArgAction::Set)
                .value_parser(value_parser!(usize))
                .default_value("4")
                .help("number of cells a tab expands to"),
        ])
}

fn map_args_to_settings(args: &ArgMatches, settings: &mut Settings) {
    settings.startup_path = args.get_one("path").cloned();
    if let Some(tab_size) = args.get_one::<usize>("tab-size") {
        settings.window.tab_size = *tab_size;
    }
}

fn get_logging_path() -> Result<PathBuf, Error> {
    match dirs::cache_dir() {
        Some(cache_dir) => Ok(cache_dir.join("quill").join("logs")),
        None => Err(Error::Initialization),
    }
}
