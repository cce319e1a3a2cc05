//! Print BMP files to a true-color terminal.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use log::{Level, error, info};
use zenbmpview::{Strictness, ViewOptions, show_files};

#[rustfmt::skip]
fn create_cmd_args() -> Command {
    Command::new("zenbmpview")
        .about("Print BMP images to a true-color terminal")
        .arg(Arg::new("files")
            .help("BMP files to show")
            .value_parser(value_parser!(PathBuf))
            .action(ArgAction::Append))
        .arg(Arg::new("info")
            .long("info")
            .short('i')
            .action(ArgAction::SetTrue)
            .help("Print a header summary instead of the image"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help("Reject files whose declared size doesn't match their length"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("quiet")
            .long("quiet")
            .short('q')
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Only display errors"))
}

fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("quiet") {
        Level::Error
    } else {
        Level::Warn
    };

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("could not initialize logger: {e}");
    }
    info!("Log level :{log_level}");
}

fn main() -> ExitCode {
    let options = create_cmd_args().get_matches();
    setup_logger(&options);

    let view = ViewOptions {
        info_only: options.get_flag("info"),
        strictness: if options.get_flag("strict") {
            Strictness::Strict
        } else {
            Strictness::Standard
        },
        ..Default::default()
    };
    let paths = options.get_many::<PathBuf>("files").into_iter().flatten();

    let stdout = io::stdout();
    let stderr = io::stderr();
    match show_files(&mut stdout.lock(), &mut stderr.lock(), paths, &view) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("could not report errors: {e}");
            ExitCode::FAILURE
        }
    }
}
