use clap::Parser;
use colored::Colorize;
use std::io;
use std::process::ExitCode;
use subnet_calc::cli::{usage_error, Cli};
use subnet_calc::{logging, run, CalcError};

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = logging::init() {
        eprintln!("{} {e}", "warning:".yellow());
    }
    log::info!("#Start main()");

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match usage_error(&e) {
            Some(err) => return report(err),
            None => e.exit(),
        },
    };

    let result = cli
        .into_config(&mut io::stdin().lock(), &mut io::stdout())
        .and_then(|config| run(&config, &mut io::stdout().lock()));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(err),
    }
}

fn report(err: CalcError) -> ExitCode {
    log::debug!("{err:?}");
    match &err {
        CalcError::Flag(_) => println!("bad flag or argument!"),
        _ => eprintln!("{} {err}", "error:".red()),
    }
    ExitCode::from(err.exit_code() as u8)
}
