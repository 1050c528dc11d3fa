//! Command line arguments and the interactive prompts.

use crate::config::Config;
use crate::error::CalcError;
use clap::error::ErrorKind;
use clap::Parser;
use std::io::{BufRead, Write};

pub const NETWORK_PROMPT: &str = "Enter starting network ID and prefix in slash notation: ";
pub const SUBNETS_PROMPT: &str = "Enter the desired number of subnets: ";

/// Divide an IPv4 network into equal sized subnets.
///
/// Run without arguments to be prompted for the network and subnet count.
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(version, about, args_override_self = true)]
pub struct Cli {
    /// Network in slash notation, e.g. 25.0.0.0/8
    #[arg(requires = "subnets")]
    pub cidr: Option<String>,

    /// Desired number of subnets
    #[arg(requires = "cidr", allow_negative_numbers = true)]
    pub subnets: Option<String>,

    /// Number of leading and trailing subnets to list, -1 lists all
    #[arg(
        short = 'n',
        value_name = "NUM_RESULTS",
        allow_negative_numbers = true,
        requires = "cidr"
    )]
    pub num_results: Option<i64>,

    /// Print only the table rows
    #[arg(short = 's', requires = "cidr")]
    pub just_results: bool,
}

impl Cli {
    /// Turn the arguments into a [`Config`], prompting when no network was given.
    pub fn into_config<R: BufRead, W: Write>(
        self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Config, CalcError> {
        let (cidr, subnets) = match (self.cidr, self.subnets) {
            (Some(cidr), Some(subnets)) => (cidr, subnets),
            (None, None) => {
                log::debug!("No arguments, prompting");
                let cidr = prompt(input, output, NETWORK_PROMPT)?;
                let subnets = prompt(input, output, SUBNETS_PROMPT)?;
                (cidr, subnets)
            }
            _ => return Err(CalcError::Flag("network and subnet count go together".into())),
        };

        let mut config = Config::from_text(&cidr, &subnets)?;
        if let Some(n) = self.num_results {
            config.num_results = n;
        }
        config.quiet = self.just_results;
        Ok(config)
    }
}

/// Map a clap parse failure onto the crate's error kinds.
///
/// Help and version requests are not failures; the caller should let clap
/// print them.
pub fn usage_error(err: &clap::Error) -> Option<CalcError> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        ErrorKind::ValueValidation | ErrorKind::InvalidValue => {
            Some(CalcError::Format(first_line(err)))
        }
        _ => Some(CalcError::Flag(first_line(err))),
    }
}

fn first_line(err: &clap::Error) -> String {
    err.to_string().lines().next().unwrap_or_default().to_string()
}

/// Ask one question and return the trimmed answer.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<String, CalcError> {
    write!(output, "{question}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CalcError::format(format!(
            "No answer to '{}'",
            question.trim_end_matches([':', ' '])
        )));
    }
    Ok(line.trim().to_string())
}
