mod regions;
mod series;
mod status;

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use marketclock_core::{viewer_timezone, ChartSeries};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub use regions::RegionRow;

/// Renderer-agnostic command output handed to the output layer.
pub enum Report {
    Status(status::StatusReport),
    Series(ChartSeries),
    Regions(Vec<RegionRow>),
}

pub fn run(cli: &Cli) -> Result<Report, CliError> {
    let viewer = resolve_viewer(cli.viewer_tz.as_deref())?;
    let now = resolve_instant(cli.at.as_deref())?;

    match &cli.command {
        Command::Status(args) => Ok(Report::Status(status::run(args, viewer, now)?)),
        Command::Series(args) => Ok(Report::Series(series::run(args)?)),
        Command::Regions => Ok(Report::Regions(regions::run())),
    }
}

pub(crate) fn read_input(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut body = String::new();
        std::io::stdin().read_to_string(&mut body)?;
        Ok(body)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn resolve_viewer(name: Option<&str>) -> Result<Tz, CliError> {
    match name {
        None => Ok(viewer_timezone()),
        Some(name) => name
            .parse()
            .map_err(|_| CliError::Command(format!("unknown timezone '{name}'"))),
    }
}

fn resolve_instant(value: Option<&str>) -> Result<DateTime<Utc>, CliError> {
    match value {
        None => Ok(Utc::now()),
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(|instant| instant.with_timezone(&Utc))
            .map_err(|error| CliError::Command(format!("invalid --at instant '{value}': {error}"))),
    }
}
