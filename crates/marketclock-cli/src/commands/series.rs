use marketclock_core::{parse_time_series, ChartSeries};

use crate::cli::SeriesArgs;
use crate::error::CliError;

use super::read_input;

pub fn run(args: &SeriesArgs) -> Result<ChartSeries, CliError> {
    let body = read_input(&args.input)?;
    Ok(parse_time_series(&body, args.kind.to_core())?)
}
