use serde::Serialize;

use marketclock_core::{chart_symbols, known_regions};

/// One row of the `regions` capability listing.
#[derive(Debug, Serialize)]
pub struct RegionRow {
    pub region: &'static str,
    pub timezone: String,
    pub symbols: &'static [&'static str],
}

pub fn run() -> Vec<RegionRow> {
    known_regions()
        .iter()
        .map(|&(region, tz)| RegionRow {
            region,
            timezone: tz.to_string(),
            symbols: chart_symbols(region),
        })
        .collect()
}
