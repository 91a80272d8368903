use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use marketclock_core::{
    parse_market_status, MarketTable, Normalizer, PageView, SortDirection, SortKey, ViewState,
};

use crate::cli::StatusArgs;
use crate::error::CliError;

use super::read_input;

/// Visible page plus the context it was derived under.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub viewer_timezone: String,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub page: PageView,
}

pub fn run(args: &StatusArgs, viewer: Tz, now: DateTime<Utc>) -> Result<StatusReport, CliError> {
    let body = read_input(&args.input)?;
    let payload = parse_market_status(&body)?;

    let normalizer = Normalizer::new(viewer);
    let markets = normalizer.normalize_batch(&payload.markets, now);

    let sort_key = args
        .sort
        .map(|key| key.to_core())
        .unwrap_or(SortKey::Status);
    let sort_direction = args
        .direction
        .map(|direction| direction.to_core())
        .unwrap_or(match sort_key {
            SortKey::Status => SortDirection::Descending,
            _ => SortDirection::Ascending,
        });

    let table = MarketTable::with_state(
        markets,
        ViewState {
            search: args.search.clone().unwrap_or_default(),
            sort_key,
            sort_direction,
            page: args.page,
        },
    );

    Ok(StatusReport {
        viewer_timezone: viewer.to_string(),
        generated_at: now,
        page: table.visible_page(),
    })
}
