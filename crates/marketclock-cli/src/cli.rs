//! CLI argument definitions for marketclock.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `status` | Render the market table from a status payload |
//! | `series` | Prepare chart points from a time-series payload |
//! | `regions` | List the static region→timezone/symbol tables |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--viewer-tz` | detected | Viewer IANA timezone override |
//! | `--at` | now | Evaluation instant, RFC3339 |

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use marketclock_core::{SeriesKind, SortDirection, SortKey};

/// Global market open/close status, in your own timezone.
///
/// Reads already-fetched upstream payloads (file or stdin) and renders the
/// normalized market table or chart-ready series. Fetching is left to the
/// caller so output stays reproducible: pass `--at` to pin the instant.
#[derive(Debug, Parser)]
#[command(name = "marketclock", author, version, about = "Market-hours table and chart-series tool")]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Viewer timezone as an IANA name, e.g. `Europe/Berlin`.
    ///
    /// Defaults to the timezone detected from the host environment.
    #[arg(long, global = true, value_name = "TZ")]
    pub viewer_tz: Option<String>,

    /// Evaluation instant as RFC3339, e.g. `2026-08-25T13:00:00Z`.
    ///
    /// Defaults to the current wall clock.
    #[arg(long, global = true, value_name = "INSTANT")]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the open/closed market table from a MARKET_STATUS payload.
    Status(StatusArgs),
    /// Prepare chart points from a TIME_SERIES payload.
    Series(SeriesArgs),
    /// List known regions with their exchange timezone and chart symbols.
    Regions,
}

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Payload file, `-` for stdin.
    pub input: PathBuf,

    /// Keep only markets whose region, type, or exchanges contain this text.
    #[arg(long)]
    pub search: Option<String>,

    /// Sort column. Defaults to status (open markets first).
    #[arg(long, value_enum)]
    pub sort: Option<SortKeyArg>,

    /// Sort direction. Defaults per column: status descending, others ascending.
    #[arg(long, value_enum)]
    pub direction: Option<DirectionArg>,

    /// 1-based page number; out-of-range values are clamped.
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Debug, Args)]
pub struct SeriesArgs {
    /// Payload file, `-` for stdin.
    pub input: PathBuf,

    /// Series granularity to extract.
    #[arg(long, value_enum, default_value_t = KindArg::Daily)]
    pub kind: KindArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKeyArg {
    Region,
    MarketType,
    Exchanges,
    TradingHours,
    Status,
}

impl SortKeyArg {
    pub const fn to_core(self) -> SortKey {
        match self {
            Self::Region => SortKey::Region,
            Self::MarketType => SortKey::MarketType,
            Self::Exchanges => SortKey::Exchanges,
            Self::TradingHours => SortKey::TradingHours,
            Self::Status => SortKey::Status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    Asc,
    Desc,
}

impl DirectionArg {
    pub const fn to_core(self) -> SortDirection {
        match self {
            Self::Asc => SortDirection::Ascending,
            Self::Desc => SortDirection::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Daily,
    Weekly,
    Monthly,
}

impl KindArg {
    pub const fn to_core(self) -> SeriesKind {
        match self {
            Self::Daily => SeriesKind::Daily,
            Self::Weekly => SeriesKind::Weekly,
            Self::Monthly => SeriesKind::Monthly,
        }
    }
}
