//! Rendering of command reports as JSON or aligned text tables.

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::{RegionRow, Report};
use crate::error::CliError;
use marketclock_core::ChartSeries;

pub fn render(report: &Report, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => render_json(report, pretty),
        OutputFormat::Table => {
            render_table(report);
            Ok(())
        }
    }
}

fn render_json(report: &Report, pretty: bool) -> Result<(), CliError> {
    match report {
        Report::Status(status) => print_json(status, pretty),
        Report::Series(series) => print_json(series, pretty),
        Report::Regions(rows) => print_json(rows, pretty),
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let body = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{body}");
    Ok(())
}

fn render_table(report: &Report) {
    match report {
        Report::Status(status) => {
            if status.page.records.is_empty() {
                println!("no markets found");
            } else {
                let mut rows = vec![vec![
                    String::from("REGION"),
                    String::from("TYPE"),
                    String::from("EXCHANGES"),
                    String::from("HOURS"),
                    String::from("STATUS"),
                ]];
                for market in &status.page.records {
                    rows.push(vec![
                        market.record.region.clone(),
                        market.record.market_type.clone(),
                        market.record.primary_exchanges.clone(),
                        market.viewer_hours.clone(),
                        if market.is_open_now {
                            String::from("OPEN")
                        } else {
                            String::from("CLOSED")
                        },
                    ]);
                }
                print_aligned(&rows);
            }
            println!(
                "page {}/{} ({}), sort {} {}, hours shown in {}",
                status.page.page,
                status.page.total_pages,
                status.page.range_label,
                status.page.sort_key,
                status.page.sort_direction,
                status.viewer_timezone,
            );
        }
        Report::Series(series) => render_series_table(series),
        Report::Regions(rows) => render_regions_table(rows),
    }
}

fn render_series_table(series: &ChartSeries) {
    println!(
        "{} ({}) last refreshed {}",
        series.symbol, series.kind, series.last_refreshed
    );
    let mut rows = vec![vec![
        String::from("DATE"),
        String::from("OPEN"),
        String::from("HIGH"),
        String::from("LOW"),
        String::from("CLOSE"),
        String::from("VOLUME"),
    ]];
    for point in &series.points {
        rows.push(vec![
            point.date.to_string(),
            format!("{:.2}", point.open),
            format!("{:.2}", point.high),
            format!("{:.2}", point.low),
            format!("{:.2}", point.close),
            point.volume.to_string(),
        ]);
    }
    print_aligned(&rows);
}

fn render_regions_table(rows: &[RegionRow]) {
    let mut table = vec![vec![
        String::from("REGION"),
        String::from("TIMEZONE"),
        String::from("SYMBOLS"),
    ]];
    for row in rows {
        table.push(vec![
            row.region.to_owned(),
            row.timezone.clone(),
            row.symbols.join(", "),
        ]);
    }
    print_aligned(&table);
}

fn print_aligned(rows: &[Vec<String>]) {
    let columns = rows.first().map(Vec::len).unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| rows.iter().map(|row| row[col].len()).max().unwrap_or(0))
        .collect();

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
}
