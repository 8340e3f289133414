//! Report rendering for the command-line tool.

use std::fmt::Write;

use anyhow::Result;
use rainharvest_core::metrics::period_total;
use rainharvest_core::{Period, PeriodSummary, SimulationReport};

use crate::cli::View;

const RULE_WIDTH: usize = 60;
const HEADER_RULE_WIDTH: usize = 40;

/// Plain-text report: parameters, annual statistics, then the chosen tables.
pub fn render_text(report: &SimulationReport, view: View) -> String {
    let mut out = String::new();
    let config = &report.config;
    let totals = &report.totals;

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Rainwater Harvesting Analysis Results");
    let _ = writeln!(out, "{}", "-".repeat(HEADER_RULE_WIDTH));
    let _ = writeln!(out, "Roof Area: {:.1} m²", config.roof_area);
    let _ = writeln!(
        out,
        "Daily Water Consumption: {:.1} L",
        report.scenario.daily_consumption
    );
    let _ = writeln!(out, "Runoff Coefficient: {:.2}", config.runoff_coefficient);
    let _ = writeln!(out);
    let _ = writeln!(out, "Annual Statistics:");
    let _ = writeln!(out, "Total Rainfall: {:.1} mm", totals.rainfall);
    let _ = writeln!(out, "Total Harvestable Water: {:.1} L", totals.harvested);
    let _ = writeln!(
        out,
        "Recommended Storage Capacity: {:.1} L",
        report.storage.max_storage_needed
    );
    let _ = writeln!(out, "Annual Overflow: {:.1} L", totals.overflow);
    match totals.efficiency {
        Some(pct) => {
            let _ = writeln!(out, "System Efficiency: {pct:.1}%");
        }
        None => {
            let _ = writeln!(out, "System Efficiency: n/a (no water harvested)");
        }
    }

    for &period in view.periods() {
        let _ = writeln!(out);
        render_table(&mut out, report, period);
    }

    out
}

fn render_table(out: &mut String, report: &SimulationReport, period: Period) {
    let rows: Vec<PeriodSummary> = match period {
        Period::Weekly => match &report.weekly {
            Some(week) => week.to_vec(),
            None => {
                let _ = writeln!(
                    out,
                    "Weekly data needs at least 7 simulated days, got {}.",
                    report.rainfall.len()
                );
                return;
            }
        },
        Period::Monthly => report.monthly.to_vec(),
    };

    let title = match period {
        Period::Weekly => "Weekly Data (First Week):",
        Period::Monthly => "Monthly Data:",
    };
    let rule = "-".repeat(RULE_WIDTH);

    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{:<8} | {:<20} | {:<20}",
        period.row_label(),
        "Rainfall (mm)",
        "Harvested Water (L)"
    );
    let _ = writeln!(out, "{rule}");
    for row in &rows {
        let _ = writeln!(
            out,
            "{:<8} | {:>18.1} | {:>18.1}",
            row.index, row.rainfall, row.harvested_water
        );
    }
    let _ = writeln!(out, "{rule}");

    let days = period.total_days(report.rainfall.len());
    let _ = writeln!(
        out,
        "{:<8} | {:>18.1} | {:>18.1}",
        "Total",
        period_total(&report.rainfall, days),
        period_total(&report.harvested, days)
    );
    let _ = writeln!(out, "{rule}");
}

/// Pretty JSON of the report. The daily series are dropped unless asked for.
pub fn render_json(report: &SimulationReport, include_series: bool) -> Result<String> {
    let mut value = serde_json::to_value(report)?;
    if !include_series {
        if let Some(obj) = value.as_object_mut() {
            obj.remove("rainfall");
            obj.remove("harvested");
        }
    }
    Ok(serde_json::to_string_pretty(&value)?)
}
