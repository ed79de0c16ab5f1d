//! Terminal rendering of a reconciliation run.

use crate::config::Config;
use crate::models::{DiscrepancyRecord, ReportSummary, Severity};
use crate::utils::colors::{BOLD, RESET, color_for_delta, color_for_severity, colorize_optional};
use crate::utils::formatting::{PLACEHOLDER, fmt_clock, fmt_delta, fmt_minutes, fmt_score};
use crate::utils::table::Table;
use ansi_term::Colour;

/// Station, date and cutoff shown above every report.
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub station: String,
    pub report_date: String,
}

impl ReportContext {
    pub fn title(&self, cfg: &Config) -> String {
        let station = if self.station.is_empty() {
            "Station ?".to_string()
        } else {
            format!("Station {}", self.station)
        };
        format!(
            "Break Time Discrepancy Report  |  {station}  |  {}  |  Review by {}",
            self.report_date, cfg.cutoff_time
        )
    }
}

pub fn print_header(ctx: &ReportContext, cfg: &Config) {
    println!("{BOLD}{}{RESET}\n", ctx.title(cfg));
}

fn summary_colour(severity: Severity) -> Colour {
    match severity {
        Severity::Major => Colour::Red,
        Severity::Moderate => Colour::RGB(255, 153, 51),
        Severity::Minor => Colour::Yellow,
        Severity::MissingEntry => Colour::Purple,
        Severity::Match => Colour::Green,
    }
}

pub fn print_summary(summary: &ReportSummary) {
    let mut line = format!(
        "{BOLD}Total Employees:{RESET} {}   {BOLD}Need Action:{RESET} {}",
        summary.total, summary.needs_action
    );
    for sev in Severity::ALL {
        let label = format!("{}:", sev.label());
        line.push_str(&format!(
            "   {} {}",
            summary_colour(sev).bold().paint(label),
            summary.count(sev)
        ));
    }
    println!("{line}\n");
}

/// Need-action view: one row per record with both-side values and windows.
pub fn render_action_table(records: &[DiscrepancyRecord], cfg: &Config) -> String {
    let a = cfg.source_a_label.as_str();
    let b = cfg.source_b_label.as_str();

    let h_b_min = format!("{b} (min)");
    let h_a_min = format!("{a} (min)");
    let h_b_start = format!("{b} Start");
    let h_b_end = format!("{b} End");
    let h_a_start = format!("{a} Start");
    let h_a_end = format!("{a} End");

    let mut table = Table::new(&[
        "Employee",
        "Severity",
        h_b_min.as_str(),
        h_a_min.as_str(),
        "Difference",
        "Direction",
        h_b_start.as_str(),
        h_b_end.as_str(),
        h_a_start.as_str(),
        h_a_end.as_str(),
    ]);

    for r in records.iter().filter(|r| r.needs_action) {
        let bside = r.matched.source_b().map(|s| &s.record);
        let aside = r.matched.source_a();

        table.add_row(
            vec![
                r.display_name().unwrap_or(PLACEHOLDER).to_string(),
                r.severity.label().to_string(),
                fmt_minutes(r.matched.b_minutes()),
                fmt_minutes(r.matched.a_minutes()),
                fmt_delta(r.delta),
                r.direction.label(a, b),
                fmt_clock(bside.and_then(|s| s.break_start)),
                fmt_clock(bside.and_then(|s| s.break_end)),
                fmt_clock(aside.and_then(|s| s.break_start)),
                fmt_clock(aside.and_then(|s| s.break_end)),
            ],
            Some(color_for_severity(r.severity)),
        );
    }

    table.render()
}

/// Full view: every record, matched or not.
pub fn render_full_table(records: &[DiscrepancyRecord], cfg: &Config) -> String {
    let h_a_name = format!("Employee ({})", cfg.source_a_label);
    let h_b_name = format!("{} Name", cfg.source_b_label);
    let h_b_min = format!("{} (min)", cfg.source_b_label);
    let h_a_min = format!("{} (min)", cfg.source_a_label);

    let mut table = Table::new(&[
        h_a_name.as_str(),
        h_b_name.as_str(),
        h_b_min.as_str(),
        h_a_min.as_str(),
        "Difference",
        "Score",
        "Status",
    ]);

    for r in records {
        table.add_row(
            vec![
                r.a_name().unwrap_or(PLACEHOLDER).to_string(),
                r.b_name().unwrap_or(PLACEHOLDER).to_string(),
                fmt_minutes(r.matched.b_minutes()),
                fmt_minutes(r.matched.a_minutes()),
                fmt_delta(r.delta),
                fmt_score(r.matched.score()),
                r.severity.label().to_string(),
            ],
            Some(color_for_severity(r.severity)),
        );
    }

    table.render()
}

/// Numbered scripts for every need-action record, wrapped to `width`.
pub fn render_scripts(records: &[DiscrepancyRecord], width: usize) -> String {
    let mut out = String::new();

    for (i, r) in records.iter().filter(|r| r.needs_action).enumerate() {
        let name = r.display_name().unwrap_or(PLACEHOLDER);
        out.push_str(&format!(
            "{}{BOLD}{}. {} - {}{RESET}  Diff: {}{}{RESET}\n",
            color_for_severity(r.severity),
            i + 1,
            name,
            r.severity.label(),
            color_for_delta(r.delta),
            colorize_optional(&fmt_delta(r.delta)),
        ));
        let opts = textwrap::Options::new(width)
            .initial_indent("   ")
            .subsequent_indent("   ");
        for line in textwrap::wrap(&r.script, opts) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }

    out
}
