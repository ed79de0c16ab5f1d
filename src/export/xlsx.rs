// src/export/xlsx.rs

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::{DiscrepancyRecord, ReportSummary, Severity};
use crate::ui::messages::info;
use crate::ui::report::ReportContext;
use crate::utils::formatting::{PLACEHOLDER, fmt_clock, fmt_delta, fmt_minutes};
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet, XlsxError,
};
use std::path::Path;

const DARK_NAVY: u32 = 0x1B2A4A;
const MID_BLUE: u32 = 0x2E5090;
const LIGHT_BLUE: u32 = 0xD6E4F0;
const ORANGE: u32 = 0xE87722;
const WHITE: u32 = 0xFFFFFF;
const BORDER_GREY: u32 = 0xBDBDBD;

const REPORT_SHEET: &str = "Discrepancy Report";
const SCRIPTS_SHEET: &str = "Scripts";

const REPORT_WIDTHS: [f64; 11] = [28.0, 26.0, 14.0, 14.0, 14.0, 14.0, 14.0, 14.0, 14.0, 16.0, 18.0];
const SCRIPT_WIDTHS: [f64; 7] = [5.0, 28.0, 16.0, 14.0, 14.0, 12.0, 75.0];

/// (fill, font) colors of a severity row.
fn severity_colors(severity: Severity) -> (u32, u32) {
    match severity {
        Severity::Major => (0xFDDCDC, 0xC0392B),
        Severity::Moderate => (0xFFF3CD, 0x856404),
        Severity::Minor => (0xFFF8DC, 0x8B6914),
        Severity::MissingEntry => (0xEDE7F6, 0x6A1B9A),
        Severity::Match => (0xD5F5E3, 0x1A7A42),
    }
}

fn xlsx_err(e: XlsxError) -> AppError {
    AppError::Export(format!("XLSX error: {e}"))
}

fn banner_format(fill: u32, size: u8) -> Format {
    Format::new()
        .set_font_name("Arial")
        .set_font_size(size)
        .set_bold()
        .set_font_color(Color::RGB(WHITE))
        .set_background_color(Color::RGB(fill))
        .set_pattern(FormatPattern::Solid)
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
}

fn header_format() -> Format {
    Format::new()
        .set_font_name("Arial")
        .set_font_size(10)
        .set_bold()
        .set_font_color(Color::RGB(WHITE))
        .set_background_color(Color::RGB(MID_BLUE))
        .set_pattern(FormatPattern::Solid)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(BORDER_GREY))
}

fn cell_format(severity: Severity, align: FormatAlign, bold: bool, wrap: bool) -> Format {
    let (fill, font) = severity_colors(severity);
    let mut fmt = Format::new()
        .set_font_name("Arial")
        .set_font_size(10)
        .set_font_color(Color::RGB(font))
        .set_background_color(Color::RGB(fill))
        .set_pattern(FormatPattern::Solid)
        .set_align(align)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(BORDER_GREY));
    if bold {
        fmt = fmt.set_bold();
    }
    if wrap {
        fmt = fmt.set_text_wrap();
    }
    fmt
}

fn write_headers(ws: &mut Worksheet, row: u32, headers: &[String]) -> Result<(), XlsxError> {
    let fmt = header_format();
    for (col, h) in headers.iter().enumerate() {
        ws.write_with_format(row, col as u16, h.as_str(), &fmt)?;
    }
    Ok(())
}

fn set_widths(ws: &mut Worksheet, widths: &[f64]) -> Result<(), XlsxError> {
    for (col, w) in widths.iter().enumerate() {
        ws.set_column_width(col as u16, *w)?;
    }
    Ok(())
}

/// Sheet 1: every record, colored by severity, with a summary footer.
fn write_report_sheet(
    ws: &mut Worksheet,
    records: &[DiscrepancyRecord],
    ctx: &ReportContext,
    cfg: &Config,
) -> Result<(), XlsxError> {
    let a = cfg.source_a_label.as_str();
    let b = cfg.source_b_label.as_str();
    let last_col = (REPORT_WIDTHS.len() - 1) as u16;
    let tiers = &cfg.severity;

    ws.set_name(REPORT_SHEET)?;

    let title = format!("  {}", ctx.title(cfg));
    ws.merge_range(0, 0, 0, last_col, &title, &banner_format(DARK_NAVY, 13))?;
    ws.set_row_height(0, 32)?;

    let legend = format!(
        "  Major (>{} min)  Moderate ({}-{} min)  Minor ({}-{} min)  Missing Entry  Match (<={} min)",
        tiers.moderate_max,
        tiers.minor_max + 1.0,
        tiers.moderate_max,
        tiers.match_max + 1.0,
        tiers.minor_max,
        tiers.match_max
    );
    let legend_fmt = Format::new()
        .set_font_name("Arial")
        .set_font_size(9)
        .set_italic()
        .set_font_color(Color::RGB(0x444444))
        .set_background_color(Color::RGB(LIGHT_BLUE))
        .set_pattern(FormatPattern::Solid)
        .set_align(FormatAlign::VerticalCenter);
    ws.merge_range(1, 0, 1, last_col, &legend, &legend_fmt)?;
    ws.set_row_height(1, 18)?;

    let headers = vec![
        format!("Employee ({a})"),
        format!("{b} Name"),
        format!("{b} Break Start"),
        format!("{b} Break End"),
        format!("{b} Break (min)"),
        format!("{a} Break Start"),
        format!("{a} Break End"),
        format!("{a} Break (min)"),
        "Difference (min)".to_string(),
        "Severity".to_string(),
        "Action Required".to_string(),
    ];
    write_headers(ws, 2, &headers)?;
    ws.set_row_height(2, 36)?;

    for (i, r) in records.iter().enumerate() {
        let row = (i + 3) as u32;
        let aside = r.matched.source_a();
        let bside = r.matched.source_b().map(|s| &s.record);

        let values = [
            r.a_name().unwrap_or(PLACEHOLDER).to_string(),
            r.b_name().unwrap_or(PLACEHOLDER).to_string(),
            fmt_clock(bside.and_then(|s| s.break_start)),
            fmt_clock(bside.and_then(|s| s.break_end)),
            fmt_minutes(r.matched.b_minutes()),
            fmt_clock(aside.and_then(|s| s.break_start)),
            fmt_clock(aside.and_then(|s| s.break_end)),
            fmt_minutes(r.matched.a_minutes()),
            fmt_delta(r.delta),
            r.severity.label().to_string(),
            if r.needs_action {
                format!("Correct by {}", cfg.cutoff_time)
            } else {
                "No action".to_string()
            },
        ];

        let emphasize = r.severity != Severity::Match;
        for (col, v) in values.iter().enumerate() {
            let align = if col == 0 { FormatAlign::Left } else { FormatAlign::Center };
            let bold = emphasize && (col == 8 || col == 9);
            let fmt = cell_format(r.severity, align, bold, false);
            ws.write_with_format(row, col as u16, v.as_str(), &fmt)?;
        }
        ws.set_row_height(row, 20)?;
    }

    let summary = ReportSummary::from_records(records);
    let footer_row = (records.len() + 3) as u32;
    let footer = format!(
        "  SUMMARY: {} employees need correction out of {} reviewed  |  All corrections due by {}",
        summary.needs_action, summary.total, cfg.cutoff_time
    );
    ws.merge_range(footer_row, 0, footer_row, last_col, &footer, &banner_format(ORANGE, 11))?;
    ws.set_row_height(footer_row, 24)?;

    set_widths(ws, &REPORT_WIDTHS)?;
    ws.set_freeze_panes(3, 0)?;
    Ok(())
}

/// Sheet 2: need-action records with their conversation scripts.
fn write_scripts_sheet(
    ws: &mut Worksheet,
    records: &[DiscrepancyRecord],
    ctx: &ReportContext,
    cfg: &Config,
) -> Result<(), XlsxError> {
    let last_col = (SCRIPT_WIDTHS.len() - 1) as u16;

    ws.set_name(SCRIPTS_SHEET)?;

    let title = format!(
        "  {} Correction Conversations  |  Station {}  |  {}",
        cfg.cutoff_time, ctx.station, ctx.report_date
    );
    ws.merge_range(0, 0, 0, last_col, &title, &banner_format(DARK_NAVY, 13))?;
    ws.set_row_height(0, 30)?;

    let headers = vec![
        "#".to_string(),
        "Employee".to_string(),
        "Severity".to_string(),
        format!("{} (min)", cfg.source_b_label),
        format!("{} (min)", cfg.source_a_label),
        "Difference".to_string(),
        "Script".to_string(),
    ];
    write_headers(ws, 1, &headers)?;
    ws.set_row_height(1, 28)?;

    let with_unit = |v: String| if v == PLACEHOLDER { v } else { format!("{v} min") };

    for (i, r) in records.iter().filter(|r| r.needs_action).enumerate() {
        let row = (i + 2) as u32;

        let index_fmt = cell_format(r.severity, FormatAlign::Center, false, true);
        ws.write_with_format(row, 0, (i + 1) as u32, &index_fmt)?;

        let values = [
            r.display_name().unwrap_or(PLACEHOLDER).to_string(),
            r.severity.label().to_string(),
            with_unit(fmt_minutes(r.matched.b_minutes())),
            with_unit(fmt_minutes(r.matched.a_minutes())),
            with_unit(fmt_delta(r.delta)),
            r.script.clone(),
        ];

        for (offset, v) in values.iter().enumerate() {
            let col = offset + 1;
            let align = if col == 1 || col == 6 { FormatAlign::Left } else { FormatAlign::Center };
            let bold = col == 2 || col == 5;
            let fmt = cell_format(r.severity, align, bold, true);
            ws.write_with_format(row, col as u16, v.as_str(), &fmt)?;
        }
        ws.set_row_height(row, 90)?;
    }

    set_widths(ws, &SCRIPT_WIDTHS)?;
    ws.set_freeze_panes(2, 0)?;
    Ok(())
}

/// Export the styled two-sheet workbook.
pub(crate) fn export_xlsx(
    records: &[DiscrepancyRecord],
    ctx: &ReportContext,
    cfg: &Config,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    let report = workbook.add_worksheet();
    write_report_sheet(report, records, ctx, cfg).map_err(xlsx_err)?;

    let scripts = workbook.add_worksheet();
    write_scripts_sheet(scripts, records, ctx, cfg).map_err(xlsx_err)?;

    workbook.save(path).map_err(xlsx_err)?;

    notify_export_success("XLSX", path);
    Ok(())
}
