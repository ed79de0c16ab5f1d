pub mod analyze;
pub mod config;
pub mod export;
pub mod init;

use crate::cli::parser::SourceArgs;
use crate::config::Config;
use crate::core::Core;
use crate::errors::{AppError, AppResult};
use crate::import::{read_source_a, read_source_b};
use crate::models::DiscrepancyRecord;
use crate::ui::messages::import_report;
use crate::ui::report::ReportContext;
use crate::utils::{date, filename, path};
use std::path::Path;

/// Read both sources, reconcile them and resolve the report context.
pub(crate) fn reconcile_sources(
    args: &SourceArgs,
    cfg: &Config,
) -> AppResult<(Vec<DiscrepancyRecord>, ReportContext)> {
    let explicit_date = match &args.date {
        Some(d) => Some(date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?),
        None => None,
    };

    let a_path = path::expand_tilde(&args.source_a);
    let b_path = path::expand_tilde(&args.source_b);

    let a = read_source_a(&a_path, &cfg.source_a)?;
    import_report(&cfg.source_a_label, &display(&a_path), a.records.len(), &a.stats);

    let b = read_source_b(&b_path, &cfg.source_b)?;
    import_report(&cfg.source_b_label, &display(&b_path), b.records.len(), &b.stats);

    let names = [display(&a_path), display(&b_path)];
    let name_refs = [names[0].as_str(), names[1].as_str()];

    let ctx = ReportContext {
        station: filename::resolve_station(
            args.station.as_deref(),
            &name_refs,
            &cfg.known_stations,
            &cfg.default_station,
        ),
        report_date: date::format_report_date(date::resolve_report_date(explicit_date, &name_refs)),
    };

    let records = Core::run(&a.records, &b.records, cfg);
    Ok((records, ctx))
}

fn display(p: &Path) -> String {
    path::file_name(p)
}
