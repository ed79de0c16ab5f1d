// src/export/logic.rs

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::to_rows;
use crate::export::xlsx::export_xlsx;
use crate::models::DiscrepancyRecord;
use crate::ui::messages::warning;
use crate::ui::report::ReportContext;
use crate::utils::path::is_absolute;
use std::path::Path;

/// What to write and where.
#[derive(Debug, Clone)]
pub struct ExportRequest<'a> {
    pub format: ExportFormat,
    pub file: &'a str,
    pub force: bool,
    /// Keep only records that need a correction.
    pub action_only: bool,
}

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export a reconciled day.
    ///
    /// - `req.file` must be an absolute path
    /// - an existing file is overwritten only with `force` or after confirmation
    /// - csv/json write one flat row per record; xlsx writes the styled
    ///   report plus the scripts sheet
    pub fn export(
        records: &[DiscrepancyRecord],
        ctx: &ReportContext,
        cfg: &Config,
        req: &ExportRequest<'_>,
    ) -> AppResult<()> {
        if !is_absolute(req.file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {}",
                req.file
            )));
        }

        let path = Path::new(req.file);
        ensure_writable(path, req.force)?;

        let selected: Vec<DiscrepancyRecord> = if req.action_only {
            records.iter().filter(|r| r.needs_action).cloned().collect()
        } else {
            records.to_vec()
        };

        if selected.is_empty() {
            warning("No records to export for the selected view.");
        }

        match req.format {
            ExportFormat::Csv => export_csv(&to_rows(&selected, cfg), path)?,
            ExportFormat::Json => export_json(&to_rows(&selected, cfg), path)?,
            ExportFormat::Xlsx => export_xlsx(&selected, ctx, cfg, path)?,
        }

        Ok(())
    }
}
