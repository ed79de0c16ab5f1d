// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Check that the report can be written to `path`.
///
/// Missing files and `force` pass straight through; an existing file needs a
/// "y"/"yes" answer read from `answers`.
pub(crate) fn ensure_writable_with<R: BufRead>(
    path: &Path,
    force: bool,
    answers: &mut R,
) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if path.is_dir() {
        return Err(AppError::Export(format!(
            "'{}' is a directory",
            path.display()
        )));
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    answers.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::Export(
            "export cancelled: existing file not overwritten".to_string(),
        )),
    }
}

pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    ensure_writable_with(path, force, &mut io::stdin().lock())
}
