use crate::cli::commands::reconcile_sources;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::logic::ExportRequest;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        sources,
        format,
        file,
        action_only,
        force,
    } = cmd
    {
        let (records, ctx) = reconcile_sources(sources, cfg)?;

        let req = ExportRequest {
            format: *format,
            file: file.as_str(),
            force: *force,
            action_only: *action_only,
        };
        ExportLogic::export(&records, &ctx, cfg, &req)?;
    }
    Ok(())
}
