use crate::cli::commands::reconcile_sources;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::ui::messages::{header, success};
use crate::ui::report::{
    print_header, print_summary, render_action_table, render_full_table, render_scripts,
};

const SCRIPT_WIDTH: usize = 100;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze {
        sources,
        all,
        no_scripts,
    } = cmd
    {
        let (records, ctx) = reconcile_sources(sources, cfg)?;
        let summary = Core::summarize(&records);

        println!();
        print_header(&ctx, cfg);
        print_summary(&summary);

        if summary.needs_action == 0 {
            success("No discrepancies today - all break times match!");
        } else {
            header(format!(
                "{} employees need action before {} today",
                summary.needs_action, cfg.cutoff_time
            ));
            println!("{}", render_action_table(&records, cfg));

            if !*no_scripts {
                header(format!("{} Conversation Scripts", cfg.cutoff_time));
                print!("{}", render_scripts(&records, SCRIPT_WIDTH));
            }
        }

        if *all {
            header(format!("All {} employees reviewed", summary.total));
            println!("{}", render_full_table(&records, cfg));
        }
    }
    Ok(())
}
