//! skills showcase - Typewriter animation over skill names

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::{OutputFormat, emit_robot, robot_ok};
use crate::error::Result;
use crate::showcase::{self, ShowcaseEntry};

use super::list::select;

#[derive(Args, Debug)]
pub struct ShowcaseArgs {
    /// Stop after this many passes over the list (default: run until Ctrl-C)
    #[arg(long)]
    pub cycles: Option<usize>,

    /// Restrict to these categories
    #[arg(long = "category", short = 'c')]
    pub categories: Vec<String>,
}

pub fn run(ctx: &mut AppContext, args: &ShowcaseArgs) -> Result<()> {
    let warnings = select(&mut ctx.store, &args.categories);
    let entries: Vec<ShowcaseEntry> = ctx.store.view().iter().map(ShowcaseEntry::from).collect();

    match ctx.output_format {
        OutputFormat::Json => {
            let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
            return emit_robot(&robot_ok(names).with_warnings(warnings));
        }
        OutputFormat::Plain => {
            for entry in &entries {
                println!("{}\t{}", entry.name, entry.skill_type);
            }
            return Ok(());
        }
        OutputFormat::Human => {
            for warning in &warnings {
                eprintln!("warning: {warning}");
            }
        }
    }

    debug!(entries = entries.len(), cycles = ?args.cycles, "starting showcase");
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(showcase::run(
        entries,
        &ctx.config.showcase,
        args.cycles,
        ctx.painter(),
    ))
}
