//! skills stats - Summary counters over the full catalog

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use clap::Args;
use console::Term;

use crate::app::AppContext;
use crate::catalog::SummaryCounts;
use crate::cli::output::{OutputFormat, emit_robot, robot_ok};
use crate::error::Result;
use crate::render::{Painter, counters};

const ANIMATION: Duration = Duration::from_millis(1500);
const FRAME: Duration = Duration::from_millis(16);

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Count up from zero with an ease-out animation
    #[arg(long)]
    pub animate: bool,
}

pub fn run(ctx: &mut AppContext, args: &StatsArgs) -> Result<()> {
    let summary = ctx.store.summary_counts();

    match ctx.output_format {
        OutputFormat::Json => emit_robot(&robot_ok(summary)),
        OutputFormat::Plain => {
            println!("built\t{}", summary.built);
            println!("evaluated\t{}", summary.evaluated);
            println!("total\t{}", summary.total);
            Ok(())
        }
        OutputFormat::Human => {
            if args.animate && std::io::stdout().is_terminal() {
                animate(summary, ctx.painter())
            } else {
                println!("{}", counters(summary, 1.0, ctx.painter()));
                Ok(())
            }
        }
    }
}

/// Redraw the counters in place until the animation completes.
fn animate(summary: SummaryCounts, painter: Painter) -> Result<()> {
    let term = Term::stdout();
    let start = Instant::now();
    let mut drawn = 0;

    loop {
        let progress = start.elapsed().as_secs_f64() / ANIMATION.as_secs_f64();
        if drawn > 0 {
            term.clear_last_lines(drawn)?;
        }
        let frame = counters(summary, progress, painter);
        drawn = frame.lines().count();
        term.write_line(&frame)?;

        if progress >= 1.0 {
            return Ok(());
        }
        std::thread::sleep(FRAME);
    }
}
