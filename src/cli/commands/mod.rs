//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod categories;
pub mod completions;
pub mod info;
pub mod list;
pub mod show;
pub mod showcase;
pub mod stats;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List skills, optionally filtered by category
    List(list::ListArgs),

    /// List categories with their skill counts
    Categories(categories::CategoriesArgs),

    /// Built / evaluated / total counters
    Stats(stats::StatsArgs),

    /// Show one skill
    Show(show::ShowArgs),

    /// Catalog title, description and links
    Info,

    /// Typewriter animation cycling through skill names
    Showcase(showcase::ShowcaseArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &mut AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::List(args) => list::run(ctx, args),
        Commands::Categories(args) => categories::run(ctx, args),
        Commands::Stats(args) => stats::run(ctx, args),
        Commands::Show(args) => show::run(ctx, args),
        Commands::Info => info::run(ctx),
        Commands::Showcase(args) => showcase::run(ctx, args),
        Commands::Completions(args) => completions::run(args),
    }
}
