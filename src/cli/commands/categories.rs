//! skills categories - Filter options with per-category counts

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::catalog::CategoryCount;
use crate::cli::output::{OutputFormat, emit_robot, robot_ok};
use crate::error::Result;
use crate::render::category_options;

#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Case-insensitive substring filter on category names
    #[arg(long, short)]
    pub search: Option<String>,
}

#[derive(Serialize)]
struct CategoriesReport<'a> {
    search: Option<&'a str>,
    categories: Vec<&'a CategoryCount>,
}

pub fn run(ctx: &mut AppContext, args: &CategoriesArgs) -> Result<()> {
    let term = args.search.as_deref().unwrap_or("");
    let matches = ctx.store.search_categories(term);

    match ctx.output_format {
        OutputFormat::Json => emit_robot(&robot_ok(CategoriesReport {
            search: args.search.as_deref(),
            categories: matches,
        })),
        OutputFormat::Plain => {
            for option in matches {
                println!("{}\t{}", option.category, option.count);
            }
            Ok(())
        }
        OutputFormat::Human => {
            if matches.is_empty() {
                println!("No matching categories");
            } else {
                println!("{}", category_options(&matches, ctx.painter()));
            }
            Ok(())
        }
    }
}
