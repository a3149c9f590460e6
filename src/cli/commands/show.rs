//! skills show - One skill card

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{OutputFormat, emit_robot, robot_ok};
use crate::error::{CatalogError, Result};
use crate::render::card;

use super::list::SkillEntry;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Skill id, e.g. pricing-strategy
    pub id: String,
}

pub fn run(ctx: &mut AppContext, args: &ShowArgs) -> Result<()> {
    let skill = ctx
        .store
        .get(&args.id)
        .ok_or_else(|| CatalogError::SkillNotFound(args.id.clone()))?;

    match ctx.output_format {
        OutputFormat::Json => emit_robot(&robot_ok(SkillEntry::from(skill))),
        OutputFormat::Plain => {
            println!(
                "{}\t{}\t{}\t{}\t{:.1}\t{}",
                skill.id,
                skill.name,
                skill.category,
                skill.skill_type,
                skill.rating,
                skill.description
            );
            Ok(())
        }
        OutputFormat::Human => {
            println!("{}", ctx.painter().dim(&skill.category));
            println!("{}", card(skill, ctx.width(), ctx.painter()));
            Ok(())
        }
    }
}
