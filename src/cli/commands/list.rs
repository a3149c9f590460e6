//! skills list - Show the filtered catalog

use clap::Args;
use serde::Serialize;
use tracing::{debug, warn};

use crate::app::AppContext;
use crate::catalog::{CatalogStore, Selection, SkillRecord};
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_robot, robot_ok};
use crate::error::Result;
use crate::render::{Painter, card};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show skills in this category (repeatable; none means all)
    #[arg(long = "category", short = 'c')]
    pub categories: Vec<String>,

    /// Maximum number of skills to show
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

pub fn run(ctx: &mut AppContext, args: &ListArgs) -> Result<()> {
    let warnings = select(&mut ctx.store, &args.categories);
    let limit = args.limit.unwrap_or(usize::MAX);
    let view: Vec<&SkillRecord> = ctx.store.view().iter().take(limit).collect();
    debug!(count = view.len(), format = ?ctx.output_format, "listing skills");

    match ctx.output_format {
        OutputFormat::Human => {
            for warning in &warnings {
                eprintln!("warning: {warning}");
            }
            let layout = display_human(&view, ctx.store.selection(), ctx.width(), ctx.painter());
            emit_human(layout);
            Ok(())
        }
        OutputFormat::Json => {
            let report = ListReport {
                count: view.len(),
                source: ctx.store.origin(),
                selected: ctx.store.selection().tags(),
                skills: view.iter().map(|s| SkillEntry::from(*s)).collect(),
            };
            emit_robot(&robot_ok(report).with_warnings(warnings))
        }
        OutputFormat::Plain => {
            for skill in &view {
                println!("{}", plain_line(skill));
            }
            Ok(())
        }
    }
}

/// Apply category flags to the store, returning a warning per unknown name.
pub(crate) fn select(store: &mut CatalogStore, categories: &[String]) -> Vec<String> {
    let selection = Selection::of(categories.iter().cloned());
    let warnings: Vec<String> = store
        .unknown_categories(&selection)
        .into_iter()
        .map(|c| format!("unknown category '{c}'"))
        .collect();
    for warning in &warnings {
        warn!(%warning, "ignoring filter");
    }
    store.apply_selection(selection);
    warnings
}

#[derive(Serialize)]
struct ListReport<'a> {
    count: usize,
    source: &'a str,
    selected: Vec<String>,
    skills: Vec<SkillEntry>,
}

/// Serializable skill entry for JSON output
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SkillEntry {
    id: String,
    name: String,
    description: String,
    category: String,
    #[serde(rename = "type")]
    skill_type: String,
    rating: f64,
    github_url: Option<String>,
    doc_url: Option<String>,
    requirements: Vec<String>,
}

impl From<&SkillRecord> for SkillEntry {
    fn from(s: &SkillRecord) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            description: s.description.clone(),
            category: s.category.clone(),
            skill_type: s.skill_type.to_string(),
            rating: s.rating,
            github_url: s.github_link().map(String::from),
            doc_url: s.doc_link().map(String::from),
            requirements: s.requirements.clone(),
        }
    }
}

fn plain_line(skill: &SkillRecord) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{:.1}",
        skill.id, skill.name, skill.category, skill.skill_type, skill.rating
    )
}

fn display_human(
    skills: &[&SkillRecord],
    selection: &Selection,
    width: usize,
    painter: Painter,
) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.push_line(format!(
        "{} {}",
        painter.dim("Filter:"),
        selection
            .tags()
            .iter()
            .map(|t| painter.tag(t))
            .collect::<Vec<_>>()
            .join(" ")
    ));
    layout.blank();

    if skills.is_empty() {
        layout.push_line("No skills match the selected categories");
        return layout;
    }

    for skill in skills {
        layout.push_line(card(skill, width, painter));
        layout.blank();
    }
    layout.push_line(format!("{} skills", skills.len()));
    layout
}
