//! skills info - Catalog metadata

use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_robot, robot_ok};
use crate::error::Result;

#[derive(Serialize)]
struct InfoReport<'a> {
    title: &'a str,
    description: &'a str,
    repo_url: Option<&'a str>,
    survey_url: Option<&'a str>,
    source: &'a str,
    skills: usize,
    categories: usize,
}

pub fn run(ctx: &AppContext) -> Result<()> {
    let meta = ctx.store.meta();
    let report = InfoReport {
        title: &meta.title,
        description: &meta.description,
        repo_url: meta.repo_url(),
        survey_url: meta.survey_url(),
        source: ctx.store.origin(),
        skills: ctx.store.records().len(),
        categories: ctx.store.category_counts().len(),
    };

    match ctx.output_format {
        OutputFormat::Json => emit_robot(&robot_ok(report)),
        OutputFormat::Plain => {
            println!("title\t{}", report.title);
            println!("repo_url\t{}", report.repo_url.unwrap_or(""));
            println!("survey_url\t{}", report.survey_url.unwrap_or(""));
            println!("source\t{}", report.source);
            Ok(())
        }
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout.title(report.title);
            if !report.description.is_empty() {
                layout.push_line(report.description).blank();
            }
            layout
                .section("Links")
                .kv("Repository", report.repo_url.unwrap_or("not set"))
                .kv("Feedback", report.survey_url.unwrap_or("not set"))
                .blank()
                .section("Catalog")
                .kv("Skills", &report.skills.to_string())
                .kv("Categories", &report.categories.to_string())
                .kv("Source", report.source);
            emit_human(layout);
            Ok(())
        }
    }
}
