//! Terminal rendering of catalog cards, star ratings and counters.

use console::style;

use crate::catalog::{CategoryCount, SkillRecord, SkillType, SummaryCounts};

pub const FULL_STAR: char = '★';
pub const HALF_STAR: char = '⯪';
pub const EMPTY_STAR: char = '☆';

const STAR_SLOTS: usize = 5;

/// Five-slot star string: whole stars, one half star for a fraction of .5 or more, then empties.
#[must_use]
pub fn stars(rating: f64) -> String {
    let rating = if rating.is_nan() { 0.0 } else { rating.clamp(0.0, 5.0) };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let full = rating.floor() as usize;
    let half = usize::from(full < STAR_SLOTS && rating % 1.0 >= 0.5);
    let empty = STAR_SLOTS - full - half;

    let mut out = String::with_capacity(STAR_SLOTS * 3);
    out.extend(std::iter::repeat_n(FULL_STAR, full));
    out.extend(std::iter::repeat_n(HALF_STAR, half));
    out.extend(std::iter::repeat_n(EMPTY_STAR, empty));
    out
}

#[must_use]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Value shown by an animated counter at `progress` (0..=1) of its run.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn counter_value(start: usize, end: usize, progress: f64) -> usize {
    if progress >= 1.0 {
        return end;
    }
    let (start_f, end_f) = (start as f64, end as f64);
    let value = (end_f - start_f).mul_add(ease_out_cubic(progress), start_f);
    value.floor().max(0.0) as usize
}

/// Applies styling only when color output is enabled.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self { color: false }
    }

    #[must_use]
    pub fn bold(&self, text: &str) -> String {
        style(text).bold().force_styling(self.color).to_string()
    }

    #[must_use]
    pub fn dim(&self, text: &str) -> String {
        style(text).dim().force_styling(self.color).to_string()
    }

    #[must_use]
    pub fn stars(&self, text: &str) -> String {
        style(text).yellow().force_styling(self.color).to_string()
    }

    #[must_use]
    pub fn tag(&self, text: &str) -> String {
        style(format!("[{text}]")).cyan().force_styling(self.color).to_string()
    }

    /// Built skills in green, evaluated in blue.
    #[must_use]
    pub fn kind(&self, skill_type: &SkillType) -> String {
        let label = style(skill_type.as_str()).force_styling(self.color);
        match skill_type {
            SkillType::Built => label.green().to_string(),
            SkillType::Evaluated => label.blue().to_string(),
            SkillType::Other(_) => label.dim().to_string(),
        }
    }
}

/// Multi-line card for one skill, wrapped to `width` columns.
#[must_use]
pub fn card(skill: &SkillRecord, width: usize, painter: Painter) -> String {
    let indent = "  ";
    let body_width = width.saturating_sub(indent.len()).max(20);
    let mut lines = Vec::new();

    lines.push(format!(
        "{}  {}",
        painter.bold(&skill.name),
        painter.kind(&skill.skill_type)
    ));
    for line in textwrap::wrap(&skill.description, body_width) {
        lines.push(format!("{indent}{line}"));
    }

    let rating = skill.display_rating();
    lines.push(format!(
        "{indent}{} {rating:.1}",
        painter.stars(&stars(rating))
    ));

    if !skill.requirements.is_empty() {
        let tags: Vec<String> = skill.requirements.iter().map(|r| painter.tag(r)).collect();
        lines.push(format!("{indent}{}", tags.join(" ")));
    }

    lines.push(format!(
        "{indent}{} {}",
        painter.dim("GitHub:"),
        skill.github_link().unwrap_or("not set")
    ));
    lines.push(format!(
        "{indent}{} {}",
        painter.dim("Docs:  "),
        skill.doc_link().unwrap_or("not set")
    ));

    lines.join("\n")
}

/// Filter options with their counts, one per line.
#[must_use]
pub fn category_options(options: &[&CategoryCount], painter: Painter) -> String {
    let width = options
        .iter()
        .map(|c| console::measure_text_width(&c.category))
        .max()
        .unwrap_or(0);
    options
        .iter()
        .map(|c| {
            let pad = width - console::measure_text_width(&c.category);
            format!(
                "{}{}  {}",
                c.category,
                " ".repeat(pad),
                painter.dim(&c.count.to_string())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The three summary counters at a given animation progress.
#[must_use]
pub fn counters(summary: SummaryCounts, progress: f64, painter: Painter) -> String {
    [
        ("Built", summary.built),
        ("Evaluated", summary.evaluated),
        ("Total", summary.total),
    ]
    .iter()
    .map(|(label, target)| {
        format!(
            "{} {}",
            painter.dim(&format!("{label:<10}")),
            painter.bold(&counter_value(0, *target, progress).to_string())
        )
    })
    .collect::<Vec<_>>()
    .join("\n")
}
