//! Decorative typewriter and spinner animation.
//!
//! The step sequence is produced by [`Typewriter`], a plain iterator, so the
//! timing logic is testable without a clock. [`run`] drives it on the tokio
//! runtime and draws through an `indicatif` spinner. Nothing here touches the
//! catalog store; callers hand over an owned list of entries.

use std::collections::VecDeque;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use tracing::debug;

use crate::catalog::{SkillRecord, SkillType};
use crate::config::ShowcaseConfig;
use crate::error::{CatalogError, Result};
use crate::render::Painter;

pub const SPINNER_FRAMES: [&str; 6] = ["·", "✻", "✽", "✶", "✳", "✢"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseEntry {
    pub name: String,
    pub skill_type: SkillType,
}

impl From<&SkillRecord> for ShowcaseEntry {
    fn from(skill: &SkillRecord) -> Self {
        Self {
            name: skill.name.clone(),
            skill_type: skill.skill_type.clone(),
        }
    }
}

/// One frame: show `text`, then wait `delay` before the next frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub text: String,
    pub skill_type: SkillType,
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub type_min: Duration,
    pub type_max: Duration,
    pub hold: Duration,
    pub erase: Duration,
    pub gap: Duration,
}

impl From<&ShowcaseConfig> for Timing {
    fn from(config: &ShowcaseConfig) -> Self {
        let min = config.type_delay_min_ms.min(config.type_delay_max_ms);
        let max = config.type_delay_min_ms.max(config.type_delay_max_ms);
        Self {
            type_min: Duration::from_millis(min),
            type_max: Duration::from_millis(max),
            hold: Duration::from_millis(config.hold_ms),
            erase: Duration::from_millis(config.erase_delay_ms),
            gap: Duration::from_millis(config.gap_ms),
        }
    }
}

/// Types each entry out, holds it, erases it, then moves to the next,
/// wrapping around. Endless unless limited with [`Typewriter::cycles`].
pub struct Typewriter<R> {
    entries: Vec<ShowcaseEntry>,
    timing: Timing,
    rng: R,
    next_entry: usize,
    cycles_left: Option<usize>,
    pending: VecDeque<Step>,
}

impl<R: Rng> Typewriter<R> {
    pub const fn new(entries: Vec<ShowcaseEntry>, timing: Timing, rng: R) -> Self {
        Self {
            entries,
            timing,
            rng,
            next_entry: 0,
            cycles_left: None,
            pending: VecDeque::new(),
        }
    }

    /// Stop after passing over the entry list `cycles` times.
    #[must_use]
    pub const fn cycles(mut self, cycles: Option<usize>) -> Self {
        self.cycles_left = cycles;
        self
    }

    fn type_delay(&mut self) -> Duration {
        let min = self.timing.type_min.as_millis();
        let max = self.timing.type_max.as_millis();
        #[allow(clippy::cast_possible_truncation)]
        let millis = self.rng.random_range(min..=max) as u64;
        Duration::from_millis(millis)
    }

    fn queue_entry(&mut self, entry: &ShowcaseEntry) {
        let chars: Vec<char> = entry.name.chars().collect();
        let step = |text: String, delay| Step {
            text,
            skill_type: entry.skill_type.clone(),
            delay,
        };

        for typed in 1..=chars.len() {
            let delay = self.type_delay();
            self.pending.push_back(step(chars[..typed].iter().collect(), delay));
        }
        self.pending
            .push_back(step(entry.name.clone(), self.timing.hold));
        for kept in (0..chars.len()).rev() {
            self.pending
                .push_back(step(chars[..kept].iter().collect(), self.timing.erase));
        }
        self.pending.push_back(step(String::new(), self.timing.gap));
    }
}

impl<R: Rng> Iterator for Typewriter<R> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if let Some(step) = self.pending.pop_front() {
            return Some(step);
        }
        if self.entries.is_empty() || self.cycles_left == Some(0) {
            return None;
        }

        let entry = self.entries[self.next_entry].clone();
        self.queue_entry(&entry);
        self.next_entry = (self.next_entry + 1) % self.entries.len();
        if self.next_entry == 0 {
            if let Some(left) = self.cycles_left.as_mut() {
                *left -= 1;
            }
        }
        self.pending.pop_front()
    }
}

fn spinner(config: &ShowcaseConfig) -> Result<ProgressBar> {
    let mut ticks: Vec<&str> = SPINNER_FRAMES.to_vec();
    ticks.push(SPINNER_FRAMES[1]);
    let style = ProgressStyle::with_template("{spinner:.magenta} {msg}")
        .map_err(|err| CatalogError::Config(format!("spinner template: {err}")))?
        .tick_strings(&ticks);

    let bar = ProgressBar::new_spinner();
    bar.set_style(style);
    bar.enable_steady_tick(Duration::from_millis(config.spinner_interval_ms.max(1)));
    Ok(bar)
}

/// Run the animation until the cycle limit is reached or Ctrl-C.
pub async fn run(
    entries: Vec<ShowcaseEntry>,
    config: &ShowcaseConfig,
    cycles: Option<usize>,
    painter: Painter,
) -> Result<()> {
    let bar = spinner(config)?;
    let typewriter = Typewriter::new(entries, Timing::from(config), rand::rng()).cycles(cycles);

    tokio::time::sleep(Duration::from_millis(config.start_delay_ms)).await;

    let animate = async {
        for step in typewriter {
            bar.set_message(match step.skill_type {
                SkillType::Built => painter.bold(&step.text),
                _ => painter.dim(&step.text),
            });
            tokio::time::sleep(step.delay).await;
        }
    };

    tokio::select! {
        () = animate => debug!("cycle limit reached"),
        _ = tokio::signal::ctrl_c() => debug!("interrupted"),
    }

    bar.finish_and_clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn entry(name: &str, skill_type: SkillType) -> ShowcaseEntry {
        ShowcaseEntry {
            name: name.to_string(),
            skill_type,
        }
    }

    fn timing() -> Timing {
        Timing::from(&ShowcaseConfig::default())
    }

    #[test]
    fn types_holds_erases_then_pauses() {
        let steps: Vec<Step> = Typewriter::new(
            vec![entry("Abc", SkillType::Built)],
            timing(),
            StdRng::seed_from_u64(7),
        )
        .cycles(Some(1))
        .collect();

        let texts: Vec<&str> = steps.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "Ab", "Abc", "Abc", "Ab", "A", "", ""]);
        assert_eq!(steps[3].delay, Duration::from_millis(1500));
        assert_eq!(steps[4].delay, Duration::from_millis(30));
        assert_eq!(steps[7].delay, Duration::from_millis(300));
    }

    #[test]
    fn typing_delay_stays_in_range() {
        let steps: Vec<Step> = Typewriter::new(
            vec![entry("A fairly long skill name", SkillType::Built)],
            timing(),
            StdRng::seed_from_u64(42),
        )
        .cycles(Some(1))
        .collect();
        let typed = "A fairly long skill name".chars().count();
        for step in &steps[..typed] {
            assert!(step.delay >= Duration::from_millis(50));
            assert!(step.delay <= Duration::from_millis(80));
        }
    }

    #[test]
    fn multibyte_names_step_per_char() {
        let steps: Vec<Step> = Typewriter::new(
            vec![entry("奇绩", SkillType::Evaluated)],
            timing(),
            StdRng::seed_from_u64(1),
        )
        .cycles(Some(1))
        .collect();
        assert_eq!(steps[0].text, "奇");
        assert_eq!(steps[1].text, "奇绩");
        assert!(steps.iter().all(|s| s.skill_type == SkillType::Evaluated));
    }

    #[test]
    fn cycles_wrap_around_entries() {
        let names: Vec<String> = Typewriter::new(
            vec![entry("A", SkillType::Built), entry("B", SkillType::Evaluated)],
            timing(),
            StdRng::seed_from_u64(3),
        )
        .cycles(Some(2))
        .filter(|s| s.delay == Duration::from_millis(1500))
        .map(|s| s.text)
        .collect();
        assert_eq!(names, vec!["A", "B", "A", "B"]);
    }

    #[test]
    fn unlimited_cycles_keep_going() {
        let count = Typewriter::new(
            vec![entry("A", SkillType::Built)],
            timing(),
            StdRng::seed_from_u64(3),
        )
        .take(1000)
        .count();
        assert_eq!(count, 1000);
    }

    #[test]
    fn empty_entries_yield_nothing() {
        let mut typewriter = Typewriter::new(Vec::new(), timing(), StdRng::seed_from_u64(0));
        assert!(typewriter.next().is_none());
    }

    #[test]
    fn timing_normalizes_inverted_range() {
        let config = ShowcaseConfig {
            type_delay_min_ms: 90,
            type_delay_max_ms: 10,
            ..ShowcaseConfig::default()
        };
        let timing = Timing::from(&config);
        assert_eq!(timing.type_min, Duration::from_millis(10));
        assert_eq!(timing.type_max, Duration::from_millis(90));
    }
}
