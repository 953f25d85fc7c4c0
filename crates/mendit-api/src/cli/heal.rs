//! Healing step shared by `mediate` and `live`: capture a journal entry and
//! a mood, then archive the healed mediation.

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};

use mendit_core::flow::MendFlow;
use mendit_core::healing::{self, HEALING_DELAY, MOOD_OPTIONS};
use mendit_infra::storage::FileKvStore;
use mendit_types::mediation::{HealingReflection, MediationResult};

/// Ask for anything missing and validate the reflection.
pub fn prompt_reflection(
    journal: Option<String>,
    mood: Option<String>,
) -> Result<HealingReflection> {
    let journal = match journal {
        Some(j) => j,
        None => Input::<String>::new()
            .with_prompt("How do you feel about this conflict now?")
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("Write at least a few words")
                } else {
                    Ok(())
                }
            })
            .interact_text()?,
    };

    let mood = match mood {
        Some(m) => m,
        None => {
            let items: Vec<String> = MOOD_OPTIONS
                .iter()
                .map(|m| format!("{} {}", m.emoji, m.label))
                .collect();
            let index = Select::new()
                .with_prompt("Current mood")
                .items(&items)
                .default(0)
                .interact()?;
            MOOD_OPTIONS[index].label.to_string()
        }
    };

    healing::reflect(&journal, &mood).context("invalid healing reflection")
}

/// Heal the flow's current mediation and archive it.
///
/// Returns the archived result, or `None` when nothing was pending.
pub async fn complete(
    flow: &mut MendFlow<FileKvStore>,
    reflection: HealingReflection,
    quiet: bool,
) -> Result<Option<MediationResult>> {
    let spinner = ProgressBar::new_spinner();
    if quiet {
        spinner.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message("Saving your healing journey...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    tokio::time::sleep(HEALING_DELAY).await;
    let archived = flow.complete_healing(reflection).await;

    spinner.finish_and_clear();
    Ok(archived)
}

pub fn print_healed(result: &MediationResult) {
    println!();
    println!(
        "  {} Healing saved to your archive",
        style("✓").green().bold()
    );
    println!(
        "  {}  {}",
        style("ID:").bold(),
        style(&result.id).dim()
    );
    println!(
        "  Review it with: {}",
        style(format!("mendit archive show {}", result.id)).yellow()
    );
    println!();
}
