//! Archive CLI commands: list, show, stats, clear.

use anyhow::{bail, Context, Result};
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;
use dialoguer::Confirm;

use mendit_core::archive::{ArchiveFilter, ArchiveQuery, ArchiveStats};
use mendit_types::mediation::MediationResult;

use super::display;
use crate::state::AppState;

const SHORT_ID_LEN: usize = 8;

fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

fn people_cell(result: &MediationResult) -> String {
    let names = result.people_names();
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}

/// Find a record by full id or an unambiguous id prefix.
fn lookup<'a>(archive: &'a [MediationResult], id: &str) -> Result<&'a MediationResult> {
    if let Some(exact) = archive.iter().find(|r| r.id == id) {
        return Ok(exact);
    }
    let mut hits = archive.iter().filter(|r| r.id.starts_with(id));
    match (hits.next(), hits.next()) {
        (Some(hit), None) if !id.is_empty() => Ok(hit),
        (Some(_), Some(_)) => bail!("id prefix '{id}' matches more than one mediation"),
        _ => bail!("no archived mediation with id '{id}'"),
    }
}

fn print_stats_line(stats: &ArchiveStats) {
    println!(
        "  {} total   {} healed   {} in progress",
        style(stats.total).bold(),
        style(stats.healed).green().bold(),
        style(stats.unhealed()).yellow().bold()
    );
}

/// List archived mediations, newest first, with search and facet filter.
pub async fn list(state: &AppState, search: Option<String>, filter: &str, json: bool) -> Result<()> {
    let filter = filter
        .parse::<ArchiveFilter>()
        .map_err(|e| anyhow::anyhow!(e))?;
    let query = ArchiveQuery::new(search.unwrap_or_default(), filter);

    let archive = state.archive().list().await;
    let stats = ArchiveStats::from_results(&archive);
    let hits = query.apply(&archive);
    tracing::debug!(total = stats.total, hits = hits.len(), filter = %query.filter, "archive queried");

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    println!();
    print_stats_line(&stats);

    if hits.is_empty() {
        println!();
        if archive.is_empty() {
            println!(
                "  {} Your archive is empty. Start with: {}",
                style("i").blue().bold(),
                style("mendit mediate").yellow()
            );
        } else {
            println!(
                "  {} No mediations match your search.",
                style("i").blue().bold()
            );
        }
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ID").fg(Color::White),
        Cell::new("Date").fg(Color::White),
        Cell::new("People").fg(Color::White),
        Cell::new("Relationship").fg(Color::White),
        Cell::new("Tone").fg(Color::White),
        Cell::new("Status").fg(Color::White),
    ]);

    for result in &hits {
        let status_cell = match result.healing_reflection() {
            Some(reflection) => Cell::new(format!("● healed ({})", reflection.mood)).fg(Color::Green),
            None => Cell::new("○ in progress").fg(Color::Yellow),
        };
        let kind = if result.session_id.is_some() { " (live)" } else { "" };

        table.add_row(vec![
            Cell::new(short_id(&result.id)).fg(Color::DarkGrey),
            Cell::new(display::format_date(&result.date)),
            Cell::new(format!("{}{kind}", people_cell(result))).fg(Color::Cyan),
            Cell::new(display::relationship_label(&result.relationship)),
            Cell::new(display::tone_label(&result.tone)),
            status_cell,
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} result{}",
        style(hits.len()).bold(),
        if hits.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// Show one mediation in full.
pub async fn show(state: &AppState, id: &str, json: bool) -> Result<()> {
    let archive = state.archive().list().await;
    let result = lookup(&archive, id).context("archive lookup failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        display::print_result(result);
    }
    Ok(())
}

pub async fn stats(state: &AppState, json: bool) -> Result<()> {
    let stats = ArchiveStats::from_results(&state.archive().list().await);

    if json {
        let value = serde_json::json!({
            "total": stats.total,
            "healed": stats.healed,
            "unhealed": stats.unhealed(),
            "data_dir": state.data_dir.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!();
    println!("  {} Healing journey", style("🌱").bold());
    println!();
    print_stats_line(&stats);
    println!();
    println!(
        "  {}",
        style(format!("Stored in {}", state.data_dir.display())).dim()
    );
    println!();
    Ok(())
}

/// Delete the whole archive, confirming first unless forced.
pub async fn clear(state: &AppState, force: bool, json: bool) -> Result<()> {
    let archive = state.archive();
    let total = archive.list().await.len();

    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Permanently delete {} archived mediation{}?",
                style(total).red().bold(),
                if total == 1 { "" } else { "s" }
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    if !archive.clear().await {
        bail!("could not clear the archive; see the log for details");
    }

    if json {
        println!("{}", serde_json::json!({ "cleared": total }));
    } else {
        println!();
        println!(
            "  {} Archive cleared ({} removed)",
            style("✓").green().bold(),
            total
        );
        println!();
    }
    Ok(())
}
