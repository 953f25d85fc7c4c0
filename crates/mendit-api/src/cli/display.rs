//! Shared terminal rendering for mediation results.

use chrono::{DateTime, Utc};
use console::style;

use mendit_core::healing::mood;
use mendit_types::chat::{ChatMessage, MessageKind};
use mendit_types::mediation::MediationResult;
use mendit_types::tags::{Relationship, Tone};

/// Tone label with emoji, or the raw tag if unknown.
pub fn tone_label(tone: &str) -> String {
    tone.parse::<Tone>()
        .map(|t| t.label().to_string())
        .unwrap_or_else(|_| tone.to_string())
}

pub fn relationship_label(relationship: &str) -> String {
    relationship
        .parse::<Relationship>()
        .map(|r| r.label().to_string())
        .unwrap_or_else(|_| relationship.to_string())
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y %H:%M").to_string()
}

fn section(title: &str) {
    println!();
    println!("  {}", style(title).bold().underlined());
}

fn bullets(items: Option<&Vec<String>>) {
    for item in items.into_iter().flatten() {
        println!("    {} {}", style("•").dim(), item);
    }
}

fn print_message(message: &ChatMessage) {
    match message.kind {
        MessageKind::User => println!(
            "    {} {}",
            style(format!("{}:", message.user_name)).cyan().bold(),
            message.message
        ),
        MessageKind::Ai => println!(
            "    {} {}",
            style(format!("{}:", message.user_name)).magenta().bold(),
            message.message
        ),
        MessageKind::System => println!("    {}", style(&message.message).dim().italic()),
    }
}

/// Live sessions keep their closing summary in the peace plan field.
fn plan_title(result: &MediationResult) -> &'static str {
    if result.session_id.is_some() {
        "Session summary"
    } else {
        "Peace plan"
    }
}

/// Print one live chat message as it arrives.
pub fn print_live_message(message: &ChatMessage) {
    print_message(message);
}

/// Full view of a mediation result.
pub fn print_result(result: &MediationResult) {
    println!();
    println!(
        "  {} Mediation {}",
        style("🕊").bold(),
        style(&result.id).dim()
    );
    println!(
        "  {}  {}",
        style("Date:").bold(),
        format_date(&result.date)
    );
    println!(
        "  {}  {}",
        style("Relationship:").bold(),
        relationship_label(&result.relationship)
    );
    println!("  {}  {}", style("Tone:").bold(), tone_label(&result.tone));
    if let Some(session_id) = &result.session_id {
        println!("  {}  {}", style("Session:").bold(), style(session_id).cyan());
    }

    if result.summaries.is_some() {
        section("What each side is saying");
        bullets(result.summaries.as_ref());
    }
    if result.misunderstandings.is_some() {
        section("Possible misunderstandings");
        bullets(result.misunderstandings.as_ref());
    }
    if result.shared_themes.is_some() {
        section("Common ground");
        bullets(result.shared_themes.as_ref());
    }
    if let Some(plan) = &result.peace_plan {
        section(plan_title(result));
        for line in plan.lines() {
            println!("    {line}");
        }
    }
    if let Some(messages) = &result.chat_messages {
        section("Conversation");
        for message in messages {
            print_message(message);
        }
    }

    match result.healing_reflection() {
        Some(reflection) => {
            let emoji = mood(&reflection.mood).map(|m| m.emoji).unwrap_or("");
            section("Healing reflection");
            println!(
                "    {} {} {}",
                style("Feeling").green(),
                style(&reflection.mood).green().bold(),
                emoji
            );
            for line in reflection.journal.lines() {
                println!("    {}", style(line).italic());
            }
        }
        None => {
            println!();
            println!("  {} Not yet healed", style("○").yellow());
        }
    }
    println!();
}
