//! Live mediation chat: create or join a session, talk, then resolve into a
//! summary that goes through healing into the archive.

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Select};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;

use mendit_core::session::{SessionEvent, SessionHost};
use mendit_types::chat::ChatMessage;
use mendit_types::tags::{Relationship, Tone};

use super::{display, heal};
use crate::state::AppState;

/// What a line typed in the chat means.
#[derive(Debug, PartialEq, Eq)]
enum ChatCommand<'a> {
    Say(&'a str),
    Who,
    Resolve,
    Quit,
    Empty,
}

fn parse_line(line: &str) -> ChatCommand<'_> {
    match line.trim() {
        "" => ChatCommand::Empty,
        "/resolve" | "/done" => ChatCommand::Resolve,
        "/quit" | "/exit" => ChatCommand::Quit,
        "/who" => ChatCommand::Who,
        text => ChatCommand::Say(text),
    }
}

fn prompt_name(name: Option<String>) -> Result<String> {
    match name {
        Some(n) => Ok(n),
        None => Ok(Input::<String>::new()
            .with_prompt("Your name")
            .interact_text()?),
    }
}

fn pick<T: Copy>(prompt: &str, all: &[T], label: fn(&T) -> &'static str) -> Result<T> {
    let items: Vec<&str> = all.iter().map(label).collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;
    Ok(all[index])
}

/// Host a new session.
pub async fn create(
    state: &AppState,
    name: Option<String>,
    relationship: Option<String>,
    tone: Option<String>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let name = prompt_name(name)?;
    let relationship = match relationship {
        Some(r) => r.parse::<Relationship>().map_err(|e| anyhow::anyhow!(e))?,
        None => pick("Relationship", &Relationship::ALL, Relationship::label)?,
    };
    let tone = match tone {
        Some(t) => t.parse::<Tone>().map_err(|e| anyhow::anyhow!(e))?,
        None => pick("Tone", &Tone::ALL, Tone::label)?,
    };

    let host = SessionHost::create(&name, relationship.as_str(), tone.as_str(), state.host_options())
        .context("could not start the session")?;

    if !quiet {
        println!();
        println!(
            "  {} Session created. Share this code: {}",
            style("✓").green().bold(),
            style(host.code()).yellow().bold()
        );
    }
    run_chat(state, host, json, quiet).await
}

/// Join a session by code.
pub async fn join(
    state: &AppState,
    code: Option<String>,
    name: Option<String>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let code = match code {
        Some(c) => c,
        None => Input::<String>::new()
            .with_prompt("Session code")
            .interact_text()?,
    };
    let name = prompt_name(name)?;

    let host = SessionHost::join(&code, &name, state.host_options())
        .context("could not join the session")?;

    if !quiet {
        println!();
        println!(
            "  {} Joined session {}",
            style("✓").green().bold(),
            style(host.code()).yellow().bold()
        );
    }
    run_chat(state, host, json, quiet).await
}

fn print_help() {
    println!(
        "  {}",
        style("Type to chat. /who lists participants, /resolve ends and reflects, /quit leaves without saving.")
            .dim()
    );
    println!();
}

fn print_who(host: &SessionHost) {
    let session = host.snapshot();
    println!(
        "  {} {} ({} message{} so far)",
        style("👥").bold(),
        session.participant_names().join(", "),
        session.user_message_count(),
        if session.user_message_count() == 1 { "" } else { "s" }
    );
}

fn render(host: &SessionHost, message: &ChatMessage, quiet: bool) {
    // The local user's own lines are already on screen.
    if quiet || message.user_id == host.user_id() {
        return;
    }
    display::print_live_message(message);
}

async fn run_chat(state: &AppState, host: SessionHost, json: bool, quiet: bool) -> Result<()> {
    let mut events = host.subscribe();

    if !quiet {
        println!();
        for message in &host.snapshot().messages {
            render(&host, message, quiet);
        }
        println!();
        print_help();
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(SessionEvent::MessagePosted { message, .. }) => render(&host, &message, quiet),
                Ok(SessionEvent::TypingChanged { user_id, is_typing: true, .. }) if user_id != host.user_id() => {
                    if let Some(p) = host.snapshot().participant(&user_id) {
                        println!("    {}", style(format!("{} is typing...", p.name)).dim());
                    }
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "chat display fell behind");
                }
                Err(RecvError::Closed) => break,
            },
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("stdin closed, leaving session");
                    return Ok(());
                };
                match parse_line(&line) {
                    ChatCommand::Say(text) => {
                        host.send(text)?;
                    }
                    ChatCommand::Who => print_who(&host),
                    ChatCommand::Resolve => break,
                    ChatCommand::Quit => {
                        if !quiet {
                            println!("  Left session {}. Nothing was saved.", host.code());
                        }
                        return Ok(());
                    }
                    ChatCommand::Empty => {}
                }
            }
        }
    }
    drop(lines);

    let summary = host.resolve()?;
    let session = host.snapshot();
    if !json && !quiet {
        display::print_result(&summary);
    }

    let mut flow = state.flow().await;
    flow.complete_mediation(summary, Some(session));
    let reflection = heal::prompt_reflection(None, None)?;

    match heal::complete(&mut flow, reflection, json || quiet).await? {
        Some(result) if json => println!("{}", serde_json::to_string_pretty(&result)?),
        Some(result) if !quiet => heal::print_healed(&result),
        _ => {}
    }
    Ok(())
}
