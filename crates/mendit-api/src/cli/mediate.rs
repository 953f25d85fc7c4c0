//! Written mediation: describe each side, get summaries and a peace plan,
//! then reflect and archive.

use anyhow::{bail, Result};
use clap::Args;
use console::style;
use dialoguer::{Confirm, Input, Select};

use mendit_core::mediation::MediationGenerator;
use mendit_types::person::{Person, placeholder_name};
use mendit_types::tags::{Relationship, Tone};

use super::{display, heal};
use crate::state::AppState;

const MIN_PEOPLE: usize = 2;

#[derive(Args)]
pub struct MediateArgs {
    /// Relationship between the people involved.
    #[arg(long, short)]
    pub relationship: Option<String>,

    /// Mediation tone. Defaults to your quiz recommendation.
    #[arg(long, short)]
    pub tone: Option<String>,

    /// One side of the conflict as "Name: statement". Repeat per person.
    #[arg(long, short)]
    pub person: Vec<String>,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Healing journal entry.
    #[arg(long)]
    pub journal: Option<String>,

    /// Healing mood (Peaceful, Grateful, Relieved, Empowered, Hopeful, Connected).
    #[arg(long)]
    pub mood: Option<String>,

    /// Stop after the mediation; nothing is archived.
    #[arg(long)]
    pub no_heal: bool,
}

/// Split `"Name: statement"`. Without a colon the whole text is the
/// statement and the name is left blank.
pub fn parse_person(raw: &str) -> Result<Person> {
    let (name, statement) = match raw.split_once(':') {
        Some((name, statement)) => (name.trim(), statement.trim()),
        None => ("", raw.trim()),
    };
    if statement.is_empty() {
        bail!("person '{raw}' has no statement");
    }
    Ok(Person::new(name, statement))
}

fn pick_relationship(arg: Option<String>) -> Result<Relationship> {
    if let Some(r) = arg {
        return r.parse::<Relationship>().map_err(|e| anyhow::anyhow!(e));
    }
    let items: Vec<&str> = Relationship::ALL.iter().map(Relationship::label).collect();
    let index = Select::new()
        .with_prompt("Relationship")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Relationship::ALL[index])
}

fn pick_tone(arg: Option<String>, suggested: Option<&str>) -> Result<Tone> {
    if let Some(t) = arg {
        return t.parse::<Tone>().map_err(|e| anyhow::anyhow!(e));
    }
    let suggested = suggested.and_then(|s| s.parse::<Tone>().ok());
    let items: Vec<String> = Tone::ALL
        .iter()
        .map(|t| match suggested {
            Some(s) if s == *t => format!("{} (recommended)", t.label()),
            _ => t.label().to_string(),
        })
        .collect();
    let default = suggested
        .and_then(|s| Tone::ALL.iter().position(|t| *t == s))
        .unwrap_or(0);
    let index = Select::new()
        .with_prompt("Tone")
        .items(&items)
        .default(default)
        .interact()?;
    Ok(Tone::ALL[index])
}

fn prompt_people() -> Result<Vec<Person>> {
    let mut people = Vec::new();
    loop {
        let index = people.len();
        let name: String = Input::new()
            .with_prompt(format!("Name ({})", placeholder_name(index)))
            .allow_empty(true)
            .interact_text()?;
        let statement: String = Input::new()
            .with_prompt("What's their side of it?")
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("A statement is required")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;
        people.push(Person::new(name.trim(), statement.trim()));

        if people.len() >= MIN_PEOPLE
            && !Confirm::new()
                .with_prompt("Add another person?")
                .default(false)
                .interact()?
        {
            return Ok(people);
        }
    }
}

/// Run a written mediation end to end.
pub async fn run(state: &AppState, args: MediateArgs, json: bool, quiet: bool) -> Result<()> {
    let mut flow = state.flow().await;

    let relationship = pick_relationship(args.relationship)?;
    let tone = pick_tone(args.tone, flow.default_tone())?;

    let people = if args.person.is_empty() {
        prompt_people()?
    } else {
        args.person
            .iter()
            .map(|raw| parse_person(raw))
            .collect::<Result<Vec<_>>>()?
    };
    if people.len() < MIN_PEOPLE {
        bail!("a mediation needs at least {MIN_PEOPLE} people, got {}", people.len());
    }

    let mut generator = match args.seed {
        Some(seed) => MediationGenerator::seeded(seed),
        None => MediationGenerator::from_entropy(),
    };
    let result = generator.generate_result(people, relationship.as_str(), tone.as_str());

    if !json && !quiet {
        display::print_result(&result);
    }

    if args.no_heal {
        if json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        return Ok(());
    }

    flow.complete_mediation(result, None);
    let reflection = heal::prompt_reflection(args.journal, args.mood)?;
    let archived = heal::complete(&mut flow, reflection, json || quiet).await?;

    match archived {
        Some(result) if json => println!("{}", serde_json::to_string_pretty(&result)?),
        Some(result) if !quiet => heal::print_healed(&result),
        Some(_) => {}
        None => println!(
            "  {} Nothing to heal",
            style("i").blue().bold()
        ),
    }
    Ok(())
}
