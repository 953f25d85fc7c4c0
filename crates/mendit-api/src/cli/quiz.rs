//! Conflict-style quiz CLI commands: take, show, reset.

use anyhow::{bail, Result};
use console::style;
use dialoguer::Select;

use mendit_core::quiz::{QUESTIONS, QuizSession, QuizStep};
use mendit_types::quiz::{ConflictStyle, QuizAnswer};

use super::display;
use crate::state::AppState;

/// Parse `--answers`; exactly one per question.
fn parse_answers(raw: &[String]) -> Result<Vec<QuizAnswer>> {
    let answers = raw
        .iter()
        .map(|a| a.parse::<QuizAnswer>().map_err(|e| anyhow::anyhow!(e)))
        .collect::<Result<Vec<_>>>()?;
    if answers.len() != QUESTIONS.len() {
        bail!(
            "expected {} answers, got {}",
            QUESTIONS.len(),
            answers.len()
        );
    }
    Ok(answers)
}

fn ask(quiz: &mut QuizSession) -> Result<ConflictStyle> {
    loop {
        let question = quiz.current_question();
        println!();
        println!(
            "  {} Question {} of {}  {}",
            style("?").cyan().bold(),
            quiz.current_index() + 1,
            QUESTIONS.len(),
            style(format!("{}%", quiz.progress_percent())).dim()
        );
        let items: Vec<&str> = question.options.iter().map(|o| o.text).collect();
        let index = Select::new()
            .with_prompt(question.question)
            .items(&items)
            .default(0)
            .interact()?;

        if let Some(QuizStep::Complete(style)) = quiz.choose(index) {
            return Ok(style);
        }
    }
}

fn print_style(conflict_style: &ConflictStyle) {
    println!();
    println!(
        "  {} {}",
        style("🧭").bold(),
        style(&conflict_style.style).cyan().bold()
    );
    println!();
    println!("  {}", conflict_style.description);
    println!();
    println!(
        "  {}  {}",
        style("Recommended tone:").bold(),
        display::tone_label(&conflict_style.recommended_tone)
    );
    println!();
}

/// Take the quiz and save the resulting style.
pub async fn take(state: &AppState, answers: Option<Vec<String>>, json: bool) -> Result<()> {
    let mut quiz = QuizSession::new();
    let result = match answers {
        Some(raw) => {
            let mut last = None;
            for answer in parse_answers(&raw)? {
                last = Some(quiz.answer(answer));
            }
            match last {
                Some(QuizStep::Complete(style)) => style,
                _ => bail!("quiz did not complete"),
            }
        }
        None => ask(&mut quiz)?,
    };

    let mut flow = state.flow().await;
    flow.navigate(mendit_types::view::View::Quiz);
    flow.complete_quiz(result.clone()).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!();
    println!("  {} Conflict style saved", style("✓").green().bold());
    print_style(&result);
    println!(
        "  New mediations will default to this tone: {}",
        style("mendit mediate").yellow()
    );
    println!();
    Ok(())
}

pub async fn show(state: &AppState, json: bool) -> Result<()> {
    let saved = state.styles().load().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&saved)?);
        return Ok(());
    }

    match saved {
        Some(conflict_style) => print_style(&conflict_style),
        None => {
            println!();
            println!(
                "  {} No conflict style yet. Take the quiz with: {}",
                style("i").blue().bold(),
                style("mendit quiz take").yellow()
            );
            println!();
        }
    }
    Ok(())
}

pub async fn reset(state: &AppState, json: bool) -> Result<()> {
    if !state.styles().clear().await {
        bail!("could not reset the conflict style; see the log for details");
    }
    if json {
        println!("{}", serde_json::json!({ "reset": true }));
    } else {
        println!("  {} Conflict style cleared", style("✓").green().bold());
    }
    Ok(())
}
