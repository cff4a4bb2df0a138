//! Display functions for game events and command results

use super::formatters::{points, score_breakdown, tiles};
use crate::commands::{DealReport, ScoreResult, Suggestion};
use crate::core::Hand;
use crate::interactive::{HandOutcome, HandSummary, SessionSummary};
use colored::Colorize;
use std::io::{self, Write};

/// Print the letters still in play
pub fn print_hand<W: Write>(out: &mut W, hand: &Hand) -> io::Result<()> {
    writeln!(out, "{}", format!("Current hand: {hand}").bold())
}

/// Print the notice for a word that cannot be played
pub fn print_invalid_word<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Invalid word, please try again.".red())?;
    writeln!(out)
}

/// Print the score for one accepted word and the running total
pub fn print_word_score<W: Write>(
    out: &mut W,
    word: &str,
    score: u32,
    total: u32,
) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("\"{word}\" earned {}. Total: {}", points(score), points(total)).green()
    )?;
    writeln!(out)
}

/// Print how a hand ended and its final score
pub fn print_hand_summary<W: Write>(out: &mut W, summary: &HandSummary) -> io::Result<()> {
    let line = match summary.outcome {
        HandOutcome::Exhausted => {
            format!("Run out of letters. Total score: {}.", points(summary.total))
        }
        HandOutcome::Quit => format!("Goodbye! Total score: {}.", points(summary.total)),
    };
    writeln!(out, "{}", line.bright_cyan().bold())?;
    writeln!(out)
}

/// Print the notice for an unknown session command
pub fn print_invalid_command<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Invalid command.".red())
}

/// Print the notice for replaying before any hand was dealt
pub fn print_no_hand_yet<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "You have not played a hand yet. Please play a new hand first!".yellow()
    )?;
    writeln!(out)
}

/// Print the end-of-session recap
pub fn print_session_summary<W: Write>(out: &mut W, summary: &SessionSummary) -> io::Result<()> {
    writeln!(out)?;
    match summary.best_score {
        Some(best) => writeln!(
            out,
            "{}",
            format!(
                "Hands played: {}. Best hand: {}.",
                summary.hands_played,
                points(best)
            )
            .bright_white()
        ),
        None => writeln!(out, "{}", "No hands played.".bright_black()),
    }
}

/// Print the result of the `score` command
pub fn print_score_result<W: Write>(out: &mut W, result: &ScoreResult) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(40).cyan())?;
    writeln!(
        out,
        "Word:   {}",
        result.word.to_uppercase().bright_yellow().bold()
    )?;
    writeln!(
        out,
        "Score:  {}",
        points(result.total).bright_green().bold()
    )?;
    writeln!(
        out,
        "        {}",
        score_breakdown(result.letter_sum, result.length, result.bonus)
    )?;
    writeln!(out, "{}", "─".repeat(40).cyan())
}

/// Print the result of the `suggest` command
pub fn print_suggestion<W: Write>(out: &mut W, suggestion: &Suggestion) -> io::Result<()> {
    writeln!(out, "Hand:   {}", tiles(&suggestion.hand.letters()))?;
    match &suggestion.best {
        Some((word, score)) => writeln!(
            out,
            "Best:   {} for {}",
            word.to_uppercase().bright_yellow().bold(),
            points(*score).bright_green()
        ),
        None => writeln!(out, "{}", "No dictionary word fits this hand.".red()),
    }
}

/// Print the result of the `deal` command
pub fn print_deal<W: Write>(out: &mut W, report: &DealReport) -> io::Result<()> {
    writeln!(out, "{}", tiles(&report.hand.letters()).bright_white().bold())?;
    writeln!(
        out,
        "{} letters: {} vowels, {} consonants",
        report.hand.remaining_count(),
        report.vowels,
        report.consonants
    )
}
