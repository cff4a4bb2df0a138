//! Playing a single hand
//!
//! `HandPlay` is the state machine for one hand; `play_hand` drives it from a
//! console until the hand is used up or the player quits.

use super::console::Console;
use crate::config::GameConfig;
use crate::core::{Hand, HandError};
use crate::game::is_valid_word;
use crate::output::{print_hand, print_hand_summary, print_invalid_word, print_word_score};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Input that ends a hand early
pub const QUIT: &str = ".";

/// Prompt shown before every word
pub const WORD_PROMPT: &str = "Enter word, or a \".\" to indicate that you are finished: ";

/// How a hand came to an end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Every letter was played
    Exhausted,
    /// The player stopped with letters left
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Playing,
    Done(HandOutcome),
}

/// What happened to one line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    Quit,
    Rejected,
    Scored { points: u32, total: u32 },
}

/// Final state of a hand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandSummary {
    pub total: u32,
    pub outcome: HandOutcome,
    pub remaining: Hand,
}

/// One hand in progress
pub struct HandPlay<'a> {
    hand: Hand,
    dictionary: &'a Dictionary,
    config: &'a GameConfig,
    total: u32,
    state: TurnState,
}

impl<'a> HandPlay<'a> {
    /// Start playing `hand` with a zero score
    ///
    /// A hand with no letters is finished before it starts.
    #[must_use]
    pub fn new(hand: Hand, dictionary: &'a Dictionary, config: &'a GameConfig) -> Self {
        let state = if hand.is_empty() {
            TurnState::Done(HandOutcome::Exhausted)
        } else {
            TurnState::Playing
        };
        Self {
            hand,
            dictionary,
            config,
            total: 0,
            state,
        }
    }

    /// Letters still available
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Running score for this hand
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub const fn state(&self) -> TurnState {
        self.state
    }

    /// Apply one line of player input
    ///
    /// Once the hand is done every further input is rejected.
    ///
    /// # Errors
    ///
    /// Returns `HandError` if a validated word still could not be taken from
    /// the hand. That means validation and consumption disagree and the hand
    /// can no longer be trusted.
    pub fn submit(&mut self, input: &str) -> Result<TurnEvent, HandError> {
        if self.state != TurnState::Playing {
            return Ok(TurnEvent::Rejected);
        }

        if input == QUIT {
            self.state = TurnState::Done(HandOutcome::Quit);
            return Ok(TurnEvent::Quit);
        }

        if !is_valid_word(input, &self.hand, self.dictionary) {
            debug!(word = input, hand = %self.hand, "rejected word");
            return Ok(TurnEvent::Rejected);
        }

        let hand = self.hand.consume(input)?;
        let points = self
            .config
            .letter_values
            .word_score(input, self.config.hand_size);
        self.total = self.total.saturating_add(points);
        self.hand = hand;
        debug!(word = input, points, total = self.total, "scored word");

        if self.hand.is_empty() {
            self.state = TurnState::Done(HandOutcome::Exhausted);
        }

        Ok(TurnEvent::Scored {
            points,
            total: self.total,
        })
    }

    /// End the hand, treating an unfinished hand as a quit
    #[must_use]
    pub fn finish(self) -> HandSummary {
        let outcome = match self.state {
            TurnState::Done(outcome) => outcome,
            TurnState::Playing => HandOutcome::Quit,
        };
        HandSummary {
            total: self.total,
            outcome,
            remaining: self.hand,
        }
    }
}

/// Play `hand` interactively until it is used up or the player quits
///
/// Closed input counts as quitting.
///
/// # Errors
///
/// Returns an error if console I/O fails or the hand's letter counts become
/// inconsistent.
pub fn play_hand<R: BufRead, W: Write>(
    hand: Hand,
    dictionary: &Dictionary,
    config: &GameConfig,
    console: &mut Console<R, W>,
) -> Result<HandSummary> {
    let mut play = HandPlay::new(hand, dictionary, config);

    while play.state() == TurnState::Playing {
        print_hand(console.output(), play.hand())?;

        let Some(input) = console.prompt(WORD_PROMPT)? else {
            debug!("input closed mid-hand");
            break;
        };

        let event = play
            .submit(&input)
            .with_context(|| format!("hand {} could not spell \"{input}\"", play.hand()))?;

        match event {
            TurnEvent::Quit => {}
            TurnEvent::Rejected => print_invalid_word(console.output())?,
            TurnEvent::Scored { points, total } => {
                print_word_score(console.output(), &input, points, total)?;
            }
        }
    }

    let summary = play.finish();
    print_hand_summary(console.output(), &summary)?;
    Ok(summary)
}
