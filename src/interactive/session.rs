//! Session loop
//!
//! Lets the player deal new hands, replay the last one from its original
//! letters, or stop.

use super::console::Console;
use super::turn::{HandSummary, play_hand};
use crate::config::GameConfig;
use crate::core::Hand;
use crate::game::Dealer;
use crate::output::{print_invalid_command, print_no_hand_yet, print_session_summary};
use crate::wordlists::Dictionary;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Prompt shown between hands
pub const COMMAND_PROMPT: &str =
    "Enter n to deal a new hand, r to replay the last hand, or e to end game: ";

/// Choice made at the session prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Deal and play a fresh hand
    New,
    /// Replay the last dealt hand from the start
    Replay,
    /// End the session
    Exit,
}

impl SessionCommand {
    /// Parse a command; only the exact single letters are accepted
    ///
    /// # Examples
    /// ```
    /// use word_hand::interactive::SessionCommand;
    ///
    /// assert_eq!(SessionCommand::parse("n"), Some(SessionCommand::New));
    /// assert_eq!(SessionCommand::parse("nr"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "n" => Some(Self::New),
            "r" => Some(Self::Replay),
            "e" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Totals across every hand of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub hands_played: usize,
    pub best_score: Option<u32>,
}

/// One player's run of hands
pub struct Session<'a, D: Dealer> {
    config: GameConfig,
    dictionary: &'a Dictionary,
    dealer: D,
    last_hand: Option<Hand>,
    summary: SessionSummary,
}

impl<'a, D: Dealer> Session<'a, D> {
    pub const fn new(config: GameConfig, dictionary: &'a Dictionary, dealer: D) -> Self {
        Self {
            config,
            dictionary,
            dealer,
            last_hand: None,
            summary: SessionSummary {
                hands_played: 0,
                best_score: None,
            },
        }
    }

    /// The last hand dealt, as it was before any letters were played
    #[must_use]
    pub const fn last_hand(&self) -> Option<&Hand> {
        self.last_hand.as_ref()
    }

    /// Run the command loop until the player exits or input closes
    ///
    /// # Errors
    ///
    /// Returns an error if console I/O fails or a hand's letter counts become
    /// inconsistent.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<SessionSummary> {
        loop {
            let Some(input) = console.prompt(COMMAND_PROMPT)? else {
                debug!("input closed at command prompt");
                break;
            };

            match SessionCommand::parse(&input) {
                Some(SessionCommand::New) => {
                    let hand = self.dealer.deal(self.config.hand_size);
                    info!(%hand, "new hand");
                    self.last_hand = Some(hand.clone());
                    self.play(hand, console)?;
                }
                Some(SessionCommand::Replay) => match self.last_hand.clone() {
                    Some(hand) => {
                        info!(%hand, "replaying hand");
                        self.play(hand, console)?;
                    }
                    None => print_no_hand_yet(console.output())?,
                },
                Some(SessionCommand::Exit) => break,
                None => {
                    debug!(input = %input, "unknown command");
                    print_invalid_command(console.output())?;
                }
            }
        }

        print_session_summary(console.output(), &self.summary)?;
        Ok(self.summary)
    }

    fn play<R: BufRead, W: Write>(
        &mut self,
        hand: Hand,
        console: &mut Console<R, W>,
    ) -> Result<HandSummary> {
        let result = play_hand(hand, self.dictionary, &self.config, console)?;

        self.summary.hands_played += 1;
        self.summary.best_score = Some(
            self.summary
                .best_score
                .map_or(result.total, |best| best.max(result.total)),
        );
        info!(
            total = result.total,
            outcome = ?result.outcome,
            hands_played = self.summary.hands_played,
            "hand finished"
        );

        Ok(result)
    }
}
