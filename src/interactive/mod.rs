//! Interactive text-mode play
//!
//! The console wrapper, the per-hand turn loop and the session loop.

mod console;
mod session;
mod turn;

pub use console::Console;
pub use session::{COMMAND_PROMPT, Session, SessionCommand, SessionSummary};
pub use turn::{
    HandOutcome, HandPlay, HandSummary, QUIT, TurnEvent, TurnState, WORD_PROMPT, play_hand,
};
