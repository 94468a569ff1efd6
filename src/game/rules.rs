//! Round resolution.
//!
//! The table, rows by player move and columns by computer move:
//!
//! ```text
//!              Rock          Paper         Scissors
//! Rock         Tie           ComputerWin   PlayerWin
//! Paper        PlayerWin     Tie           ComputerWin
//! Scissors     ComputerWin   PlayerWin     Tie
//! ```

use crate::game::{Move, Outcome};

/// Decide the outcome of one round.
#[must_use]
pub fn resolve(player: Move, computer: Move) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats(computer) {
        Outcome::PlayerWin
    } else {
        Outcome::ComputerWin
    }
}

/// Human-readable description of a resolved round.
///
/// The verb comes from the winning move, so a scissors win reads
/// `"Scissors cuts Paper. Player wins!"`.
#[must_use]
pub fn describe(player: Move, computer: Move, outcome: Outcome) -> String {
    match outcome {
        Outcome::Tie => "It's a tie!".to_string(),
        Outcome::PlayerWin => format!("{player} {} {computer}. Player wins!", player.verb()),
        Outcome::ComputerWin => {
            format!("{computer} {} {player}. Computer wins!", computer.verb())
        }
    }
}
