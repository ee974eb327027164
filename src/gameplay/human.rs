use super::player::Player;
use crate::Error;
use crate::Result;
use crate::cards::Board;
use crate::cards::Hole;
use crate::search::Decision;
use dialoguer::Select;

/// A person at the terminal.
#[derive(Debug, Default)]
pub struct Human;

impl Player for Human {
    fn decide(&mut self, hole: Hole, board: Board) -> Result<Decision> {
        let choices = [Decision::Stay, Decision::Fold];
        let labels = choices.map(|d| d.to_string());
        let selection = Select::new()
            .with_prompt(format!("\n{} | YOU HOLD {} | BOARD {}", board.street(), hole, board))
            .report(false)
            .items(&labels)
            .default(0)
            .interact()
            .map_err(|e| Error::Prompt(e.to_string()))?;
        Ok(choices[selection])
    }
}
