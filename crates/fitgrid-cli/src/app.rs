//! The interactive turn loop.

use anyhow::bail;
use fitgrid_engine::{EmptyHistoryError, GameSession, Offset, PieceId};

use crate::{console::Console, render};

const PIECE_PROMPT: &str =
    "Enter the piece number you want to select (or type 'undo' to undo last move): ";
const X_PROMPT: &str = "Enter the x coordinate for the starting position: ";
const Y_PROMPT: &str = "Enter the y coordinate for the starting position: ";

/// What the player asked for at the piece prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Piece(PieceId),
    Undo,
}

fn parse_selection(input: &str) -> Option<Selection> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("undo") {
        return Some(Selection::Undo);
    }
    input
        .parse::<u32>()
        .ok()
        .map(|id| Selection::Piece(PieceId::new(id)))
}

/// Drives one puzzle run over a [`Console`]: renders the state, prompts
/// for a move, applies it, and repeats until every piece is placed.
///
/// Bad input never aborts the run; it is reported and the loop continues
/// with the next turn. Only end of input is an error.
#[derive(Debug)]
pub struct App<C> {
    session: GameSession,
    console: C,
}

impl<C> App<C>
where
    C: Console,
{
    pub fn new(session: GameSession, console: C) -> Self {
        Self { session, console }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        while self.session.has_available_pieces() {
            self.show_state()?;
            self.play_turn()?;
        }
        self.show_board()?;
        self.console
            .print_line("You have successfully solved the puzzle.")?;
        Ok(())
    }

    fn show_state(&mut self) -> anyhow::Result<()> {
        self.show_board()?;
        self.console.print_line("Available Pieces:")?;
        for piece in self.session.available_pieces() {
            self.console.print_line(&format!("Piece {}:", piece.id()))?;
            for line in render::piece_lines(piece) {
                self.console.print_line(&line)?;
            }
        }
        Ok(())
    }

    fn show_board(&mut self) -> anyhow::Result<()> {
        self.console.print_line("Current board:")?;
        for line in render::board_lines(self.session.board()) {
            self.console.print_line(&line)?;
        }
        Ok(())
    }

    fn play_turn(&mut self) -> anyhow::Result<()> {
        let Some(input) = self.console.prompt_line(PIECE_PROMPT)? else {
            bail!("input ended before the puzzle was solved");
        };
        match parse_selection(&input) {
            None => self
                .console
                .print_line("Invalid piece number. Please try again.")?,
            Some(Selection::Undo) => self.undo()?,
            Some(Selection::Piece(id)) => self.place(id)?,
        }
        Ok(())
    }

    fn undo(&mut self) -> anyhow::Result<()> {
        match self.session.undo_last_move() {
            Ok(id) => self
                .console
                .print_line(&format!("Undid placement of piece {id}."))?,
            Err(EmptyHistoryError) => self.console.print_line("No moves to undo.")?,
        }
        Ok(())
    }

    fn place(&mut self, id: PieceId) -> anyhow::Result<()> {
        if !self.session.is_available(id) {
            self.console
                .print_line("Invalid piece number. Please try again.")?;
            return Ok(());
        }
        let Some(x) = self.prompt_coordinate(X_PROMPT)? else {
            return Ok(());
        };
        let Some(y) = self.prompt_coordinate(Y_PROMPT)? else {
            return Ok(());
        };
        match self.session.place_piece(id, Offset::new(x, y)) {
            Ok(()) => self.console.print_line("Piece added successfully")?,
            Err(err) => self
                .console
                .print_line(&format!("Invalid position for this piece: {err}"))?,
        }
        Ok(())
    }

    /// `None` means the coordinate was unparseable and the turn is over.
    fn prompt_coordinate(&mut self, prompt: &str) -> anyhow::Result<Option<i32>> {
        let Some(input) = self.console.prompt_line(prompt)? else {
            bail!("input ended before the puzzle was solved");
        };
        match input.trim().parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                self.console
                    .print_line("Invalid coordinate. Please enter an integer.")?;
                Ok(None)
            }
        }
    }
}
