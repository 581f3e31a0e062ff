//! Board representation, parsing and terminal-state predicates

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{game::GameStatus, lines::LineAnalyzer};
use crate::solver::Score;

/// Number of cells on the board
pub const BOARD_CELLS: usize = 9;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Parse a cell symbol. A space is accepted as Empty because the web
    /// front end serializes empty cells that way.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X is the first player, O the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Whether this player maximizes the search score.
    ///
    /// Scores are always expressed from O's point of view: +1 means O has
    /// won, -1 means X has won. O therefore maximizes and X minimizes.
    pub fn is_maximizer(self) -> bool {
        matches!(self, Player::O)
    }

    /// Parse "x"/"o" in either case.
    pub fn parse(token: &str) -> Result<Player, crate::Error> {
        match token.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayerString {
                player: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Player::parse(s)
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

/// Nine cells, row-major (`index = row * 3 + col`).
///
/// The board carries no turn information; the side to move is supplied by
/// the caller or inferred with [`Board::side_to_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::from_cells([Cell::Empty; BOARD_CELLS])
    }

    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Board { cells }
    }

    /// Parse a board from exactly nine cell symbols.
    ///
    /// `X`/`x` and `O`/`o` are marks, `.` and a space are empty cells. Any
    /// other symbol or length is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts::tictactoe::{Board, Cell};
    ///
    /// let board = Board::from_string("XO.......").unwrap();
    /// assert_eq!(board.get(1), Cell::O);
    /// assert!(Board::from_string("XO").is_err());
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != BOARD_CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Nine-character form with `.` for empty cells
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    pub fn piece_count(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// All empty positions in ascending order.
    ///
    /// This is the enumeration and tie-break order of the search.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Place a mark into an empty cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is out of range or already occupied.
    pub fn place(&mut self, pos: usize, player: Player) -> Result<(), crate::Error> {
        if pos >= BOARD_CELLS {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::CellOccupied { position: pos });
        }
        self.cells[pos] = player.to_cell();
        Ok(())
    }

    /// Copy of the board with one more mark placed
    #[must_use = "with_move returns a new board; the original is unchanged"]
    pub fn with_move(&self, pos: usize, player: Player) -> Result<Board, crate::Error> {
        let mut next = *self;
        next.place(pos, player)?;
        Ok(next)
    }

    /// Write a cell without legality checks. Only the search probe uses this.
    pub(crate) fn set_unchecked(&mut self, pos: usize, cell: Cell) {
        self.cells[pos] = cell;
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// True when no cell is empty. Check for a winner first: a full board
    /// with a winning line is a win, not a draw.
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Terminal score: +1 if O has a line, -1 if X does, 0 otherwise.
    ///
    /// Ongoing and drawn positions both score 0.
    pub fn evaluate(&self) -> Score {
        if self.has_won(Player::O) {
            1
        } else if self.has_won(Player::X) {
            -1
        } else {
            0
        }
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_draw()
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None if self.is_draw() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Infer whose turn it is from the piece counts, assuming X moved first.
    ///
    /// # Errors
    ///
    /// Returns error if the counts cannot arise from an X-first game.
    pub fn side_to_move(&self) -> Result<Player, crate::Error> {
        let count = self.piece_count();
        if count.x == count.o {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
