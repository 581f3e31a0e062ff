//! Winning line table and line queries

use std::collections::BTreeSet;

use super::{Cell, Player};

/// A winning triple of board indices
pub type Line = [usize; 3];

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Stateless queries over [`WINNING_LINES`]
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player holds all three cells of at least one line
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Lines fully held by the player, in table order
    pub fn completed_lines(cells: &[Cell; 9], player: Player) -> Vec<Line> {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| cells[idx] == target))
            .copied()
            .collect()
    }

    /// Empty squares that would complete a line for the player, ascending
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<usize> {
        let moves: BTreeSet<usize> = WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, player, line))
            .collect();
        moves.into_iter().collect()
    }

    /// Check if a player has two marks and an empty cell on some line
    pub fn has_immediate_win(cells: &[Cell; 9], player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::winning_move_in_line(cells, player, line).is_some())
    }

    fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &Line) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}
