//! Exhaustive checks of the solver over every reachable position

use std::collections::HashSet;

use noughts::{
    Board, GameStatus, Player, SearchConfig, Solver, best_move,
    solver::{LOWER_SENTINEL, UPPER_SENTINEL, search},
};

/// Every position reachable from the empty board with X moving first,
/// paired with the side to move. Decided boards are included.
fn reachable_positions() -> Vec<(Board, Player)> {
    fn walk(board: Board, mover: Player, seen: &mut HashSet<Board>, out: &mut Vec<(Board, Player)>) {
        if !seen.insert(board) {
            return;
        }
        out.push((board, mover));
        if board.is_terminal() {
            return;
        }
        for position in board.available_moves() {
            let next = board.with_move(position, mover).unwrap();
            walk(next, mover.opponent(), seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(Board::new(), Player::X, &mut seen, &mut out);
    out
}

fn board(s: &str) -> Board {
    Board::from_string(s).unwrap()
}

#[test]
fn reachable_position_count() {
    let positions = reachable_positions();
    assert_eq!(positions.len(), 5478);
    assert!(positions.iter().all(|(b, _)| b.is_valid()));
}

#[test]
fn best_move_is_always_an_empty_cell() {
    let solver = Solver::new();
    for (board, mover) in reachable_positions() {
        match solver.best_move(&board, mover) {
            Some(position) => assert!(
                board.is_empty(position),
                "{} -> occupied cell {position}",
                board.encode()
            ),
            None => assert_eq!(board.empty_count(), 0, "{}", board.encode()),
        }
    }
}

#[test]
fn pruning_never_changes_the_answer() {
    let pruned = Solver::new();
    let plain = Solver::with_config(SearchConfig { pruning: false });
    for (board, mover) in reachable_positions() {
        if board.is_terminal() {
            continue;
        }
        let a = pruned.analyze(&board, mover);
        let b = plain.analyze(&board, mover);
        assert_eq!(a.scores, b.scores, "{}", board.encode());
        assert_eq!(a.best, b.best, "{}", board.encode());
        assert!(a.stats.nodes <= b.stats.nodes);
    }
}

#[test]
fn answers_are_deterministic() {
    let solver = Solver::new();
    for (board, mover) in reachable_positions().into_iter().step_by(7) {
        let first = solver.best_move(&board, mover);
        assert_eq!(solver.best_move(&board, mover), first);
        assert_eq!(best_move(&board, mover), first);
    }
}

#[test]
fn evaluation_agrees_with_line_detection() {
    for (board, _) in reachable_positions() {
        let expected = match (board.has_won(Player::X), board.has_won(Player::O)) {
            (true, false) => -1,
            (false, true) => 1,
            (false, false) => 0,
            (true, true) => unreachable!("both sides won on {}", board.encode()),
        };
        assert_eq!(board.evaluate(), expected, "{}", board.encode());
    }
}

#[test]
fn chosen_move_keeps_the_position_value() {
    let solver = Solver::new();
    for (board, mover) in reachable_positions() {
        if board.is_terminal() {
            continue;
        }
        let mut work = board;
        let value = search(
            &mut work,
            board.empty_count(),
            LOWER_SENTINEL,
            UPPER_SENTINEL,
            mover.is_maximizer(),
        );
        assert_eq!(work, board);
        assert_eq!(
            solver.analyze(&board, mover).value(),
            Some(value),
            "{}",
            board.encode()
        );
    }
}

/// Plays the solver's side against every possible reply sequence
fn never_loses(board: Board, to_move: Player, solver_side: Player, solver: &Solver) -> bool {
    match board.status() {
        GameStatus::Won(winner) => return winner == solver_side,
        GameStatus::Draw => return true,
        GameStatus::InProgress => {}
    }

    if to_move == solver_side {
        let Some(position) = solver.best_move(&board, to_move) else {
            return false;
        };
        let next = board.with_move(position, to_move).unwrap();
        never_loses(next, to_move.opponent(), solver_side, solver)
    } else {
        board.available_moves().into_iter().all(|position| {
            let next = board.with_move(position, to_move).unwrap();
            never_loses(next, to_move.opponent(), solver_side, solver)
        })
    }
}

#[test]
fn solver_never_loses_from_the_empty_board() {
    let solver = Solver::new();
    for first in [Player::X, Player::O] {
        for side in [Player::X, Player::O] {
            assert!(
                never_loses(Board::new(), first, side, &solver),
                "solver as {side} lost with {first} opening"
            );
        }
    }
}

#[test]
fn optimal_self_play_draws() {
    let solver = Solver::new();
    for first in [Player::X, Player::O] {
        let mut board = Board::new();
        let mut mover = first;
        while !board.is_terminal() {
            let position = solver.best_move(&board, mover).unwrap();
            board.place(position, mover).unwrap();
            mover = mover.opponent();
        }
        assert_eq!(board.status(), GameStatus::Draw, "{first} opening");
    }
}

#[test]
fn known_positions() {
    let cases = [
        ("X...X...O", Player::O, Some(2)),
        ("XX.OO....", Player::O, Some(2)),
        ("XX.OO....", Player::X, Some(2)),
        (".........", Player::X, Some(0)),
        (".........", Player::O, Some(0)),
        ("X........", Player::O, Some(4)),
        ("XOXOOXX..", Player::O, Some(7)),
        ("X.O.X....", Player::O, Some(8)),
        ("XOXXOOOX.", Player::X, Some(8)),
        ("OO..X.X..", Player::X, Some(2)),
        ("XOXXOOOXX", Player::O, None),
    ];
    for (text, mover, expected) in cases {
        assert_eq!(best_move(&board(text), mover), expected, "{text} {mover}");
    }
}
