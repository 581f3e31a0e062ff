//! Agent adapters: the exact solver and baseline opponents

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Result,
    ports::Agent,
    solver::{SearchConfig, Solver},
    tictactoe::{Board, LineAnalyzer, Player},
};

/// The exact solver as an agent
pub struct SolverAgent {
    name: String,
    solver: Solver,
}

impl SolverAgent {
    pub fn new(name: String) -> Self {
        Self::with_config(name, SearchConfig::default())
    }

    pub fn with_config(name: String, config: SearchConfig) -> Self {
        Self {
            name,
            solver: Solver::with_config(config),
        }
    }
}

impl Agent for SolverAgent {
    fn select_move(&mut self, board: &Board, mover: Player) -> Result<usize> {
        self.solver
            .best_move(board, mover)
            .ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Uniformly random opponent
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _mover: Player) -> Result<usize> {
        let moves = board.available_moves();
        if moves.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Wins when it can, blocks when it must, otherwise plays randomly
pub struct DefensiveAgent {
    name: String,
    fallback: RandomAgent,
}

impl DefensiveAgent {
    pub fn new(name: String) -> Self {
        let fallback = RandomAgent::new(format!("{name} (fallback)"));
        Self { name, fallback }
    }

    pub fn with_seed(name: String, seed: u64) -> Self {
        let fallback = RandomAgent::with_seed(format!("{name} (fallback)"), seed);
        Self { name, fallback }
    }
}

impl Agent for DefensiveAgent {
    fn select_move(&mut self, board: &Board, mover: Player) -> Result<usize> {
        let cells = board.cells();
        if let Some(&win) = LineAnalyzer::winning_moves(cells, mover).first() {
            return Ok(win);
        }
        if let Some(&block) = LineAnalyzer::winning_moves(cells, mover.opponent()).first() {
            return Ok(block);
        }
        self.fallback.select_move(board, mover)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
