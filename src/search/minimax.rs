use super::*;
use crate::CONNECT;
use crate::board::Board;
use crate::board::Seat;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Depth-limited minimax with alpha-beta pruning.
///
/// Each node starts from a uniformly random valid column and only replaces
/// it with a column whose value is strictly better, so among equally valued
/// columns the first explored wins unless the random default already holds
/// the best value. The random source is owned so a seeded search replays
/// identically.
#[derive(Debug, Clone)]
pub struct Minimax {
    depth: usize,
    rng: SmallRng,
    nodes: usize,
}

impl Minimax {
    pub fn new(depth: usize) -> Self {
        Self::from_rng(depth, SmallRng::from_os_rng())
    }
    pub fn seeded(depth: usize, seed: u64) -> Self {
        Self::from_rng(depth, SmallRng::seed_from_u64(seed))
    }
    fn from_rng(depth: usize, rng: SmallRng) -> Self {
        Self {
            depth: depth.max(1),
            rng,
            nodes: 0,
        }
    }
    pub fn depth(&self) -> usize {
        self.depth
    }
    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Best column for `seat` to play, with its search value.
    /// None when the position is already decided or the board is full.
    pub fn best_move(&mut self, board: &Board, seat: Seat) -> Option<(usize, Value)> {
        self.nodes = 0;
        let (column, value) = self.search(board, self.depth, Value::Loss, Value::Win, true, seat);
        column.map(|c| (c, value))
    }

    fn search(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: Value,
        mut beta: Value,
        maximizing: bool,
        seat: Seat,
    ) -> (Option<usize>, Value) {
        self.nodes += 1;
        let moves = board.valid_moves();
        if let Some(value) = Self::terminal(board, &moves, depth, seat) {
            return (None, value);
        }
        let mut best = moves.choose(&mut self.rng).copied();
        if maximizing {
            let mut value = Value::Loss;
            for &col in moves.iter() {
                let child = match board.apply(col, seat) {
                    Ok(child) => child,
                    Err(_) => continue,
                };
                let (_, score) = self.search(&child, depth - 1, alpha, beta, false, seat);
                if score > value {
                    value = score;
                    best = Some(col);
                }
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }
            (best, value)
        } else {
            let mut value = Value::Win;
            for &col in moves.iter() {
                let child = match board.apply(col, seat.opponent()) {
                    Ok(child) => child,
                    Err(_) => continue,
                };
                let (_, score) = self.search(&child, depth - 1, alpha, beta, true, seat);
                if score < value {
                    value = score;
                    best = Some(col);
                }
                beta = beta.min(value);
                if alpha >= beta {
                    break;
                }
            }
            (best, value)
        }
    }

    /// Static value if the node ends the search, from `seat`'s view.
    fn terminal(board: &Board, moves: &[usize], depth: usize, seat: Seat) -> Option<Value> {
        if board.has_run(seat, CONNECT) {
            Some(Value::Win)
        } else if board.has_run(seat.opponent(), CONNECT) {
            Some(Value::Loss)
        } else if moves.is_empty() {
            Some(Value::Draw)
        } else if depth == 0 {
            Some(Value::Heuristic(score(board, seat)))
        } else {
            None
        }
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new(crate::SEARCH_DEPTH)
    }
}
