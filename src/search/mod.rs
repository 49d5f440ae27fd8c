//! Alpha-beta search with iterative deepening.
//!
//! Features:
//! - Iterative deepening under a soft time budget
//! - Negamax alpha-beta with a transposition table
//! - Quiescence search over captures with stand-pat
//! - Move ordering (hash move, MVV-LVA, killers, history)
//!
//! The search driver owns the transposition, killer, and history tables
//! through [`SearchState`]; the table contents persist across `search`
//! calls (killers are cleared per call). The engine is single-threaded:
//! concurrent searches on one state are not supported.

mod constants;
mod move_order;
mod tt;

use std::time::Instant;

use crate::ai::{Difficulty, PlayStyle};
use crate::board::{Color, Move, Position};
use crate::eval::{evaluate, evaluation_breakdown, EvalBreakdown};

pub use constants::{DRAW_SCORE, MATE_SCORE};
pub use move_order::{HistoryTable, KillerTable};
pub use tt::{NodeType, TableStats, TranspositionEntry, TranspositionTable};

use constants::{INFINITY, MATE_MARGIN, NODES_PER_TIME_CHECK};

/// Default transposition table size in MB
pub const DEFAULT_TT_MB: usize = 64;

/// What the caller asks of a search.
#[derive(Clone, Debug)]
pub struct SearchOptions {
    /// Maximum iterative-deepening depth (at least 1 for useful results)
    pub max_depth: u32,
    /// Soft time budget in milliseconds; 0 means unlimited
    pub max_time_ms: u64,
    /// Difficulty preset this search was derived from, if any
    pub difficulty: Option<Difficulty>,
    /// Style preset this search was derived from, if any
    pub style: Option<PlayStyle>,
    /// Carried for the difficulty layer; the raw search ignores it
    pub mistake_probability: f64,
}

impl SearchOptions {
    /// Depth-limited search with no time budget
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchOptions {
            max_depth,
            max_time_ms: 0,
            difficulty: None,
            style: None,
            mistake_probability: 0.0,
        }
    }

    /// Depth- and time-limited search
    #[must_use]
    pub fn new(max_depth: u32, max_time_ms: u64) -> Self {
        SearchOptions {
            max_time_ms,
            ..SearchOptions::depth(max_depth)
        }
    }
}

/// Everything a search reports back.
#[derive(Clone, Debug)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Centipawns from White's point of view
    pub evaluation: i32,
    pub breakdown: EvalBreakdown,
    pub principal_variation: Vec<Move>,
    /// Deepest fully completed iteration
    pub depth: u32,
    pub nodes_searched: u64,
    pub elapsed_ms: u64,
    /// Human-readable notes about the score and the chosen move
    pub explanation: Vec<String>,
}

/// Tables owned by the search driver, persisted across searches.
pub struct SearchState {
    pub(crate) tt: TranspositionTable,
    pub(crate) killers: KillerTable,
    pub(crate) history: HistoryTable,
}

impl SearchState {
    #[must_use]
    pub fn new(tt_mb: usize) -> Self {
        SearchState {
            tt: TranspositionTable::new(tt_mb),
            killers: KillerTable::new(),
            history: HistoryTable::new(),
        }
    }

    /// Transposition table probe/store counters
    #[must_use]
    pub fn tt_stats(&self) -> TableStats {
        self.tt.stats()
    }

    /// Drop all cached search data
    pub fn reset(&mut self) {
        self.tt.clear();
        self.killers.clear();
        self.history.clear();
    }
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::new(DEFAULT_TT_MB)
    }
}

/// Search score from the mover's perspective into White's.
fn signed_to_white(score: i32, side: Color) -> i32 {
    match side {
        Color::White => score,
        Color::Black => -score,
    }
}

struct SearchContext<'a> {
    state: &'a mut SearchState,
    nodes: u64,
    start: Instant,
    time_limit_ms: u64,
    should_stop: bool,
}

impl SearchContext<'_> {
    /// Count a node, probing the clock once every 1024 nodes. The
    /// budget is soft: the current node always runs to completion.
    #[inline]
    fn visit_node(&mut self) {
        self.nodes += 1;
        if self.time_limit_ms > 0
            && self.nodes % NODES_PER_TIME_CHECK == 0
            && self.start.elapsed().as_millis() as u64 >= self.time_limit_ms
        {
            self.should_stop = true;
        }
    }

    /// Tactical-only sub-search past the nominal horizon: stand on the
    /// static evaluation or keep capturing until the position is quiet.
    fn quiesce(&mut self, pos: &Position, mut alpha: i32, beta: i32) -> i32 {
        self.visit_node();
        if self.should_stop {
            return 0;
        }

        let stand_pat = signed_to_white(evaluate(pos), pos.side_to_move);
        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let mut captures: Vec<Move> = pos
            .generate_moves()
            .into_iter()
            .filter(|mv| mv.is_capture())
            .collect();
        move_order::order_captures(&mut captures);

        for mv in &captures {
            let successor = pos.make_move(mv);
            let score = -self.quiesce(&successor, -beta, -alpha);
            if self.should_stop {
                return 0;
            }
            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }
        alpha
    }

    /// Negamax alpha-beta. Returns the score from the mover's
    /// perspective and fills `pv` with the best line found.
    fn alphabeta(
        &mut self,
        pos: &Position,
        depth: i32,
        mut alpha: i32,
        beta: i32,
        ply: u32,
        pv: &mut Vec<Move>,
    ) -> i32 {
        if self.should_stop {
            return 0;
        }

        let hash = pos.zobrist_hash();
        let tt_entry = self.state.tt.probe(hash).copied();
        if let Some(entry) = tt_entry {
            // The root must always produce a move, so it only takes the
            // entry's move hint, never the cutoff
            if ply > 0 && i32::from(entry.depth) >= depth {
                match entry.node_type {
                    NodeType::Exact => return entry.evaluation,
                    NodeType::LowerBound if entry.evaluation >= beta => return beta,
                    NodeType::UpperBound if entry.evaluation <= alpha => return alpha,
                    _ => {}
                }
            }
        }

        if depth <= 0 {
            return self.quiesce(pos, alpha, beta);
        }

        self.visit_node();
        if self.should_stop {
            return 0;
        }

        let mut moves = pos.generate_moves();
        if moves.is_empty() {
            return if pos.is_in_check(pos.side_to_move) {
                // Prefer faster mates
                -MATE_SCORE + ply as i32
            } else {
                DRAW_SCORE
            };
        }
        if pos.halfmove_clock >= 100 {
            return DRAW_SCORE;
        }

        let hash_move = tt_entry.and_then(|entry| entry.best_move);
        move_order::order_moves(
            &mut moves,
            hash_move.as_ref(),
            ply as usize,
            pos.side_to_move,
            &self.state.killers,
            &self.state.history,
        );

        let mut best_score = -INFINITY;
        let mut best_move = None;
        let mut node_type = NodeType::UpperBound;
        let mut local_pv: Vec<Move> = Vec::new();

        for mv in &moves {
            let successor = pos.make_move(mv);
            let mut child_pv = Vec::new();
            let score = -self.alphabeta(&successor, depth - 1, -beta, -alpha, ply + 1, &mut child_pv);
            if self.should_stop {
                return 0;
            }

            if score > best_score {
                best_score = score;
                best_move = Some(*mv);
                local_pv.clear();
                local_pv.push(*mv);
                local_pv.extend_from_slice(&child_pv);

                if score > alpha {
                    alpha = score;
                    node_type = NodeType::Exact;
                    pv.clear();
                    pv.extend_from_slice(&local_pv);
                }
            }

            if alpha >= beta {
                node_type = NodeType::LowerBound;
                if mv.is_quiet() {
                    self.state.killers.insert(ply as usize, *mv);
                    self.state.history.update(
                        pos.side_to_move,
                        mv.piece,
                        mv.to.index(),
                        depth as u32,
                    );
                }
                break;
            }
        }

        self.state.tt.store(TranspositionEntry {
            key: hash,
            depth: depth as i16,
            evaluation: best_score,
            node_type,
            best_move,
        });
        best_score
    }
}

/// Iterative-deepening search for the best move in `pos`.
///
/// Runs depths 1..=`max_depth`, keeping the result of the last fully
/// completed iteration when the time budget runs out. Search never
/// fails: a position with any legal move always yields one.
pub fn search(pos: &Position, state: &mut SearchState, opts: &SearchOptions) -> SearchResult {
    let start = Instant::now();
    state.killers.clear();

    let mut ctx = SearchContext {
        state,
        nodes: 0,
        start,
        time_limit_ms: opts.max_time_ms,
        should_stop: false,
    };

    let mut best_move: Option<Move> = None;
    let mut best_pv: Vec<Move> = Vec::new();
    let mut completed_depth = 0;
    let mut evaluation = 0;

    for depth in 1..=opts.max_depth {
        let mut pv = Vec::new();
        let score = ctx.alphabeta(pos, depth as i32, -INFINITY, INFINITY, 0, &mut pv);

        if ctx.should_stop && depth > 1 {
            break;
        }
        if !pv.is_empty() {
            best_move = Some(pv[0]);
            best_pv = pv;
            completed_depth = depth;
            evaluation = signed_to_white(score, pos.side_to_move);
        }
        #[cfg(feature = "logging")]
        log::debug!(
            "depth {depth}: score {score}, {} nodes, pv {}",
            ctx.nodes,
            best_pv
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        );
        if score.abs() >= MATE_SCORE - MATE_MARGIN {
            break;
        }
        if ctx.should_stop {
            break;
        }
    }

    let nodes_searched = ctx.nodes;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    let mut fell_back = false;
    if best_move.is_none() {
        // Zero-depth request or an immediate stop: any legal move
        let legal = pos.generate_moves();
        best_move = legal.first().copied();
        best_pv = best_move.map(|mv| vec![mv]).unwrap_or_default();
        evaluation = evaluate(pos);
        fell_back = best_move.is_some();
    }

    let breakdown = evaluation_breakdown(pos);
    let mut explanation = build_explanation(evaluation, &breakdown, best_move.as_ref());
    if fell_back {
        explanation.push("Search was cut short; playing the first legal move".to_string());
    }

    SearchResult {
        best_move,
        evaluation,
        breakdown,
        principal_variation: best_pv,
        depth: completed_depth,
        nodes_searched,
        elapsed_ms,
        explanation,
    }
}

/// Turn a score and its breakdown into human-readable notes.
fn build_explanation(
    evaluation: i32,
    breakdown: &EvalBreakdown,
    best_move: Option<&Move>,
) -> Vec<String> {
    let mut lines = Vec::new();

    if evaluation.abs() >= MATE_SCORE - MATE_MARGIN {
        let winner = if evaluation > 0 {
            Color::White
        } else {
            Color::Black
        };
        let plies = MATE_SCORE - evaluation.abs();
        let moves = (plies + 1) / 2;
        lines.push(format!("Checkmate for {winner} in {moves} moves"));
    } else if evaluation > 200 {
        lines.push("White has a winning advantage".to_string());
    } else if evaluation > 50 {
        lines.push("White has a slight advantage".to_string());
    } else if evaluation < -200 {
        lines.push("Black has a winning advantage".to_string());
    } else if evaluation < -50 {
        lines.push("Black has a slight advantage".to_string());
    } else {
        lines.push("The position is roughly equal".to_string());
    }

    if breakdown.material.abs() > 100 {
        let side = leader(breakdown.material);
        let pawns = f64::from(breakdown.material.abs()) / 100.0;
        lines.push(format!("{side} is up {pawns:.1} pawns worth of material"));
    }
    if breakdown.king_safety.abs() > 30 {
        lines.push(format!("{} has better king safety", leader(breakdown.king_safety)));
    }
    if breakdown.center_control.abs() > 20 {
        lines.push(format!("{} controls the center", leader(breakdown.center_control)));
    }
    if breakdown.mobility.abs() > 30 {
        lines.push(format!("{} has better piece mobility", leader(breakdown.mobility)));
    }

    if let Some(mv) = best_move {
        if let Some(captured) = mv.captured {
            lines.push(format!("Captures {}", captured.name()));
        }
        if let Some(promo) = mv.promotion {
            lines.push(format!("Promotes pawn to {}", promo.name()));
        }
        if mv.is_castling() {
            lines.push("Castles for king safety".to_string());
        }
    }

    lines
}

fn leader(component: i32) -> Color {
    if component > 0 {
        Color::White
    } else {
        Color::Black
    }
}
