//! Difficulty and style layer: human-like move selection on top of the
//! search.
//!
//! Each difficulty preset bounds the search and sets how often the
//! engine deliberately plays an inferior move; styles bias which
//! inferior moves look attractive. The randomness is injectable so
//! seeded runs reproduce exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Move, Position};
use crate::eval::evaluate;
use crate::search::{search, SearchOptions, SearchResult, SearchState};

/// Playing strength presets.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    Beginner,
    Easy,
    Medium,
    Hard,
    Expert,
}

/// Knobs behind a difficulty preset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultyConfig {
    pub max_depth: u32,
    pub max_time_ms: u64,
    /// Chance of swapping the best move for a plausible alternative
    pub mistake_probability: f64,
    /// Chance of picking from the outright worst moves instead
    pub blunder_probability: f64,
    /// How many runner-up moves a mistake chooses between
    pub candidate_pool: usize,
    /// Half-width of the uniform noise added to mistake scoring
    pub eval_noise: i32,
}

impl Difficulty {
    #[must_use]
    pub fn config(self) -> DifficultyConfig {
        match self {
            Difficulty::Beginner => DifficultyConfig {
                max_depth: 2,
                max_time_ms: 500,
                mistake_probability: 0.40,
                blunder_probability: 0.15,
                candidate_pool: 5,
                eval_noise: 150,
            },
            Difficulty::Easy => DifficultyConfig {
                max_depth: 3,
                max_time_ms: 1000,
                mistake_probability: 0.25,
                blunder_probability: 0.05,
                candidate_pool: 4,
                eval_noise: 80,
            },
            Difficulty::Medium => DifficultyConfig {
                max_depth: 4,
                max_time_ms: 2000,
                mistake_probability: 0.10,
                blunder_probability: 0.02,
                candidate_pool: 3,
                eval_noise: 40,
            },
            Difficulty::Hard => DifficultyConfig {
                max_depth: 5,
                max_time_ms: 3000,
                mistake_probability: 0.03,
                blunder_probability: 0.0,
                candidate_pool: 2,
                eval_noise: 15,
            },
            Difficulty::Expert => DifficultyConfig {
                max_depth: 6,
                max_time_ms: 5000,
                mistake_probability: 0.0,
                blunder_probability: 0.0,
                candidate_pool: 1,
                eval_noise: 0,
            },
        }
    }
}

/// How the engine leans when it deviates from the best move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlayStyle {
    Aggressive,
    Defensive,
    Balanced,
}

struct StyleBias {
    capture: i32,
    center: i32,
    activity: i32,
}

fn style_bias(style: PlayStyle) -> StyleBias {
    match style {
        PlayStyle::Aggressive => StyleBias {
            capture: 60,
            center: 25,
            activity: 30,
        },
        PlayStyle::Defensive => StyleBias {
            capture: -20,
            center: 10,
            activity: -10,
        },
        PlayStyle::Balanced => StyleBias {
            capture: 10,
            center: 15,
            activity: 10,
        },
    }
}

/// Per-move style adjustment: captures, destinations in the broad
/// center, and pieces leaving the back rank.
fn move_bias(mv: &Move, side: Color, style: PlayStyle) -> i32 {
    let bias = style_bias(style);
    let mut score = 0;
    if mv.is_capture() {
        score += bias.capture;
    }
    if (2..=5).contains(&mv.to.file()) && (2..=5).contains(&mv.to.rank()) {
        score += bias.center;
    }
    if mv.from.rank() == side.home_rank() && mv.to.rank() != side.home_rank() {
        score += bias.activity;
    }
    score
}

/// Static evaluation one ply ahead, from the mover's point of view.
fn one_ply_eval(pos: &Position, mv: &Move) -> i32 {
    let eval = evaluate(&pos.make_move(mv));
    match pos.side_to_move {
        Color::White => eval,
        Color::Black => -eval,
    }
}

/// Pick the best move with difficulty- and style-adjusted imperfection,
/// drawing randomness from the thread RNG.
pub fn calculate_ai_move(
    pos: &Position,
    state: &mut SearchState,
    difficulty: Difficulty,
    style: PlayStyle,
) -> SearchResult {
    let mut rng = StdRng::from_entropy();
    calculate_ai_move_with(pos, state, &difficulty.config(), style, &mut rng)
}

/// Seeded variant of [`calculate_ai_move`]; the same seed on the same
/// position reproduces the same move.
pub fn calculate_ai_move_seeded(
    pos: &Position,
    state: &mut SearchState,
    difficulty: Difficulty,
    style: PlayStyle,
    seed: u64,
) -> SearchResult {
    let mut rng = StdRng::seed_from_u64(seed);
    calculate_ai_move_with(pos, state, &difficulty.config(), style, &mut rng)
}

/// Config-driven entry point behind both wrappers.
pub fn calculate_ai_move_with<R: Rng>(
    pos: &Position,
    state: &mut SearchState,
    config: &DifficultyConfig,
    style: PlayStyle,
    rng: &mut R,
) -> SearchResult {
    let opts = SearchOptions {
        max_depth: config.max_depth,
        max_time_ms: config.max_time_ms,
        difficulty: None,
        style: Some(style),
        mistake_probability: config.mistake_probability,
    };
    let mut result = search(pos, state, &opts);

    let legal = pos.generate_moves();
    if legal.len() <= 1 {
        return result;
    }

    if rng.gen::<f64>() < config.blunder_probability {
        substitute(&mut result, blunder_move(pos, &legal, rng));
        result.explanation.push("AI made an inaccurate move".to_string());
        return result;
    }

    if rng.gen::<f64>() < config.mistake_probability {
        if let Some(pick) = mistake_move(pos, &legal, config, style, rng) {
            substitute(&mut result, pick);
            result
                .explanation
                .push("AI chose a slightly suboptimal move".to_string());
        }
        return result;
    }

    result
}

fn substitute(result: &mut SearchResult, mv: Move) {
    result.best_move = Some(mv);
    result.principal_variation = vec![mv];
}

/// A blunder picks uniformly among the three worst one-ply evaluations.
fn blunder_move<R: Rng>(pos: &Position, legal: &[Move], rng: &mut R) -> Move {
    let mut scored: Vec<(Move, i32)> = legal
        .iter()
        .map(|mv| (*mv, one_ply_eval(pos, mv)))
        .collect();
    scored.sort_by_key(|&(_, score)| score);
    let pool = &scored[..scored.len().min(3)];
    pool[rng.gen_range(0..pool.len())].0
}

/// A mistake skips the apparent best move and picks from the next few,
/// weighted toward the stronger candidates.
fn mistake_move<R: Rng>(
    pos: &Position,
    legal: &[Move],
    config: &DifficultyConfig,
    style: PlayStyle,
    rng: &mut R,
) -> Option<Move> {
    let mut scored: Vec<(Move, i32)> = legal
        .iter()
        .map(|mv| {
            let noise = if config.eval_noise > 0 {
                rng.gen_range(-config.eval_noise..=config.eval_noise)
            } else {
                0
            };
            let score = one_ply_eval(pos, mv) + move_bias(mv, pos.side_to_move, style) + noise;
            (*mv, score)
        })
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let pool: Vec<Move> = scored
        .iter()
        .skip(1)
        .take(config.candidate_pool)
        .map(|&(mv, _)| mv)
        .collect();
    if pool.is_empty() {
        return None;
    }
    Some(pool[triangular_pick(rng, pool.len(), config.candidate_pool)])
}

/// Rank i in the pool gets weight `pool_size - i`, so earlier (better)
/// candidates are proportionally more likely.
fn triangular_pick<R: Rng>(rng: &mut R, pool_len: usize, pool_size: usize) -> usize {
    let weights: Vec<usize> = (0..pool_len).map(|i| pool_size - i).collect();
    let total: usize = weights.iter().sum();
    let mut roll = rng.gen_range(0..total);
    for (idx, &weight) in weights.iter().enumerate() {
        if roll < weight {
            return idx;
        }
        roll -= weight;
    }
    pool_len - 1
}
