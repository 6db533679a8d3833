//! Alpha-beta search and move ordering.

pub mod alphabeta;
pub mod control;
pub mod ordering;

use tracing::{debug, info};

use ninefold_core::{GameState, Mark, Move};

use crate::eval::cache::EvaluationCache;
use alphabeta::{INF, NEG_INF, SearchContext, alpha_beta};
use control::SearchControl;
use ordering::legal_moves;

/// Engine settings fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchConfig {
    /// Log every root candidate and the chosen move at `info` instead of `debug`.
    pub trace: bool,
}

/// Result of a completed search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found.
    pub best_move: Move,
    /// Value of `best_move` from the engine's perspective.
    pub score: i32,
    /// Total nodes visited.
    pub nodes: u64,
    /// Depth each root candidate was searched to.
    pub depth: u8,
    /// Whether the stop flag cut the search short.
    pub aborted: bool,
}

/// Alpha-beta searcher owning one game's evaluation cache.
pub struct SearchEngine {
    perspective: Mark,
    cache: EvaluationCache,
    config: SearchConfig,
}

impl SearchEngine {
    /// Create an engine that plays (and maximizes) for `perspective`.
    pub fn new(perspective: Mark, config: SearchConfig) -> Self {
        Self {
            perspective,
            cache: EvaluationCache::new(perspective),
            config,
        }
    }

    /// The side this engine plays for.
    pub fn perspective(&self) -> Mark {
        self.perspective
    }

    /// The evaluation cache built up so far.
    pub fn cache(&self) -> &EvaluationCache {
        &self.cache
    }

    /// Ordered legal moves for the side to move in `state`.
    pub fn legal_moves(&mut self, state: &GameState) -> Vec<Move> {
        legal_moves(state, &mut self.cache)
    }

    /// Pick the best move for the side to move, which should be this engine's side.
    ///
    /// Each ordered candidate is expanded and its child searched `depth`
    /// plies with a full window. The candidate with the strictly greatest
    /// value wins; the first candidate is the default. If the control stops
    /// the search, the candidate in progress is dropped and the best fully
    /// searched one is returned.
    ///
    /// Returns `None` only when there is no legal move.
    pub fn choose_move(
        &mut self,
        state: &GameState,
        depth: u8,
        control: &SearchControl,
    ) -> Option<SearchResult> {
        let moves = legal_moves(state, &mut self.cache);
        let mut best_move = *moves.first()?;
        let mut best_score = NEG_INF;
        let mut aborted = false;
        let trace = self.config.trace;

        let mut ctx = SearchContext {
            nodes: 0,
            me: self.perspective,
            cache: &mut self.cache,
            control,
        };

        for mv in moves {
            let child = state.make_move(mv);
            let score = alpha_beta(&child, depth, NEG_INF, INF, &mut ctx);

            if control.is_stopped() {
                aborted = true;
                break;
            }

            if trace {
                info!(%mv, score, "candidate");
            } else {
                debug!(%mv, score, "candidate");
            }

            if score > best_score {
                best_score = score;
                best_move = mv;
            }
        }

        let result = SearchResult {
            best_move,
            score: best_score,
            nodes: ctx.nodes,
            depth,
            aborted,
        };

        if trace {
            info!(
                mv = %result.best_move,
                score = result.score,
                nodes = result.nodes,
                depth,
                aborted,
                cached = self.cache.len(),
                "search finished"
            );
        } else {
            debug!(mv = %result.best_move, score = result.score, nodes = result.nodes, "search finished");
        }

        Some(result)
    }
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("perspective", &self.perspective)
            .field("cached", &self.cache.len())
            .field("config", &self.config)
            .finish()
    }
}
