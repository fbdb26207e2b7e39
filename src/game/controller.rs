use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::board::{Board, MATCH_SIZE, SYMBOLS, TileStatus};
use super::config::GameConfig;
use crate::debug;

/// Render commands and timer requests produced by the controller. The
/// presentation layer applies them in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Every card is face down and clickable again.
    ResetBoard,
    ShowSymbol { index: usize, symbol: &'static str },
    HideCell(usize),
    DisableCell(usize),
    ScoreChanged(u32),
    TimeChanged(u32),
    StartTick { round: u64, interval: Duration },
    StopTick,
    ScheduleFlipBack { round: u64, delay: Duration },
    RoundComplete { seconds: u32 },
}

pub struct GameController {
    config: GameConfig,
    rng: StdRng,
    board: Board,
    flipped_indices: Vec<usize>,
    score: u32,
    seconds_elapsed: u32,
    round: u64,
    ticking: bool,
}

impl GameController {
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let board = Board::shuffled(&mut rng);
        GameController {
            config,
            rng,
            board,
            flipped_indices: Vec::with_capacity(MATCH_SIZE),
            score: 0,
            seconds_elapsed: 0,
            round: 0,
            ticking: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &[usize] {
        &self.flipped_indices
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn seconds_elapsed(&self) -> u32 {
        self.seconds_elapsed
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    pub fn start_new_round(&mut self) -> Vec<Effect> {
        self.round = self.round.wrapping_add(1);
        self.board = Board::shuffled(&mut self.rng);
        self.flipped_indices.clear();
        self.score = 0;
        self.seconds_elapsed = 0;
        self.ticking = true;

        debug::log("Round", format!("Started round {}", self.round));

        vec![
            Effect::ResetBoard,
            Effect::ScoreChanged(0),
            Effect::TimeChanged(0),
            Effect::StartTick {
                round: self.round,
                interval: self.config.tick_interval,
            },
        ]
    }

    /// The "New Game" button.
    pub fn on_new_game_requested(&mut self) -> Vec<Effect> {
        self.start_new_round()
    }

    pub fn on_cell_activated(&mut self, index: usize) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.flipped_indices.len() >= MATCH_SIZE {
            return effects;
        }
        let Some(symbol) = self.board.reveal(index) else {
            return effects;
        };

        self.flipped_indices.push(index);
        effects.push(Effect::ShowSymbol { index, symbol });
        if self.flipped_indices.len() < MATCH_SIZE {
            return effects;
        }

        let first = self.flipped_indices[0];
        if self.board.value(first) == Some(symbol) {
            for idx in self.flipped_indices.drain(..) {
                self.board.mark_matched(idx);
                effects.push(Effect::DisableCell(idx));
            }
            self.score = self.score.saturating_add(1);
            effects.push(Effect::ScoreChanged(self.score));
            debug::log("Match", format!("{symbol} at {first} and {index}, score {}", self.score));
            effects.extend(self.check_completion());
        } else {
            debug::log("Mismatch", format!("cells {first} and {index}"));
            effects.push(Effect::ScheduleFlipBack {
                round: self.round,
                delay: self.config.flip_back_delay,
            });
        }
        effects
    }

    /// Turns a mismatched pair face down again. Calls carrying an old round
    /// or arriving with no pair pending do nothing.
    pub fn on_flip_back_elapsed(&mut self, round: u64) -> Vec<Effect> {
        if round != self.round || self.flipped_indices.len() < MATCH_SIZE {
            return Vec::new();
        }
        let mut effects = Vec::with_capacity(MATCH_SIZE);
        for idx in self.flipped_indices.drain(..) {
            self.board.hide(idx);
            effects.push(Effect::HideCell(idx));
        }
        effects
    }

    pub fn on_tick(&mut self, round: u64) -> Vec<Effect> {
        if round != self.round || !self.ticking {
            return Vec::new();
        }
        self.seconds_elapsed = self.seconds_elapsed.saturating_add(1);
        vec![Effect::TimeChanged(self.seconds_elapsed)]
    }

    pub fn check_completion(&mut self) -> Vec<Effect> {
        if !self.board.is_complete() {
            return Vec::new();
        }
        let seconds = self.seconds_elapsed;
        self.ticking = false;
        debug::log("Round", format!("Completed round {} in {seconds}s", self.round));

        let mut effects = vec![Effect::StopTick, Effect::RoundComplete { seconds }];
        effects.extend(self.start_new_round());
        effects
    }

    /// Leaves a single pair face down and marks everything else matched.
    /// Returns `None` when no unmatched pair is left.
    pub fn debug_prepare_near_win(&mut self) -> Option<Vec<Effect>> {
        let remaining_symbol = self
            .board
            .tiles()
            .iter()
            .find(|tile| tile.status != TileStatus::Matched)
            .map(|tile| tile.value)?;

        let mut effects = Vec::with_capacity(self.board.len() + 1);
        self.flipped_indices.clear();
        for idx in 0..self.board.len() {
            let keep_hidden = self.board.value(idx) == Some(remaining_symbol);
            match (keep_hidden, self.board.status(idx)) {
                (true, _) => {
                    self.board.hide(idx);
                    effects.push(Effect::HideCell(idx));
                }
                (false, Some(TileStatus::Matched)) => {}
                (false, status) => {
                    if status == Some(TileStatus::Hidden)
                        && let Some(symbol) = self.board.reveal(idx)
                    {
                        effects.push(Effect::ShowSymbol { index: idx, symbol });
                    }
                    self.board.mark_matched(idx);
                    effects.push(Effect::DisableCell(idx));
                }
            }
        }

        self.score = (SYMBOLS.len() - 1) as u32;
        effects.push(Effect::ScoreChanged(self.score));
        Some(effects)
    }

    /// Moves the symbols of the face-down cards around. A pending mismatch
    /// is left untouched.
    pub fn debug_reshuffle_hidden(&mut self) -> Vec<Effect> {
        self.board.reshuffle_hidden(&mut self.rng);
        self.board
            .hidden_indices()
            .into_iter()
            .map(Effect::HideCell)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(seed: u64) -> GameController {
        let mut game = GameController::with_rng(GameConfig::default(), StdRng::seed_from_u64(seed));
        game.start_new_round();
        game
    }

    fn mismatched_pair(game: &GameController) -> (usize, usize) {
        let first = game.board().positions_of(SYMBOLS[0])[0];
        let second = game.board().positions_of(SYMBOLS[1])[0];
        (first, second)
    }

    #[test]
    fn first_pick_only_reveals() {
        let mut game = controller(3);
        let effects = game.on_cell_activated(0);
        assert_eq!(
            effects,
            vec![Effect::ShowSymbol {
                index: 0,
                symbol: game.board().value(0).unwrap_or_default()
            }]
        );
        assert_eq!(game.selection(), &[0]);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn third_pick_is_ignored_while_mismatch_pending() {
        let mut game = controller(4);
        let (a, b) = mismatched_pair(&game);
        game.on_cell_activated(a);
        game.on_cell_activated(b);

        let other = game.board().hidden_indices()[0];
        assert!(game.on_cell_activated(other).is_empty());
        assert_eq!(game.board().status(other), Some(TileStatus::Hidden));
        assert_eq!(game.selection().len(), 2);
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        let mut game = controller(5);
        assert!(game.on_cell_activated(16).is_empty());
        assert!(game.selection().is_empty());
    }

    #[test]
    fn flip_back_without_pending_pair_does_nothing() {
        let mut game = controller(6);
        let round = game.round();
        assert!(game.on_flip_back_elapsed(round).is_empty());

        game.on_cell_activated(0);
        assert!(game.on_flip_back_elapsed(round).is_empty());
        assert_eq!(game.board().status(0), Some(TileStatus::Flipped));
    }

    #[test]
    fn tick_is_ignored_after_completion_stops_it() {
        let mut game = controller(8);
        game.ticking = false;
        assert!(game.on_tick(game.round()).is_empty());
        assert_eq!(game.seconds_elapsed(), 0);
    }

    #[test]
    fn near_win_leaves_one_pair() {
        let mut game = controller(9);
        game.on_cell_activated(0);
        let effects = game.debug_prepare_near_win().unwrap_or_default();
        assert_eq!(effects.last(), Some(&Effect::ScoreChanged(7)));
        assert_eq!(game.board().hidden_indices().len(), MATCH_SIZE);
        assert_eq!(game.board().matched_pairs(), 7);
        assert!(game.selection().is_empty());

        let hidden = game.board().hidden_indices();
        game.on_cell_activated(hidden[0]);
        let effects = game.on_cell_activated(hidden[1]);
        assert!(effects.contains(&Effect::RoundComplete { seconds: 0 }));
    }

    #[test]
    fn debug_reshuffle_keeps_pending_pair() {
        let mut game = controller(10);
        let (a, b) = mismatched_pair(&game);
        game.on_cell_activated(a);
        game.on_cell_activated(b);

        let effects = game.debug_reshuffle_hidden();
        assert_eq!(effects.len(), game.board().len() - 2);
        assert!(!effects.contains(&Effect::HideCell(a)));
        assert_eq!(game.board().value(a), Some(SYMBOLS[0]));
        assert_eq!(game.board().value(b), Some(SYMBOLS[1]));
    }
}
