use rand::Rng;
use rand::seq::SliceRandom;

pub const GRID_COLS: usize = 4;
pub const GRID_ROWS: usize = 4;
pub const MATCH_SIZE: usize = 2;
pub const HIDDEN_FACE: &str = "?";

pub const SYMBOLS: [&str; 8] = ["🌟", "🌞", "💕", "🌼", "🌴", "🐟", "💜", "🎉"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileStatus {
    Hidden,
    Flipped,
    Matched,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub value: &'static str,
    pub status: TileStatus,
}

impl Tile {
    /// Text shown on the card right now.
    pub fn face(&self) -> &'static str {
        match self.status {
            TileStatus::Hidden => HIDDEN_FACE,
            TileStatus::Flipped | TileStatus::Matched => self.value,
        }
    }
}

/// The 4x4 card layout for one round. Every symbol sits on exactly
/// `MATCH_SIZE` tiles.
#[derive(Clone, Debug)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut values = Vec::with_capacity(GRID_COLS * GRID_ROWS);
        for symbol in SYMBOLS {
            for _ in 0..MATCH_SIZE {
                values.push(symbol);
            }
        }
        values.shuffle(rng);

        let tiles = values
            .into_iter()
            .map(|value| Tile {
                value,
                status: TileStatus::Hidden,
            })
            .collect();
        Board { tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn status(&self, index: usize) -> Option<TileStatus> {
        self.tiles.get(index).map(|tile| tile.status)
    }

    pub fn value(&self, index: usize) -> Option<&'static str> {
        self.tiles.get(index).map(|tile| tile.value)
    }

    pub fn positions_of(&self, symbol: &str) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter_map(|(idx, tile)| (tile.value == symbol).then_some(idx))
            .collect()
    }

    pub fn hidden_indices(&self) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter_map(|(idx, tile)| (tile.status == TileStatus::Hidden).then_some(idx))
            .collect()
    }

    pub fn matched_pairs(&self) -> u32 {
        let matched = self
            .tiles
            .iter()
            .filter(|tile| tile.status == TileStatus::Matched)
            .count();
        (matched / MATCH_SIZE) as u32
    }

    pub fn is_complete(&self) -> bool {
        self.tiles.iter().all(|t| t.status == TileStatus::Matched)
    }

    /// Flips a hidden tile face up. Returns its symbol, or `None` when the
    /// tile is out of range or not hidden.
    pub fn reveal(&mut self, index: usize) -> Option<&'static str> {
        let tile = self.tiles.get_mut(index)?;
        if tile.status != TileStatus::Hidden {
            return None;
        }
        tile.status = TileStatus::Flipped;
        Some(tile.value)
    }

    pub fn hide(&mut self, index: usize) {
        if let Some(tile) = self.tiles.get_mut(index)
            && tile.status == TileStatus::Flipped
        {
            tile.status = TileStatus::Hidden;
        }
    }

    pub fn mark_matched(&mut self, index: usize) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.status = TileStatus::Matched;
        }
    }

    /// Permutes the symbols among the tiles that are still face down.
    pub fn reshuffle_hidden<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let hidden_indices = self.hidden_indices();
        if hidden_indices.len() < 2 {
            return hidden_indices.len();
        }

        let mut hidden_values: Vec<&'static str> =
            hidden_indices.iter().map(|&idx| self.tiles[idx].value).collect();
        hidden_values.shuffle(rng);

        for (&idx, value) in hidden_indices.iter().zip(hidden_values) {
            self.tiles[idx].value = value;
        }
        hidden_indices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn symbol_counts(board: &Board) -> HashMap<&'static str, usize> {
        let mut counts = HashMap::new();
        for tile in board.tiles() {
            *counts.entry(tile.value).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn shuffled_board_holds_every_symbol_twice() {
        for seed in 0..32 {
            let board = Board::shuffled(&mut StdRng::seed_from_u64(seed));
            assert_eq!(board.len(), GRID_COLS * GRID_ROWS);
            let counts = symbol_counts(&board);
            assert_eq!(counts.len(), SYMBOLS.len());
            assert!(counts.values().all(|&n| n == MATCH_SIZE), "seed {seed}: {counts:?}");
            assert!(board.tiles().iter().all(|t| t.status == TileStatus::Hidden));
        }
    }

    #[test]
    fn different_seeds_give_different_layouts() {
        let a = Board::shuffled(&mut StdRng::seed_from_u64(1));
        let b = Board::shuffled(&mut StdRng::seed_from_u64(2));
        let layout = |board: &Board| board.tiles().iter().map(|t| t.value).collect::<Vec<_>>();
        assert_ne!(layout(&a), layout(&b));
    }

    #[test]
    fn reveal_only_flips_hidden_tiles() {
        let mut board = Board::shuffled(&mut StdRng::seed_from_u64(7));
        let symbol = board.value(3);
        assert_eq!(board.reveal(3), symbol);
        assert_eq!(board.status(3), Some(TileStatus::Flipped));
        assert_eq!(board.reveal(3), None);
        assert_eq!(board.reveal(99), None);

        board.mark_matched(3);
        board.hide(3);
        assert_eq!(board.status(3), Some(TileStatus::Matched));
    }

    #[test]
    fn face_shows_question_mark_until_revealed() {
        let mut board = Board::shuffled(&mut StdRng::seed_from_u64(11));
        assert_eq!(board.get(0).map(Tile::face), Some(HIDDEN_FACE));
        board.reveal(0);
        assert_eq!(board.get(0).map(Tile::face), board.value(0));
    }

    #[test]
    fn reshuffle_hidden_leaves_matched_tiles_alone() {
        let mut board = Board::shuffled(&mut StdRng::seed_from_u64(5));
        let pair = board.positions_of(SYMBOLS[0]);
        for &idx in &pair {
            board.mark_matched(idx);
        }

        let moved = board.reshuffle_hidden(&mut StdRng::seed_from_u64(9));
        assert_eq!(moved, board.len() - MATCH_SIZE);
        for &idx in &pair {
            assert_eq!(board.value(idx), Some(SYMBOLS[0]));
        }
        assert_eq!(board.matched_pairs(), 1);
        assert!(symbol_counts(&board).values().all(|&n| n == MATCH_SIZE));
    }
}
