use super::board::{GRID_COLS, GRID_ROWS, HIDDEN_FACE};
use super::controller::Effect;

/// What each card currently shows, rebuilt purely from applied effects.
///
/// The controller may already hold the next round's board while the
/// completion dialog is up; drawing from this keeps the finished board on
/// screen until the held-back `ResetBoard` arrives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardFaces {
    shown: Vec<Option<&'static str>>,
}

impl Default for CardFaces {
    fn default() -> Self {
        CardFaces {
            shown: vec![None; GRID_COLS * GRID_ROWS],
        }
    }
}

impl CardFaces {
    pub fn apply(&mut self, effect: &Effect) {
        match *effect {
            Effect::ResetBoard => self.shown.iter_mut().for_each(|face| *face = None),
            Effect::ShowSymbol { index, symbol } => {
                if let Some(face) = self.shown.get_mut(index) {
                    *face = Some(symbol);
                }
            }
            Effect::HideCell(index) => {
                if let Some(face) = self.shown.get_mut(index) {
                    *face = None;
                }
            }
            _ => {}
        }
    }

    pub fn face(&self, index: usize) -> &'static str {
        self.shown.get(index).copied().flatten().unwrap_or(HIDDEN_FACE)
    }

    pub fn is_hidden(&self, index: usize) -> bool {
        !matches!(self.shown.get(index), Some(Some(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_show_hide_and_reset() {
        let mut faces = CardFaces::default();
        assert_eq!(faces.face(0), HIDDEN_FACE);

        faces.apply(&Effect::ShowSymbol { index: 0, symbol: "🌴" });
        faces.apply(&Effect::ShowSymbol { index: 5, symbol: "🐟" });
        assert_eq!(faces.face(0), "🌴");
        assert!(!faces.is_hidden(5));

        faces.apply(&Effect::DisableCell(0));
        faces.apply(&Effect::HideCell(5));
        assert_eq!(faces.face(0), "🌴");
        assert!(faces.is_hidden(5));

        faces.apply(&Effect::ResetBoard);
        assert!(faces.is_hidden(0));
    }

    #[test]
    fn out_of_range_is_hidden() {
        let mut faces = CardFaces::default();
        faces.apply(&Effect::ShowSymbol { index: 99, symbol: "🌴" });
        assert_eq!(faces.face(99), HIDDEN_FACE);
        assert!(faces.is_hidden(99));
    }
}
