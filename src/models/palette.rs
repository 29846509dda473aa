use rand::Rng;
use serde::{Deserialize, Serialize};

/// Index into a [`Palette`]'s label list.
pub type ColorId = usize;

#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum PaletteError {
    #[error("palette must contain at least one color")]
    Empty,
    #[error("palette labels must be distinct, duplicate: {0}")]
    DuplicateLabel(String),
}

/// The fixed, ordered set of color labels available to the search. Its size
/// is never adjusted to the graph: when the chromatic number exceeds it, the
/// engine still terminates and reports its best conflicted candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct Palette {
    labels: Vec<String>,
}

impl Palette {
    pub fn new(labels: Vec<String>) -> Result<Self, PaletteError> {
        if labels.is_empty() {
            return Err(PaletteError::Empty);
        }
        for (index, label) in labels.iter().enumerate() {
            if labels[..index].contains(label) {
                return Err(PaletteError::DuplicateLabel(label.clone()));
            }
        }

        Ok(Self { labels })
    }

    /// The ten-color palette of the reference implementation.
    pub fn classic() -> Self {
        Self {
            labels: [
                "red", "blue", "green", "yellow", "purple", "orange", "pink", "gray", "cyan",
                "brown",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, color: ColorId) -> &str {
        &self.labels[color]
    }

    pub fn colors(&self) -> impl Iterator<Item = ColorId> {
        0..self.labels.len()
    }

    /// Uniform draw over the palette. May return any color, including one a
    /// vertex already has.
    pub(crate) fn random_color<R: Rng>(&self, rng: &mut R) -> ColorId {
        rng.random_range(0..self.labels.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn it_rejects_an_empty_palette() {
        assert_eq!(Palette::new(vec![]).unwrap_err(), PaletteError::Empty);
    }

    #[test]
    fn it_rejects_duplicate_labels() {
        let result = Palette::new(vec!["red".into(), "blue".into(), "red".into()]);
        assert_eq!(
            result.unwrap_err(),
            PaletteError::DuplicateLabel("red".into())
        );
    }

    #[test]
    fn classic_palette_matches_the_reference_set() {
        let palette = Palette::classic();
        assert_eq!(palette.len(), 10);
        assert_eq!(palette.label(0), "red");
        assert_eq!(palette.label(9), "brown");
    }

    #[test]
    fn random_color_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let palette = Palette::new(vec!["a".into(), "b".into(), "c".into()]).unwrap();

        for _ in 0..100 {
            assert!(palette.random_color(&mut rng) < 3);
        }
    }
}
