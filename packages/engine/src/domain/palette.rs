//! Neighbor-density color palette

use serde::{Deserialize, Serialize};

/// Ordered colors, sparse to dense. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette {
    colors: Vec<String>,
}

pub const DEFAULT_COLORS: [&str; 4] = ["#9be9a8", "#40c463", "#30a14e", "#216e39"];

impl Palette {
    pub fn new(colors: Vec<String>) -> Result<Self, String> {
        if colors.is_empty() {
            return Err("palette must contain at least one color".to_string());
        }
        Ok(Self { colors })
    }

    /// Bucket a neighbor count: `min(n / 2, len - 1)`.
    #[inline]
    pub fn bucket(&self, neighbors: u8) -> usize {
        (neighbors as usize / 2).min(self.colors.len() - 1)
    }

    pub fn color(&self, index: usize) -> Option<&str> {
        self.colors.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = String;

    fn try_from(colors: Vec<String>) -> Result<Self, Self::Error> {
        Palette::new(colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}
