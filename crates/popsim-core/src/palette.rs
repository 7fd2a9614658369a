//! Curve colors.
//!
//! A scenario only stores an index into the palette; the style token handed
//! to presenters is looked up at render time.

use serde::{Deserialize, Serialize};

use crate::error::{PopError, PopResult};

/// Default eight-color palette.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#2563eb", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#06b6d4", "#84cc16",
];

/// Style token for cross-scenario comparison blocks.
pub const COMPARISON_STYLE: &str = "accent";

/// Ordered, non-empty list of style tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new(colors: Vec<String>) -> PopResult<Self> {
        if colors.is_empty() {
            return Err(PopError::Config("palette must contain at least one color".into()));
        }
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Style token for a color index, wrapping past the end.
    pub fn style_token(&self, color_index: usize) -> &str {
        &self.colors[color_index % self.colors.len()]
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = PopError;

    fn try_from(colors: Vec<String>) -> Result<Self, Self::Error> {
        Palette::new(colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_has_eight_colors() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 8);
        assert_eq!(palette.style_token(0), "#2563eb");
        assert_eq!(palette.style_token(8), palette.style_token(0));
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert!(matches!(Palette::new(Vec::new()), Err(PopError::Config(_))));
        assert!(serde_json::from_str::<Palette>("[]").is_err());
    }

    #[test]
    fn palette_serializes_as_plain_list() {
        let palette = Palette::new(vec!["red".into(), "blue".into()]).unwrap();
        let json = serde_json::to_string(&palette).unwrap();
        assert_eq!(json, r#"["red","blue"]"#);
    }
}
