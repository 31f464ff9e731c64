// crates/domain/src/options.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Text layouts a report can be rendered into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Bordered two-column table.
    #[default]
    Table,
    /// Grouped sections with tree-branch markers.
    Annotated,
    /// `Label: value` lines.
    Plain,
}

impl RenderStyle {
    pub const ALL: [RenderStyle; 3] = [Self::Table, Self::Annotated, Self::Plain];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Annotated => "annotated",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "annotated" | "tree" => Ok(Self::Annotated),
            "plain" | "list" => Ok(Self::Plain),
            other => Err(format!("Unknown render style: {other}")),
        }
    }
}

/// Layout knobs shared by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Width of each table column, excluding borders.
    pub column_width: usize,
    /// Width the plain-style title is centered within.
    pub title_width: usize,
    /// Blank line after each plain-style entry.
    pub spaced: bool,
    /// Centered title line on top of the plain style.
    pub plain_title: bool,
}

impl RenderOptions {
    pub const DEFAULT_COLUMN_WIDTH: usize = 50;
    pub const MIN_COLUMN_WIDTH: usize = 20;
    pub const DEFAULT_TITLE_WIDTH: usize = 80;

    /// Total width of a table row: two columns, three bars and two padding spaces per column.
    pub const fn table_width(&self) -> usize {
        self.column_width * 2 + 7
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            column_width: Self::DEFAULT_COLUMN_WIDTH,
            title_width: Self::DEFAULT_TITLE_WIDTH,
            spaced: false,
            plain_title: true,
        }
    }
}
