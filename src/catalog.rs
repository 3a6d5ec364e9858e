//! Conference, layout, and figure-type catalog
//!
//! Each axis of a preset is a small closed enum with a canonical token, an
//! alias table keyed by normalized tokens, and the dimension it contributes
//! to the figure size. Widths depend only on the conference and layout,
//! heights only on the figure type.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PresetError;
use crate::token::normalize_token;

/// The axis of a preset a token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Conference,
    Layout,
    FigureType,
}

impl Category {
    /// All accepted (normalized) aliases for this category, in table order
    pub fn aliases(self) -> Vec<&'static str> {
        match self {
            Category::Conference => CONFERENCE_ALIASES.iter().map(|(a, _)| *a).collect(),
            Category::Layout => LAYOUT_ALIASES.iter().map(|(a, _)| *a).collect(),
            Category::FigureType => FIGURE_TYPE_ALIASES.iter().map(|(a, _)| *a).collect(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Conference => "conference",
            Category::Layout => "layout",
            Category::FigureType => "figure type",
        };
        f.write_str(s)
    }
}

/// Publication venue with its own figure-width convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Conference {
    Acl,
    Kdd,
    Icdm,
    Neurips,
}

/// Column layout of a figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Layout {
    #[serde(rename = "1col")]
    OneColumn,
    #[serde(rename = "2col")]
    TwoColumn,
}

/// Kind of plot content, which decides the figure height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FigureType {
    Line,
    Bar,
    Scatter,
    Heatmap,
    ImageGrid,
    TextEquation,
}

const CONFERENCE_ALIASES: &[(&str, Conference)] = &[
    ("acl", Conference::Acl),
    ("kdd", Conference::Kdd),
    ("icdm", Conference::Icdm),
    ("neurips", Conference::Neurips),
    ("nips", Conference::Neurips),
];

const LAYOUT_ALIASES: &[(&str, Layout)] = &[
    ("1col", Layout::OneColumn),
    ("onecol", Layout::OneColumn),
    ("one-column", Layout::OneColumn),
    ("2col", Layout::TwoColumn),
    ("twocol", Layout::TwoColumn),
    ("two-column", Layout::TwoColumn),
];

const FIGURE_TYPE_ALIASES: &[(&str, FigureType)] = &[
    ("line", FigureType::Line),
    ("bar", FigureType::Bar),
    ("scatter", FigureType::Scatter),
    ("heatmap", FigureType::Heatmap),
    ("image-grid", FigureType::ImageGrid),
    ("imagegrid", FigureType::ImageGrid),
    ("image", FigureType::ImageGrid),
    ("text-equation", FigureType::TextEquation),
    ("textequation", FigureType::TextEquation),
    ("text", FigureType::TextEquation),
    ("equation", FigureType::TextEquation),
];

fn lookup<T: Copy>(table: &[(&str, T)], token: &str) -> Option<T> {
    table
        .iter()
        .find(|(alias, _)| *alias == token)
        .map(|(_, value)| *value)
}

impl Conference {
    pub const ALL: [Conference; 4] = [
        Conference::Acl,
        Conference::Kdd,
        Conference::Icdm,
        Conference::Neurips,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Conference::Acl => "acl",
            Conference::Kdd => "kdd",
            Conference::Icdm => "icdm",
            Conference::Neurips => "neurips",
        }
    }

    /// Parse a conference name or alias (case and separators are ignored)
    pub fn parse(value: &str) -> Result<Self, PresetError> {
        lookup(CONFERENCE_ALIASES, &normalize_token(value))
            .ok_or_else(|| PresetError::unknown(Category::Conference, value))
    }

    /// Figure width in inches for the given layout
    pub fn width(self, layout: Layout) -> f64 {
        match (self, layout) {
            (Conference::Acl, Layout::OneColumn) => 3.1,
            (Conference::Acl, Layout::TwoColumn) => 6.3,
            (Conference::Kdd, Layout::OneColumn) => 3.3,
            (Conference::Kdd, Layout::TwoColumn) => 6.8,
            (Conference::Icdm, Layout::OneColumn) => 3.5,
            (Conference::Icdm, Layout::TwoColumn) => 7.2,
            (Conference::Neurips, Layout::OneColumn) => 3.25,
            (Conference::Neurips, Layout::TwoColumn) => 6.75,
        }
    }
}

impl Layout {
    pub const ALL: [Layout; 2] = [Layout::OneColumn, Layout::TwoColumn];

    pub fn as_str(self) -> &'static str {
        match self {
            Layout::OneColumn => "1col",
            Layout::TwoColumn => "2col",
        }
    }

    /// Parse a layout name or alias (case and separators are ignored)
    pub fn parse(value: &str) -> Result<Self, PresetError> {
        lookup(LAYOUT_ALIASES, &normalize_token(value))
            .ok_or_else(|| PresetError::unknown(Category::Layout, value))
    }
}

impl FigureType {
    pub const ALL: [FigureType; 6] = [
        FigureType::Line,
        FigureType::Bar,
        FigureType::Scatter,
        FigureType::Heatmap,
        FigureType::ImageGrid,
        FigureType::TextEquation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FigureType::Line => "line",
            FigureType::Bar => "bar",
            FigureType::Scatter => "scatter",
            FigureType::Heatmap => "heatmap",
            FigureType::ImageGrid => "image-grid",
            FigureType::TextEquation => "text-equation",
        }
    }

    /// Parse a figure type or alias (case and separators are ignored)
    pub fn parse(value: &str) -> Result<Self, PresetError> {
        lookup(FIGURE_TYPE_ALIASES, &normalize_token(value))
            .ok_or_else(|| PresetError::unknown(Category::FigureType, value))
    }

    /// Figure height in inches
    pub fn height(self) -> f64 {
        match self {
            FigureType::Line => 2.3,
            FigureType::Bar => 2.5,
            FigureType::Scatter => 2.8,
            FigureType::Heatmap => 2.9,
            FigureType::ImageGrid => 3.0,
            FigureType::TextEquation => 2.0,
        }
    }
}

macro_rules! impl_token_traits {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = PresetError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::parse(s)
                }
            }
        )*
    };
}

impl_token_traits!(Conference, Layout, FigureType);

/// Normalize `value` and map it to the canonical token of `category`.
///
/// Fails with [`PresetError::UnknownValue`] if the normalized value is not
/// an alias for that category.
pub fn canonicalize(category: Category, value: &str) -> Result<&'static str, PresetError> {
    match category {
        Category::Conference => Conference::parse(value).map(Conference::as_str),
        Category::Layout => Layout::parse(value).map(Layout::as_str),
        Category::FigureType => FigureType::parse(value).map(FigureType::as_str),
    }
}
