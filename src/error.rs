//! Error types for preset resolution

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::catalog::Category;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresetError {
    /// A single token matches no alias for its category
    #[error("unknown {category} '{value}'")]
    UnknownValue { category: Category, value: String },

    /// A composite name cannot be split into conference, layout, and figure type
    #[error("invalid preset name '{name}'")]
    InvalidName { name: String },
}

impl PresetError {
    /// Create an unknown value error, keeping the value as the caller wrote it
    pub fn unknown(category: Category, value: impl Into<String>) -> Self {
        Self::UnknownValue {
            category,
            value: value.into(),
        }
    }

    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    /// The input that caused the error
    pub fn input(&self) -> &str {
        match self {
            PresetError::UnknownValue { value, .. } => value,
            PresetError::InvalidName { name } => name,
        }
    }

    /// Format the error as an ariadne report pointing at the offending input
    pub fn report(&self, color: bool) -> String {
        const SOURCE_ID: &str = "<input>";

        let source = self.input();
        let (label, help) = match self {
            PresetError::UnknownValue { category, .. } => (
                format!("not a known {}", category),
                format!("expected one of: {}", category.aliases().join(", ")),
            ),
            PresetError::InvalidName { .. } => (
                "cannot be split into conference, layout and figure type".to_string(),
                "expected <conference>-<layout>-<figure type>, e.g. neurips-1col-line"
                    .to_string(),
            ),
        };

        let mut builder = Report::build(ReportKind::Error, SOURCE_ID, 0)
            .with_config(Config::default().with_color(color))
            .with_message(self.to_string())
            .with_help(help);
        if !source.is_empty() {
            builder = builder.with_label(
                // ariadne spans count chars, not bytes.
                Label::new((SOURCE_ID, 0..source.chars().count()))
                    .with_message(label)
                    .with_color(Color::Red),
            );
        }

        let mut buf = Vec::new();
        let written = builder
            .finish()
            .write((SOURCE_ID, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_value_display() {
        let err = PresetError::unknown(Category::Layout, "3col");
        assert_eq!(err.to_string(), "unknown layout '3col'");
    }

    #[test]
    fn test_unknown_figure_type_display() {
        let err = PresetError::unknown(Category::FigureType, "pie");
        assert_eq!(err.to_string(), "unknown figure type 'pie'");
    }

    #[test]
    fn test_invalid_name_display() {
        let err = PresetError::invalid_name("acl-line");
        assert_eq!(err.to_string(), "invalid preset name 'acl-line'");
        assert_eq!(err.input(), "acl-line");
    }

    #[test]
    fn test_report_lists_aliases() {
        let err = PresetError::unknown(Category::Conference, "icml");
        let report = err.report(false);
        assert!(report.contains("unknown conference 'icml'"));
        assert!(report.contains("expected one of:"));
        assert!(report.contains("nips"));
    }

    #[test]
    fn test_report_shows_non_ascii_input() {
        let report = PresetError::invalid_name("névrips-1col").report(false);
        assert!(report.matches("névrips-1col").count() >= 2);
        assert!(report.contains("cannot be split"));

        let report = PresetError::unknown(Category::Conference, "ééé—x").report(false);
        // Once in the header, once in the source line.
        assert!(report.matches("ééé—x").count() >= 2);
        assert!(report.contains("not a known conference"));
    }

    #[test]
    fn test_report_invalid_name_help() {
        let report = PresetError::invalid_name("acl").report(false);
        assert!(report.contains("invalid preset name 'acl'"));
        assert!(report.contains("neurips-1col-line"));
    }
}
