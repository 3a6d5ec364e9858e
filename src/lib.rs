//! Science Presets - conference figure presets for scientific plot styles
//!
//! Resolves a conference, column layout, and figure type into a canonical
//! style name and a fixed figure size, and composes the ordered list of
//! style sheets a plotting front-end should apply.
//!
//! # Example
//!
//! ```rust
//! use science_presets::{get_preset, resolve_preset_name, style_stack};
//!
//! let preset = get_preset("NeurIPS", "two column", "image").unwrap();
//! assert_eq!(preset.name, "neurips-2col-image-grid");
//! assert_eq!(preset.figsize, (6.75, 3.0));
//!
//! assert_eq!(resolve_preset_name("nips_line_1col").unwrap(), "neurips-1col-line");
//!
//! let styles = style_stack("acl", "1col", "line", true).unwrap();
//! assert_eq!(styles, ["science", "acl-1col-line", "no-latex"]);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod mplstyle;
pub mod preset;
pub mod token;

pub use catalog::{canonicalize, Category, Conference, FigureType, Layout};
pub use config::{ConfigError, ResolverConfig};
pub use error::PresetError;
pub use preset::{
    get_preset, preset_by_name, presets, resolve_preset_name, style_stack, PresetKey, PresetSpec,
    BASE_STYLE, NO_LATEX_STYLE, PRESET_SPECS,
};
pub use token::normalize_token;
