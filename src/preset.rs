//! Preset table and resolution
//!
//! Every (conference, layout, figure type) combination has exactly one
//! preset. The table is built on first access and never changes afterwards.

use std::collections::BTreeMap;

use log::{debug, trace};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::catalog::{Conference, FigureType, Layout};
use crate::error::PresetError;
use crate::token::normalize_token;

/// Base style every stack starts with
pub const BASE_STYLE: &str = "science";

/// Style appended to a stack to disable LaTeX text rendering
pub const NO_LATEX_STYLE: &str = "no-latex";

/// Canonical identity of a preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PresetKey {
    pub conference: Conference,
    pub layout: Layout,
    pub figure_type: FigureType,
}

impl PresetKey {
    pub fn new(conference: Conference, layout: Layout, figure_type: FigureType) -> Self {
        Self {
            conference,
            layout,
            figure_type,
        }
    }

    /// Parse each axis from a name or alias
    pub fn parse(conference: &str, layout: &str, figure_type: &str) -> Result<Self, PresetError> {
        Ok(Self::new(
            Conference::parse(conference)?,
            Layout::parse(layout)?,
            FigureType::parse(figure_type)?,
        ))
    }

    /// Composed style name, `"{conference}-{layout}-{figure type}"`
    pub fn name(&self) -> String {
        format!("{}-{}-{}", self.conference, self.layout, self.figure_type)
    }

    /// Figure size in inches as (width, height)
    pub fn figsize(&self) -> (f64, f64) {
        (self.conference.width(self.layout), self.figure_type.height())
    }

    /// All keys in table order: conference, then layout, then figure type
    pub fn all() -> impl Iterator<Item = PresetKey> {
        Conference::ALL.into_iter().flat_map(|conference| {
            Layout::ALL.into_iter().flat_map(move |layout| {
                FigureType::ALL
                    .into_iter()
                    .map(move |figure_type| PresetKey::new(conference, layout, figure_type))
            })
        })
    }
}

/// A resolved preset: canonical style name and figure size
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetSpec {
    pub name: String,
    pub conference: Conference,
    pub layout: Layout,
    pub figure_type: FigureType,
    /// Figure size in inches as (width, height)
    pub figsize: (f64, f64),
}

impl PresetSpec {
    fn from_key(key: PresetKey) -> Self {
        Self {
            name: key.name(),
            conference: key.conference,
            layout: key.layout,
            figure_type: key.figure_type,
            figsize: key.figsize(),
        }
    }

    pub fn key(&self) -> PresetKey {
        PresetKey::new(self.conference, self.layout, self.figure_type)
    }

    pub fn width(&self) -> f64 {
        self.figsize.0
    }

    pub fn height(&self) -> f64 {
        self.figsize.1
    }
}

/// All presets keyed by composed name
pub static PRESET_SPECS: Lazy<BTreeMap<String, PresetSpec>> = Lazy::new(|| {
    let specs: BTreeMap<String, PresetSpec> = PresetKey::all()
        .map(|key| (key.name(), PresetSpec::from_key(key)))
        .collect();
    debug!("built preset table with {} entries", specs.len());
    specs
});

/// Iterate over all presets in table order
pub fn presets() -> impl Iterator<Item = &'static PresetSpec> {
    PresetKey::all().map(spec_for_key)
}

fn spec_for_key(key: PresetKey) -> &'static PresetSpec {
    // The table holds every key.
    &PRESET_SPECS[&key.name()]
}

/// Resolve the preset for a conference, layout, and figure type.
///
/// Each input is normalized and matched against its alias table, so
/// `get_preset("NIPS", "two column", "image")` yields
/// `neurips-2col-image-grid`.
pub fn get_preset(
    conference: &str,
    layout: &str,
    figure_type: &str,
) -> Result<&'static PresetSpec, PresetError> {
    PresetKey::parse(conference, layout, figure_type).map(spec_for_key)
}

/// Resolve a canonical preset name from a canonical or alias name.
///
/// Accepts both `conference-layout-type` and `conference-type-layout`
/// orderings. Multi-word figure types such as `image-grid` may appear on
/// either side of the layout.
pub fn resolve_preset_name(name: &str) -> Result<String, PresetError> {
    let token = normalize_token(name);
    if PRESET_SPECS.contains_key(&token) {
        return Ok(token);
    }

    let parts: Vec<&str> = token.split('-').collect();
    let Some((conference, rest)) = parts.split_first() else {
        return Err(PresetError::invalid_name(name));
    };
    if rest.len() < 2 || Conference::parse(conference).is_err() {
        return Err(PresetError::invalid_name(name));
    }

    debug!("resolving '{}' by splitting into tokens", token);

    // conference-layout-type
    let layout = rest[0];
    let figure_type = rest[1..].join("-");
    trace!("trying layout '{}' with figure type '{}'", layout, figure_type);
    if let Ok(spec) = get_preset(conference, layout, &figure_type) {
        return Ok(spec.name.clone());
    }

    // conference-type-layout
    let layout = rest[rest.len() - 1];
    let figure_type = rest[..rest.len() - 1].join("-");
    trace!("trying figure type '{}' with layout '{}'", figure_type, layout);
    get_preset(conference, layout, &figure_type)
        .map(|spec| spec.name.clone())
        .map_err(|_| PresetError::invalid_name(name))
}

/// Look up a preset spec by canonical or alias name
pub fn preset_by_name(name: &str) -> Result<&'static PresetSpec, PresetError> {
    let canonical = resolve_preset_name(name)?;
    PRESET_SPECS
        .get(&canonical)
        .ok_or_else(|| PresetError::invalid_name(name))
}

/// Build the ordered style stack for a preset.
///
/// Later entries override earlier ones when applied, so the preset sits
/// on top of the base style and `no-latex` goes last.
pub fn style_stack(
    conference: &str,
    layout: &str,
    figure_type: &str,
    no_latex: bool,
) -> Result<Vec<String>, PresetError> {
    let preset = get_preset(conference, layout, figure_type)?;
    let mut styles = vec![BASE_STYLE.to_string(), preset.name.clone()];
    if no_latex {
        styles.push(NO_LATEX_STYLE.to_string());
    }
    Ok(styles)
}
