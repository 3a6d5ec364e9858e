//! Style-sheet fragments for presets
//!
//! Each preset corresponds to a style sheet that only sets the figure size;
//! everything else comes from the base style beneath it in the stack.

use crate::preset::PresetSpec;

/// Render the style-sheet fragment for a preset
pub fn render(spec: &PresetSpec) -> String {
    let (width, height) = spec.figsize;
    format!(
        "# {}: {} {} {} preset\nfigure.figsize : {}, {}\n",
        spec.name, spec.conference, spec.layout, spec.figure_type, width, height
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::{get_preset, presets};

    #[test]
    fn test_render_line_preset() {
        let spec = get_preset("acl", "1col", "line").unwrap();
        insta::assert_snapshot!(render(spec), @r"
        # acl-1col-line: acl 1col line preset
        figure.figsize : 3.1, 2.3
        ");
    }

    #[test]
    fn test_render_whole_number_height() {
        let spec = get_preset("neurips", "2col", "image-grid").unwrap();
        insta::assert_snapshot!(render(spec), @r"
        # neurips-2col-image-grid: neurips 2col image-grid preset
        figure.figsize : 6.75, 3
        ");
    }

    #[test]
    fn test_every_preset_sets_figsize() {
        for spec in presets() {
            let text = render(spec);
            assert_eq!(text.lines().count(), 2);
            assert!(text.lines().nth(1).unwrap().starts_with("figure.figsize : "));
        }
    }
}
