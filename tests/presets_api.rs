//! Integration tests for the preset resolution API

use pretty_assertions::assert_eq;

use science_presets::{
    get_preset, resolve_preset_name, style_stack, Category, PresetError, PRESET_SPECS,
};

#[test]
fn test_preset_count() {
    assert_eq!(PRESET_SPECS.len(), 48);
}

#[test]
fn test_resolve_preset_aliases() {
    let cases = [
        ("neurips-1col-line", "neurips-1col-line"),
        ("nips-1col-line", "neurips-1col-line"),
        ("neurips-line-1col", "neurips-1col-line"),
        ("NeurIPS_1col_line", "neurips-1col-line"),
        ("acl-image-grid-2col", "acl-2col-image-grid"),
        ("acl-2col-image-grid", "acl-2col-image-grid"),
        ("icdm-text-equation-1col", "icdm-1col-text-equation"),
    ];

    for (name, expected) in cases {
        assert_eq!(
            resolve_preset_name(name).expect("Should resolve"),
            expected,
            "resolving {name}"
        );
    }
}

#[test]
fn test_resolve_is_idempotent() {
    for name in PRESET_SPECS.keys() {
        let resolved = resolve_preset_name(name).expect("Should resolve");
        assert_eq!(&resolved, name);
        assert_eq!(resolve_preset_name(&resolved).unwrap(), resolved);
    }
}

#[test]
fn test_get_preset_normalization() {
    let cases = [
        ("ACL", "1col", "line", "acl-1col-line"),
        ("nips", "2col", "bar", "neurips-2col-bar"),
        ("kdd", "two-column", "heatmap", "kdd-2col-heatmap"),
        ("icdm", "onecol", "image", "icdm-1col-image-grid"),
        ("neurips", "2col", "textequation", "neurips-2col-text-equation"),
    ];

    for (conference, layout, figure_type, expected) in cases {
        let preset = get_preset(conference, layout, figure_type).expect("Should resolve");
        assert_eq!(preset.name, expected);
    }
}

#[test]
fn test_get_preset_invalid_inputs() {
    let cases = [
        ("foo", "1col", "line", Category::Conference),
        ("acl", "3col", "line", Category::Layout),
        ("acl", "1col", "unknown", Category::FigureType),
    ];

    for (conference, layout, figure_type, category) in cases {
        let err = get_preset(conference, layout, figure_type).unwrap_err();
        match err {
            PresetError::UnknownValue { category: got, .. } => assert_eq!(got, category),
            other => panic!("expected UnknownValue, got {other:?}"),
        }
    }
}

#[test]
fn test_resolve_invalid_names() {
    for name in ["acl", "acl-1col", "foo-1col-line", "acl-3col-line", "acl-line-bar"] {
        let err = resolve_preset_name(name).unwrap_err();
        assert!(
            matches!(err, PresetError::InvalidName { .. }),
            "{name}: expected InvalidName, got {err:?}"
        );
    }
}

#[test]
fn test_style_stack_with_and_without_no_latex() {
    assert_eq!(
        style_stack("acl", "1col", "line", false).unwrap(),
        vec!["science", "acl-1col-line"]
    );
    assert_eq!(
        style_stack("acl", "1col", "line", true).unwrap(),
        vec!["science", "acl-1col-line", "no-latex"]
    );
}

#[test]
fn test_style_stack_uses_canonical_name() {
    assert_eq!(
        style_stack("NIPS", "Two_Column", "Image", false).unwrap(),
        vec!["science", "neurips-2col-image-grid"]
    );
}
