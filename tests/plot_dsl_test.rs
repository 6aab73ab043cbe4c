//! DSL-level tests for plot composition.

// Allow common test patterns
#![allow(clippy::unwrap_used, clippy::expect_used)]

use plotspec::prelude::*;

fn assert_maps_column(mapping: &Options, key: &str, column: &str) {
    match mapping.get(key) {
        Some(OptionValue::Column(name)) => assert_eq!(name, column),
        other => panic!("expected {key} -> column {column}, got {other:?}"),
    }
}

#[test]
fn empty_plot() {
    let p = ggplot();
    assert_eq!(p.features().len(), 0);

    let p = ggplot().aes(PlotAes::new());
    assert_eq!(p.features().len(), 0);
}

#[test]
fn empty_plot_with_mapping() {
    let p = ggplot().aes(PlotAes::new().x("X").y("Y"));
    assert_eq!(p.features().len(), 0);
    assert_maps_column(p.mapping(), "x", "X");
    assert_maps_column(p.mapping(), "y", "Y");

    let p = ggplot().aes(PlotAes::new().alpha("A").group("G"));
    assert_eq!(p.features().len(), 0);
    assert_maps_column(p.mapping(), "alpha", "A");
    assert_maps_column(p.mapping(), "group", "G");

    let p = ggplot().aes(PlotAes::new().color("C").fill("F"));
    assert_eq!(p.features().len(), 0);
    assert_maps_column(p.mapping(), "color", "C");
    assert_maps_column(p.mapping(), "fill", "F");
}

#[test]
fn mapping_declares_full_vocabulary() {
    let p = ggplot().aes(PlotAes::new().x("X").y("Y"));
    let keys: Vec<&str> = p.mapping().keys().collect();
    assert_eq!(keys, vec!["x", "y", "alpha", "color", "fill", "group"]);
    for key in ["alpha", "color", "fill", "group"] {
        assert!(p.mapping().contains_key(key));
        assert!(p.mapping().get(key).is_none());
    }
}

#[test]
fn plot_with_layer_and_mapping() {
    let p = ggplot() + geom_point(PointAes::new().x("X").color("C"));
    assert_eq!(p.features().len(), 1);

    let layer = match &p.features()[0] {
        Feature::Layer(layer) => layer,
        other => panic!("expected a layer feature, got {other:?}"),
    };
    assert_maps_column(&layer.mapping, "x", "X");
    assert_maps_column(&layer.mapping, "color", "C");
    for key in ["y", "alpha", "fill", "shape", "size", "stroke"] {
        assert!(layer.mapping.contains_key(key));
        assert!(layer.mapping.get(key).is_none());
    }
}

#[test]
fn size_scale_composition() {
    let mut dat = DataFrame::new();
    dat.add_column_int("x", &[0, 1, 2, 3, 4, 5]);
    dat.add_column_int("y", &[0, 0, 0, 0, 0, 0]);
    dat.add_column_int("s", &[0, 1, 2, 3, 4, 5]);

    let p = lets_plot(dat) + geom_point(PointAes::new().x("x").y("y").size("s"));

    let sized = p.clone() + scale_size().range((5.0, 50.0)).guide("none") + ggtitle("scale_size");
    assert_eq!(sized.features().len(), 3);

    let area = p + scale_size_area().max_size(50.0).guide("none") + ggtitle("scale_size_area");
    assert_eq!(area.features().len(), 3);
    match &area.features()[1] {
        Feature::Scale(scale) => {
            assert_eq!(scale.aesthetic, "size");
            assert_eq!(scale.mapper_kind, Some("size_area"));
        }
        other => panic!("expected a scale feature, got {other:?}"),
    }
}

#[test]
fn boxplot_with_outlier_params() {
    let mut data = DataFrame::new();
    data.add_column_str("cat", &["A", "B", "A"]);
    data.add_column_f64("val", &[1.0, 2.5, -0.5]);

    let p = lets_plot(data).aes(PlotAes::new().x("cat").y("val"))
        + geom_boxplot(BoxplotAes::new()).outlier_color("red");

    let spec = p.to_spec().unwrap();
    assert_eq!(spec["layers"][0]["geom"], "boxplot");
    assert_eq!(spec["layers"][0]["stat"], "boxplot");
    assert_eq!(spec["layers"][0]["outlier_color"], "red");
    assert_eq!(spec["mapping"]["x"], "cat");
}

#[test]
fn composition_is_pure_with_respect_to_base() {
    let base = ggplot() + geom_path(PathAes::new().x("t").y("v"));
    let with_title = base.clone() + ggtitle("series");
    assert_eq!(base.features().len(), 1);
    assert_eq!(with_title.features().len(), 2);
    assert_eq!(with_title.features()[0], base.features()[0]);
}
