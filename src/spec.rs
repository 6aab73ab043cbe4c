//! Translation of a composed plot into the renderer's specification tree.
//!
//! The rendering backend consumes a JSON-like tree:
//!
//! ```json
//! {
//!   "kind": "plot",
//!   "data": { "x": [1, 2], "y": [3, 4] },
//!   "mapping": { "x": "x", "y": "y", "alpha": null, ... },
//!   "layers": [ { "geom": "point", "stat": "identity", "mapping": {...} } ],
//!   "scales": [ { "aesthetic": "size", "guide": "none" } ],
//!   "ggtitle": { "text": "..." }
//! }
//! ```
//!
//! Sealed mappings keep every declared key, emitting `null` for unset
//! channels. Constant parameters emit set entries only. Layers and scales
//! keep composition order; plain features merge under their kind key, with a
//! later feature of the same kind replacing an earlier one.

use std::fs;
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::data::{DataFrame, DataValue};
use crate::error::Result;
use crate::feature::Feature;
use crate::geom::Layer;
use crate::options::{OptionValue, Options};
use crate::plot::Plot;
use crate::scale::Scale;

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            // A column reference reaches the wire as its bare name; the
            // renderer resolves it against the data table.
            OptionValue::Column(name) | OptionValue::Text(name) => {
                serializer.serialize_str(name)
            }
            OptionValue::Number(n) => serializer.serialize_f64(*n),
            OptionValue::Int(i) => serializer.serialize_i64(*i),
            OptionValue::Bool(b) => serializer.serialize_bool(*b),
            OptionValue::List(items) => serializer.collect_seq(items),
            OptionValue::Map(options) => options.serialize(serializer),
        }
    }
}

impl Serialize for Options {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, &value)?;
        }
        map.end()
    }
}

impl Serialize for DataValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            DataValue::Number(n) => serializer.serialize_f64(*n),
            DataValue::Int(i) => serializer.serialize_i64(*i),
            DataValue::Text(s) => serializer.serialize_str(s),
            DataValue::Bool(b) => serializer.serialize_bool(*b),
            DataValue::Null => serializer.serialize_none(),
        }
    }
}

impl Serialize for DataFrame {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.ncol()))?;
        for (name, values) in self.iter() {
            map.serialize_entry(name, values)?;
        }
        map.end()
    }
}

impl Serialize for Layer {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("geom", self.geom.kind())?;
        map.serialize_entry("stat", self.stat.kind())?;
        map.serialize_entry("mapping", &self.mapping)?;
        if let Some(data) = &self.data {
            map.serialize_entry("data", data)?;
        }
        // Geometry parameters first; the stat contributes only keys the
        // geometry did not already emit (e.g. the default bin count).
        let geom_params = self.geom.params();
        let mut emitted: Vec<&str> = Vec::new();
        for (key, value) in geom_params.iter() {
            if let Some(value) = value {
                map.serialize_entry(key, value)?;
                emitted.push(key);
            }
        }
        for (key, value) in self.stat.params().iter() {
            if let Some(value) = value {
                if !emitted.contains(&key) {
                    map.serialize_entry(key, value)?;
                }
            }
        }
        map.end()
    }
}

impl Serialize for Scale {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let options = self.options();
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in options.iter() {
            if let Some(value) = value {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

impl Serialize for Plot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut layers: Vec<&Layer> = Vec::new();
        let mut scales: Vec<&Scale> = Vec::new();
        // Kind -> options, position by first occurrence, payload by last.
        let mut others: Vec<(&'static str, &Options)> = Vec::new();
        for feature in self.features() {
            match feature {
                Feature::Layer(layer) => layers.push(layer),
                Feature::Scale(scale) => scales.push(scale),
                Feature::Other(other) => {
                    if let Some(slot) = others.iter_mut().find(|(k, _)| *k == other.kind) {
                        slot.1 = &other.options;
                    } else {
                        others.push((other.kind, &other.options));
                    }
                }
            }
        }

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", "plot")?;
        if let Some(data) = self.data_table() {
            map.serialize_entry("data", data)?;
        }
        map.serialize_entry("mapping", self.mapping())?;
        map.serialize_entry("layers", &layers)?;
        map.serialize_entry("scales", &scales)?;
        for (kind, options) in others {
            map.serialize_entry(kind, options)?;
        }
        map.end()
    }
}

impl Plot {
    /// Translate into a JSON value tree for an in-process backend.
    pub fn to_spec(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON specification to a file for an external backend.
    pub fn write_spec(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::aes::{HistogramAes, OptionsCapsule, PlotAes, PointAes};
    use crate::data::DataFrame;
    use crate::feature::{ggsize, ggtitle};
    use crate::geom::{geom_histogram, geom_point};
    use crate::options::Options;
    use crate::plot::{ggplot, lets_plot};
    use crate::scale::scale_size;
    use serde_json::Value;

    #[test]
    fn test_mapping_serializes_ordered_with_nulls() {
        let opts = PlotAes::new().x("X").y("Y").seal();
        let json = serde_json::to_string(&opts).unwrap();
        assert_eq!(
            json,
            r#"{"x":"X","y":"Y","alpha":null,"color":null,"fill":null,"group":null}"#
        );
    }

    #[test]
    fn test_empty_options_serialize() {
        let json = serde_json::to_string(&Options::new()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_plot_spec_shape() {
        let mut df = DataFrame::new();
        df.add_column_f64("x", &[1.0, 2.0]);
        df.add_column_f64("y", &[3.0, 4.0]);

        let p = lets_plot(df).aes(PlotAes::new().x("x").y("y"))
            + geom_point(PointAes::new().color("x"))
            + scale_size().guide("none")
            + ggtitle("demo");

        let spec = p.to_spec().unwrap();
        assert_eq!(spec["kind"], "plot");
        assert_eq!(spec["data"]["x"], serde_json::json!([1.0, 2.0]));
        assert_eq!(spec["mapping"]["x"], "x");
        assert_eq!(spec["mapping"]["alpha"], Value::Null);
        assert_eq!(spec["layers"][0]["geom"], "point");
        assert_eq!(spec["layers"][0]["stat"], "identity");
        assert_eq!(spec["layers"][0]["mapping"]["color"], "x");
        assert_eq!(spec["scales"][0]["aesthetic"], "size");
        assert_eq!(spec["scales"][0]["guide"], "none");
        assert!(spec["scales"][0].get("range").is_none());
        assert_eq!(spec["ggtitle"]["text"], "demo");
    }

    #[test]
    fn test_layers_keep_order() {
        let p = ggplot()
            + geom_point(PointAes::new().x("a"))
            + geom_point(PointAes::new().x("b"));
        let spec = p.to_spec().unwrap();
        assert_eq!(spec["layers"][0]["mapping"]["x"], "a");
        assert_eq!(spec["layers"][1]["mapping"]["x"], "b");
    }

    #[test]
    fn test_later_plain_feature_wins() {
        let p = ggplot() + ggsize(100, 100) + ggsize(640, 480);
        let spec = p.to_spec().unwrap();
        assert_eq!(spec["ggsize"]["width"], 640);
        assert_eq!(spec["ggsize"]["height"], 480);
    }

    #[test]
    fn test_histogram_default_bins_from_stat() {
        let p = ggplot() + geom_histogram(HistogramAes::new().x("val"));
        let spec = p.to_spec().unwrap();
        assert_eq!(spec["layers"][0]["stat"], "bin");
        assert_eq!(spec["layers"][0]["bins"], 30);
    }

    #[test]
    fn test_histogram_explicit_bins_not_duplicated() {
        let p = ggplot() + geom_histogram(HistogramAes::new().x("val")).bins(50);
        let json = p.to_json().unwrap();
        assert_eq!(json.matches("\"bins\"").count(), 1);
        let spec = p.to_spec().unwrap();
        assert_eq!(spec["layers"][0]["bins"], 50);
    }

    #[test]
    fn test_empty_plot_spec() {
        let spec = ggplot().to_spec().unwrap();
        assert_eq!(spec["kind"], "plot");
        assert!(spec.get("data").is_none());
        assert_eq!(spec["layers"], serde_json::json!([]));
        assert_eq!(spec["scales"], serde_json::json!([]));
    }

    #[test]
    fn test_write_spec_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.json");

        let p = ggplot() + geom_point(PointAes::new().x("X")) + ggtitle("saved");
        p.write_spec(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let spec: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(spec["ggtitle"]["text"], "saved");
        assert_eq!(spec["layers"][0]["mapping"]["x"], "X");
    }

    #[test]
    fn test_json_starts_with_kind() {
        let json = ggplot().to_json().unwrap();
        assert!(json.trim_start().starts_with("{\n  \"kind\": \"plot\""));
    }
}
