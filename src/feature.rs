//! Addable plot features.
//!
//! A [`Feature`] is anything that can be combined into a plot with `+`:
//! geometry layers, scale directives, and plain kind/options pairs like the
//! size and title directives.

use crate::geom::Layer;
use crate::options::{OptionValue, Options};
use crate::scale::Scale;

/// Any addable plot component other than the base specification.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    /// A geometry layer.
    Layer(Layer),
    /// A scale directive.
    Scale(Scale),
    /// A plain kind/options directive (size, title, …).
    Other(OtherPlotFeature),
}

impl Feature {
    /// Stable kind tag naming the option namespace of this feature.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Feature::Layer(layer) => layer.geom.kind(),
            Feature::Scale(_) => "scale",
            Feature::Other(other) => other.kind,
        }
    }
}

impl From<Layer> for Feature {
    fn from(layer: Layer) -> Self {
        Feature::Layer(layer)
    }
}

impl From<Scale> for Feature {
    fn from(scale: Scale) -> Self {
        Feature::Scale(scale)
    }
}

impl From<OtherPlotFeature> for Feature {
    fn from(other: OtherPlotFeature) -> Self {
        Feature::Other(other)
    }
}

/// A plot feature that is neither a layer nor a scale.
#[derive(Debug, Clone, PartialEq)]
pub struct OtherPlotFeature {
    /// Stable kind tag, also the key this feature merges under in the
    /// serialized specification.
    pub kind: &'static str,
    /// Option payload.
    pub options: Options,
}

/// Fix the overall plot size in pixels.
#[must_use]
pub fn ggsize(width: u32, height: u32) -> OtherPlotFeature {
    OtherPlotFeature {
        kind: "ggsize",
        options: Options::of([
            ("width", Some(OptionValue::from(width))),
            ("height", Some(OptionValue::from(height))),
        ]),
    }
}

/// Set the plot title.
#[must_use]
pub fn ggtitle(title: impl Into<String>) -> OtherPlotFeature {
    OtherPlotFeature {
        kind: "ggtitle",
        options: Options::of([("text", Some(OptionValue::Text(title.into())))]),
    }
}
