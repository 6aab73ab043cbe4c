//! Aesthetic mapping bundles.
//!
//! Each geometry has a fixed vocabulary of visual channels (x, y, color, …).
//! A bundle collects the caller's channel bindings and is *sealed* — consumed
//! exactly once — into the generic [`Options`] representation.

use crate::options::{OptionValue, Options};

/// A value bound to an aesthetic channel.
///
/// A plain `&str` converts to a column reference, matching the grammar
/// convention that `x = "X"` binds the column named `X`. Use [`lit`] for a
/// literal string such as a color constant.
#[derive(Debug, Clone, PartialEq)]
pub enum AesValue {
    /// Bind the channel to a data column.
    Column(String),
    /// Bind the channel to a constant value.
    Literal(OptionValue),
}

impl From<&str> for AesValue {
    fn from(column: &str) -> Self {
        AesValue::Column(column.to_string())
    }
}

impl From<String> for AesValue {
    fn from(column: String) -> Self {
        AesValue::Column(column)
    }
}

impl From<f64> for AesValue {
    fn from(v: f64) -> Self {
        AesValue::Literal(OptionValue::Number(v))
    }
}

impl From<f32> for AesValue {
    fn from(v: f32) -> Self {
        AesValue::Literal(OptionValue::Number(f64::from(v)))
    }
}

impl From<i32> for AesValue {
    fn from(v: i32) -> Self {
        AesValue::Literal(OptionValue::Int(i64::from(v)))
    }
}

impl From<i64> for AesValue {
    fn from(v: i64) -> Self {
        AesValue::Literal(OptionValue::Int(v))
    }
}

impl From<bool> for AesValue {
    fn from(v: bool) -> Self {
        AesValue::Literal(OptionValue::Bool(v))
    }
}

impl From<AesValue> for OptionValue {
    fn from(v: AesValue) -> Self {
        match v {
            AesValue::Column(name) => OptionValue::Column(name),
            AesValue::Literal(value) => value,
        }
    }
}

/// Bind an aesthetic channel to a literal value instead of a column.
#[must_use]
pub fn lit(value: impl Into<OptionValue>) -> AesValue {
    AesValue::Literal(value.into())
}

/// Capability of lowering a typed bundle into [`Options`].
///
/// `seal` takes the bundle by value: it is consumed exactly once. `Options`
/// itself does not implement this trait, so sealed output cannot be sealed
/// again. Sealing never fails and performs no validation; semantic checks
/// belong to the rendering backend.
pub trait OptionsCapsule {
    /// Lower this bundle into an ordered option map, emitting one entry per
    /// declared channel with `None` for channels the caller left unset.
    fn seal(self) -> Options;
}

fn entry(value: Option<AesValue>) -> Option<OptionValue> {
    value.map(OptionValue::from)
}

/// Top-level aesthetic mapping shared by all layers of a plot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotAes {
    /// X position.
    pub x: Option<AesValue>,
    /// Y position.
    pub y: Option<AesValue>,
    /// Opacity.
    pub alpha: Option<AesValue>,
    /// Stroke color.
    pub color: Option<AesValue>,
    /// Fill color.
    pub fill: Option<AesValue>,
    /// Grouping.
    pub group: Option<AesValue>,
}

impl PlotAes {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the x channel.
    #[must_use]
    pub fn x(mut self, v: impl Into<AesValue>) -> Self {
        self.x = Some(v.into());
        self
    }

    /// Bind the y channel.
    #[must_use]
    pub fn y(mut self, v: impl Into<AesValue>) -> Self {
        self.y = Some(v.into());
        self
    }

    /// Bind the alpha channel.
    #[must_use]
    pub fn alpha(mut self, v: impl Into<AesValue>) -> Self {
        self.alpha = Some(v.into());
        self
    }

    /// Bind the color channel.
    #[must_use]
    pub fn color(mut self, v: impl Into<AesValue>) -> Self {
        self.color = Some(v.into());
        self
    }

    /// Bind the fill channel.
    #[must_use]
    pub fn fill(mut self, v: impl Into<AesValue>) -> Self {
        self.fill = Some(v.into());
        self
    }

    /// Bind the group channel.
    #[must_use]
    pub fn group(mut self, v: impl Into<AesValue>) -> Self {
        self.group = Some(v.into());
        self
    }
}

impl OptionsCapsule for PlotAes {
    fn seal(self) -> Options {
        Options::of([
            ("x", entry(self.x)),
            ("y", entry(self.y)),
            ("alpha", entry(self.alpha)),
            ("color", entry(self.color)),
            ("fill", entry(self.fill)),
            ("group", entry(self.group)),
        ])
    }
}

/// Aesthetics understood by the point geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointAes {
    /// X position.
    pub x: Option<AesValue>,
    /// Y position.
    pub y: Option<AesValue>,
    /// Opacity.
    pub alpha: Option<AesValue>,
    /// Stroke color.
    pub color: Option<AesValue>,
    /// Fill color.
    pub fill: Option<AesValue>,
    /// Point shape.
    pub shape: Option<AesValue>,
    /// Point size.
    pub size: Option<AesValue>,
    /// Stroke width of shapes with an outline.
    pub stroke: Option<AesValue>,
}

impl PointAes {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the x channel.
    #[must_use]
    pub fn x(mut self, v: impl Into<AesValue>) -> Self {
        self.x = Some(v.into());
        self
    }

    /// Bind the y channel.
    #[must_use]
    pub fn y(mut self, v: impl Into<AesValue>) -> Self {
        self.y = Some(v.into());
        self
    }

    /// Bind the alpha channel.
    #[must_use]
    pub fn alpha(mut self, v: impl Into<AesValue>) -> Self {
        self.alpha = Some(v.into());
        self
    }

    /// Bind the color channel.
    #[must_use]
    pub fn color(mut self, v: impl Into<AesValue>) -> Self {
        self.color = Some(v.into());
        self
    }

    /// Bind the fill channel.
    #[must_use]
    pub fn fill(mut self, v: impl Into<AesValue>) -> Self {
        self.fill = Some(v.into());
        self
    }

    /// Bind the shape channel.
    #[must_use]
    pub fn shape(mut self, v: impl Into<AesValue>) -> Self {
        self.shape = Some(v.into());
        self
    }

    /// Bind the size channel.
    #[must_use]
    pub fn size(mut self, v: impl Into<AesValue>) -> Self {
        self.size = Some(v.into());
        self
    }

    /// Bind the stroke channel.
    #[must_use]
    pub fn stroke(mut self, v: impl Into<AesValue>) -> Self {
        self.stroke = Some(v.into());
        self
    }
}

impl OptionsCapsule for PointAes {
    fn seal(self) -> Options {
        Options::of([
            ("x", entry(self.x)),
            ("y", entry(self.y)),
            ("alpha", entry(self.alpha)),
            ("color", entry(self.color)),
            ("fill", entry(self.fill)),
            ("shape", entry(self.shape)),
            ("size", entry(self.size)),
            ("stroke", entry(self.stroke)),
        ])
    }
}

/// Aesthetics understood by the path geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathAes {
    /// X position.
    pub x: Option<AesValue>,
    /// Y position.
    pub y: Option<AesValue>,
    /// Opacity.
    pub alpha: Option<AesValue>,
    /// Stroke color.
    pub color: Option<AesValue>,
    /// Line type (solid, dashed, …).
    pub linetype: Option<AesValue>,
    /// Line width.
    pub size: Option<AesValue>,
    /// Animation speed for flow paths.
    pub speed: Option<AesValue>,
    /// Flow direction for flow paths.
    pub flow: Option<AesValue>,
}

impl PathAes {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the x channel.
    #[must_use]
    pub fn x(mut self, v: impl Into<AesValue>) -> Self {
        self.x = Some(v.into());
        self
    }

    /// Bind the y channel.
    #[must_use]
    pub fn y(mut self, v: impl Into<AesValue>) -> Self {
        self.y = Some(v.into());
        self
    }

    /// Bind the alpha channel.
    #[must_use]
    pub fn alpha(mut self, v: impl Into<AesValue>) -> Self {
        self.alpha = Some(v.into());
        self
    }

    /// Bind the color channel.
    #[must_use]
    pub fn color(mut self, v: impl Into<AesValue>) -> Self {
        self.color = Some(v.into());
        self
    }

    /// Bind the linetype channel.
    #[must_use]
    pub fn linetype(mut self, v: impl Into<AesValue>) -> Self {
        self.linetype = Some(v.into());
        self
    }

    /// Bind the size channel.
    #[must_use]
    pub fn size(mut self, v: impl Into<AesValue>) -> Self {
        self.size = Some(v.into());
        self
    }

    /// Bind the speed channel.
    #[must_use]
    pub fn speed(mut self, v: impl Into<AesValue>) -> Self {
        self.speed = Some(v.into());
        self
    }

    /// Bind the flow channel.
    #[must_use]
    pub fn flow(mut self, v: impl Into<AesValue>) -> Self {
        self.flow = Some(v.into());
        self
    }
}

impl OptionsCapsule for PathAes {
    fn seal(self) -> Options {
        Options::of([
            ("x", entry(self.x)),
            ("y", entry(self.y)),
            ("alpha", entry(self.alpha)),
            ("color", entry(self.color)),
            ("linetype", entry(self.linetype)),
            ("size", entry(self.size)),
            ("speed", entry(self.speed)),
            ("flow", entry(self.flow)),
        ])
    }
}

/// Aesthetics understood by the histogram geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistogramAes {
    /// X position.
    pub x: Option<AesValue>,
    /// Y position.
    pub y: Option<AesValue>,
    /// Opacity.
    pub alpha: Option<AesValue>,
    /// Bar outline color.
    pub color: Option<AesValue>,
    /// Bar fill color.
    pub fill: Option<AesValue>,
    /// Bar outline width.
    pub size: Option<AesValue>,
}

impl HistogramAes {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the x channel.
    #[must_use]
    pub fn x(mut self, v: impl Into<AesValue>) -> Self {
        self.x = Some(v.into());
        self
    }

    /// Bind the y channel.
    #[must_use]
    pub fn y(mut self, v: impl Into<AesValue>) -> Self {
        self.y = Some(v.into());
        self
    }

    /// Bind the alpha channel.
    #[must_use]
    pub fn alpha(mut self, v: impl Into<AesValue>) -> Self {
        self.alpha = Some(v.into());
        self
    }

    /// Bind the color channel.
    #[must_use]
    pub fn color(mut self, v: impl Into<AesValue>) -> Self {
        self.color = Some(v.into());
        self
    }

    /// Bind the fill channel.
    #[must_use]
    pub fn fill(mut self, v: impl Into<AesValue>) -> Self {
        self.fill = Some(v.into());
        self
    }

    /// Bind the size channel.
    #[must_use]
    pub fn size(mut self, v: impl Into<AesValue>) -> Self {
        self.size = Some(v.into());
        self
    }
}

impl OptionsCapsule for HistogramAes {
    fn seal(self) -> Options {
        Options::of([
            ("x", entry(self.x)),
            ("y", entry(self.y)),
            ("alpha", entry(self.alpha)),
            ("color", entry(self.color)),
            ("fill", entry(self.fill)),
            ("size", entry(self.size)),
        ])
    }
}

/// Aesthetics understood by the boxplot geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxplotAes {
    /// X position (category).
    pub x: Option<AesValue>,
    /// Y position (value).
    pub y: Option<AesValue>,
    /// Opacity.
    pub alpha: Option<AesValue>,
    /// Box outline color.
    pub color: Option<AesValue>,
    /// Box fill color.
    pub fill: Option<AesValue>,
    /// Line type of whiskers and outline.
    pub linetype: Option<AesValue>,
    /// Outlier point shape.
    pub shape: Option<AesValue>,
    /// Line width.
    pub size: Option<AesValue>,
    /// Box width.
    pub width: Option<AesValue>,
}

impl BoxplotAes {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the x channel.
    #[must_use]
    pub fn x(mut self, v: impl Into<AesValue>) -> Self {
        self.x = Some(v.into());
        self
    }

    /// Bind the y channel.
    #[must_use]
    pub fn y(mut self, v: impl Into<AesValue>) -> Self {
        self.y = Some(v.into());
        self
    }

    /// Bind the alpha channel.
    #[must_use]
    pub fn alpha(mut self, v: impl Into<AesValue>) -> Self {
        self.alpha = Some(v.into());
        self
    }

    /// Bind the color channel.
    #[must_use]
    pub fn color(mut self, v: impl Into<AesValue>) -> Self {
        self.color = Some(v.into());
        self
    }

    /// Bind the fill channel.
    #[must_use]
    pub fn fill(mut self, v: impl Into<AesValue>) -> Self {
        self.fill = Some(v.into());
        self
    }

    /// Bind the linetype channel.
    #[must_use]
    pub fn linetype(mut self, v: impl Into<AesValue>) -> Self {
        self.linetype = Some(v.into());
        self
    }

    /// Bind the shape channel.
    #[must_use]
    pub fn shape(mut self, v: impl Into<AesValue>) -> Self {
        self.shape = Some(v.into());
        self
    }

    /// Bind the size channel.
    #[must_use]
    pub fn size(mut self, v: impl Into<AesValue>) -> Self {
        self.size = Some(v.into());
        self
    }

    /// Bind the width channel.
    #[must_use]
    pub fn width(mut self, v: impl Into<AesValue>) -> Self {
        self.width = Some(v.into());
        self
    }
}

impl OptionsCapsule for BoxplotAes {
    fn seal(self) -> Options {
        Options::of([
            ("x", entry(self.x)),
            ("y", entry(self.y)),
            ("alpha", entry(self.alpha)),
            ("color", entry(self.color)),
            ("fill", entry(self.fill)),
            ("linetype", entry(self.linetype)),
            ("shape", entry(self.shape)),
            ("size", entry(self.size)),
            ("width", entry(self.width)),
        ])
    }
}
