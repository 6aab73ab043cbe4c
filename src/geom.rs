//! Geometry layers.
//!
//! A [`Layer`] pairs a geometry kind with its sealed aesthetic mapping and an
//! optional statistical transform declaration. Nothing is computed here: the
//! layer only names the transform for the rendering backend.

use crate::aes::{BoxplotAes, HistogramAes, OptionsCapsule, PathAes, PointAes};
use crate::data::DataFrame;
use crate::options::{OptionValue, Options};

/// Geometry kind, carrying its constant parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum GeomKind {
    /// Points.
    Point,
    /// Connected path.
    Path,
    /// Histogram bars.
    Histogram {
        /// Number of bins, backend default when unset.
        bins: Option<usize>,
    },
    /// Box-and-whisker plot.
    Boxplot {
        /// Color for outlier points.
        outlier_color: Option<String>,
        /// Shape code for outlier points.
        outlier_shape: Option<i32>,
        /// Size for outlier points.
        outlier_size: Option<f64>,
    },
}

impl GeomKind {
    /// Stable kind tag naming the option namespace.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GeomKind::Point => "point",
            GeomKind::Path => "path",
            GeomKind::Histogram { .. } => "histogram",
            GeomKind::Boxplot { .. } => "boxplot",
        }
    }

    /// Constant parameters as an option map (set entries only).
    #[must_use]
    pub fn params(&self) -> Options {
        match self {
            GeomKind::Point | GeomKind::Path => Options::new(),
            GeomKind::Histogram { bins } => {
                Options::of([("bins", bins.map(OptionValue::from))])
            }
            GeomKind::Boxplot {
                outlier_color,
                outlier_shape,
                outlier_size,
            } => Options::of([
                (
                    "outlier_color",
                    outlier_color.clone().map(OptionValue::Text),
                ),
                ("outlier_shape", outlier_shape.map(OptionValue::from)),
                ("outlier_size", outlier_size.map(OptionValue::from)),
            ]),
        }
    }
}

/// Statistical transform declared on a layer.
///
/// Purely declarative: the backend performs the computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stat {
    /// No transformation.
    Identity,
    /// Count occurrences.
    Count,
    /// Bin continuous data.
    Bin {
        /// Number of bins.
        bins: usize,
    },
    /// Five-number summary for boxplots.
    Boxplot,
    /// Kernel density estimate.
    Density,
}

impl Stat {
    /// Default bin count for the bin stat.
    pub const DEFAULT_BINS: usize = 30;

    /// Stable kind tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Stat::Identity => "identity",
            Stat::Count => "count",
            Stat::Bin { .. } => "bin",
            Stat::Boxplot => "boxplot",
            Stat::Density => "density",
        }
    }

    /// Stat parameters as an option map (set entries only).
    #[must_use]
    pub fn params(&self) -> Options {
        match self {
            Stat::Bin { bins } => Options::of([("bins", Some(OptionValue::from(*bins)))]),
            _ => Options::new(),
        }
    }
}

/// A geometry layer of a plot specification.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// The geometry and its constant parameters.
    pub geom: GeomKind,
    /// The declared statistical transform.
    pub stat: Stat,
    /// Sealed aesthetic mapping for this layer.
    pub mapping: Options,
    /// Layer-specific data (if different from plot data).
    pub data: Option<DataFrame>,
}

impl Layer {
    /// Create a layer from a geometry, its default stat and a sealed mapping.
    #[must_use]
    pub fn new(geom: GeomKind, stat: Stat, mapping: Options) -> Self {
        Self { geom, stat, mapping, data: None }
    }

    /// Set layer-specific data.
    #[must_use]
    pub fn data(mut self, data: DataFrame) -> Self {
        self.data = Some(data);
        self
    }

    /// Override the declared stat.
    #[must_use]
    pub fn stat(mut self, stat: Stat) -> Self {
        self.stat = stat;
        self
    }

    /// Set the number of bins. No-op for geometries without bins.
    #[must_use]
    pub fn bins(mut self, bins: usize) -> Self {
        if let GeomKind::Histogram { bins: ref mut b } = self.geom {
            *b = Some(bins);
            self.stat = Stat::Bin { bins };
        }
        self
    }

    /// Set the outlier color. No-op for non-boxplot geometries.
    #[must_use]
    pub fn outlier_color(mut self, color: impl Into<String>) -> Self {
        if let GeomKind::Boxplot { outlier_color: ref mut c, .. } = self.geom {
            *c = Some(color.into());
        }
        self
    }

    /// Set the outlier shape code. No-op for non-boxplot geometries.
    #[must_use]
    pub fn outlier_shape(mut self, shape: i32) -> Self {
        if let GeomKind::Boxplot { outlier_shape: ref mut s, .. } = self.geom {
            *s = Some(shape);
        }
        self
    }

    /// Set the outlier size. No-op for non-boxplot geometries.
    #[must_use]
    pub fn outlier_size(mut self, size: f64) -> Self {
        if let GeomKind::Boxplot { outlier_size: ref mut s, .. } = self.geom {
            *s = Some(size);
        }
        self
    }
}

/// Create a point layer from its aesthetic mapping.
#[must_use]
pub fn geom_point(mapping: PointAes) -> Layer {
    Layer::new(GeomKind::Point, Stat::Identity, mapping.seal())
}

/// Create a path layer from its aesthetic mapping.
#[must_use]
pub fn geom_path(mapping: PathAes) -> Layer {
    Layer::new(GeomKind::Path, Stat::Identity, mapping.seal())
}

/// Create a histogram layer from its aesthetic mapping.
#[must_use]
pub fn geom_histogram(mapping: HistogramAes) -> Layer {
    Layer::new(
        GeomKind::Histogram { bins: None },
        Stat::Bin { bins: Stat::DEFAULT_BINS },
        mapping.seal(),
    )
}

/// Create a boxplot layer from its aesthetic mapping.
#[must_use]
pub fn geom_boxplot(mapping: BoxplotAes) -> Layer {
    Layer::new(
        GeomKind::Boxplot {
            outlier_color: None,
            outlier_shape: None,
            outlier_size: None,
        },
        Stat::Boxplot,
        mapping.seal(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionValue;

    #[test]
    fn test_geom_point_defaults() {
        let layer = geom_point(PointAes::new().x("X"));
        assert_eq!(layer.geom.kind(), "point");
        assert_eq!(layer.stat, Stat::Identity);
        assert_eq!(
            layer.mapping.get("x"),
            Some(&OptionValue::Column("X".into()))
        );
    }

    #[test]
    fn test_geom_histogram_default_stat() {
        let layer = geom_histogram(HistogramAes::new().x("val"));
        assert_eq!(layer.stat, Stat::Bin { bins: Stat::DEFAULT_BINS });
        assert!(layer.geom.params().get("bins").is_none());
    }

    #[test]
    fn test_geom_histogram_bins() {
        let layer = geom_histogram(HistogramAes::new()).bins(50);
        assert_eq!(layer.geom.params().get("bins"), Some(&OptionValue::Int(50)));
        assert_eq!(layer.stat, Stat::Bin { bins: 50 });
    }

    #[test]
    fn test_bins_noop_on_point() {
        let layer = geom_point(PointAes::new()).bins(50);
        assert_eq!(layer.geom, GeomKind::Point);
        assert_eq!(layer.stat, Stat::Identity);
    }

    #[test]
    fn test_geom_boxplot_outliers() {
        let layer = geom_boxplot(BoxplotAes::new().x("cat").y("val"))
            .outlier_color("red")
            .outlier_size(3.0);
        let params = layer.geom.params();
        assert_eq!(
            params.get("outlier_color"),
            Some(&OptionValue::Text("red".into()))
        );
        assert_eq!(params.get("outlier_size"), Some(&OptionValue::Number(3.0)));
        assert_eq!(params.get("outlier_shape"), None);
        assert_eq!(layer.stat, Stat::Boxplot);
    }

    #[test]
    fn test_outlier_noop_on_path() {
        let layer = geom_path(PathAes::new()).outlier_color("red");
        assert_eq!(layer.geom, GeomKind::Path);
    }

    #[test]
    fn test_layer_data() {
        let mut df = DataFrame::new();
        df.add_column_f64("x", &[1.0, 2.0]);
        let layer = geom_point(PointAes::new()).data(df);
        assert!(layer.data.is_some());
    }

    #[test]
    fn test_layer_stat_override() {
        let layer = geom_point(PointAes::new()).stat(Stat::Density);
        assert_eq!(layer.stat.kind(), "density");
    }

    #[test]
    fn test_stat_params() {
        assert!(Stat::Identity.params().is_empty());
        assert_eq!(
            Stat::Bin { bins: 10 }.params().get("bins"),
            Some(&OptionValue::Int(10))
        );
    }

    #[test]
    fn test_geom_kind_tags() {
        assert_eq!(GeomKind::Point.kind(), "point");
        assert_eq!(GeomKind::Path.kind(), "path");
        assert_eq!(GeomKind::Histogram { bins: None }.kind(), "histogram");
    }
}
