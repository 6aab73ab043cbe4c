//! Plot specification and the `+` composition operator.
//!
//! A [`Plot`] aggregates an optional data table, an optional top-level
//! aesthetic mapping, and an ordered list of features. Combining a plot with
//! a feature is a pure append: data and mapping carry over unchanged and
//! feature order is preserved exactly as composed, since later features may
//! override earlier ones at render time.

use std::ops::Add;

use crate::aes::{OptionsCapsule, PlotAes};
use crate::data::DataFrame;
use crate::feature::Feature;
use crate::options::Options;

/// A composed plot specification.
///
/// Grows only by `+`; every combination yields a new specification value and
/// never fails. The lifecycle ends when the specification is serialized for
/// the rendering backend or discarded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Plot {
    data: Option<DataFrame>,
    mapping: Options,
    features: Vec<Feature>,
}

impl Plot {
    /// Create an empty specification: no data, no mapping, no features.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data table.
    #[must_use]
    pub fn data(mut self, data: DataFrame) -> Self {
        self.data = Some(data);
        self
    }

    /// Set the top-level aesthetic mapping, sealing it immediately.
    #[must_use]
    pub fn aes(mut self, mapping: PlotAes) -> Self {
        self.mapping = mapping.seal();
        self
    }

    /// The sealed top-level mapping (empty when none was given).
    #[must_use]
    pub fn mapping(&self) -> &Options {
        &self.mapping
    }

    /// Features in composition order.
    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// The data table, if any.
    #[must_use]
    pub fn data_table(&self) -> Option<&DataFrame> {
        self.data.as_ref()
    }
}

impl<F: Into<Feature>> Add<F> for Plot {
    type Output = Plot;

    fn add(mut self, feature: F) -> Plot {
        self.features.push(feature.into());
        self
    }
}

/// Create an empty plot specification.
#[must_use]
pub fn ggplot() -> Plot {
    Plot::new()
}

/// Create a plot specification over a data table.
#[must_use]
pub fn lets_plot(data: DataFrame) -> Plot {
    Plot::new().data(data)
}
