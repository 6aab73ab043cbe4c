//! # Plotspec
//!
//! Declarative grammar-of-graphics plot specification DSL.
//!
//! Plotspec builds chart specifications as plain data objects: geometry
//! layers, aesthetic mappings, scales, titles and sizes are composed with the
//! `+` operator into an immutable specification value, which is then handed
//! to an external rendering backend as an ordered, null-permitting options
//! tree. No rendering, statistics, or I/O happens here apart from the final
//! export call.
//!
//! ## Quick Start
//!
//! ```rust
//! use plotspec::prelude::*;
//!
//! let mut data = DataFrame::new();
//! data.add_column_f64("x", &[1.0, 2.0, 3.0]);
//! data.add_column_f64("y", &[2.0, 4.0, 1.0]);
//!
//! let plot = lets_plot(data).aes(PlotAes::new().x("x").y("y"))
//!     + geom_point(PointAes::new().color("x"))
//!     + ggtitle("Quick start");
//!
//! let json = plot.to_json().expect("serializable specification");
//! assert!(json.contains("\"kind\": \"plot\""));
//! ```
//!
//! ## Design
//!
//! - **Aesthetic bundles** ([`aes`]): one typed bundle per geometry
//!   vocabulary, sealed exactly once into [`options::Options`].
//! - **Features** ([`feature`], [`geom`], [`scale`]): tagged values carrying a
//!   kind and an option payload, appended in order by `+`.
//! - **Specification export** ([`spec`]): one-way translation into the JSON
//!   tree the rendering backend consumes.
//!
//! ## References
//!
//! - Wilkinson, L. (2005). *The Grammar of Graphics*. Springer.
//! - Wickham, H. (2010). "A Layered Grammar of Graphics." Journal of
//!   Computational and Graphical Statistics.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]

// ============================================================================
// Core Modules
// ============================================================================

/// Aesthetic mapping bundles and the sealing trait.
pub mod aes;

/// Columnar data tables.
pub mod data;

/// Generic ordered option maps.
pub mod options;

// ============================================================================
// Composition Modules
// ============================================================================

/// Addable plot features (size, title directives).
pub mod feature;

/// Geometry layers.
pub mod geom;

/// Plot specification and the `+` operator.
pub mod plot;

/// Scale directives.
pub mod scale;

// ============================================================================
// Export Boundary
// ============================================================================

/// Translation into the renderer's specification tree.
pub mod spec;

/// Error types for plotspec operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and constructors for convenient imports.
///
/// ```rust
/// use plotspec::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aes::{
        lit, AesValue, BoxplotAes, HistogramAes, OptionsCapsule, PathAes, PlotAes, PointAes,
    };
    pub use crate::data::{DataFrame, DataValue};
    pub use crate::error::{Error, Result};
    pub use crate::feature::{ggsize, ggtitle, Feature, OtherPlotFeature};
    pub use crate::geom::{
        geom_boxplot, geom_histogram, geom_path, geom_point, GeomKind, Layer, Stat,
    };
    pub use crate::options::{OptionValue, Options};
    pub use crate::plot::{ggplot, lets_plot, Plot};
    pub use crate::scale::{scale_size, scale_size_area, Scale};
}
