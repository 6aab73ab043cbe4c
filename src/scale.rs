//! Scale directives.
//!
//! A [`Scale`] adjusts how one aesthetic channel maps data to visual values.
//! Like everything else in the DSL it is declarative: the directive names the
//! mapper and its parameters, the backend applies them.

use crate::options::{OptionValue, Options};

/// A scale directive for a single aesthetic channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    /// The aesthetic channel this scale applies to.
    pub aesthetic: &'static str,
    /// Scale name shown on the legend/axis.
    pub name: Option<String>,
    /// Guide to use, `"none"` to suppress the legend. Backend default when unset.
    pub guide: Option<String>,
    /// Output range for continuous mappers.
    pub range: Option<(f64, f64)>,
    /// Upper size bound for the area mapper.
    pub max_size: Option<f64>,
    /// Non-default mapper selector (e.g. `"size_area"`).
    pub mapper_kind: Option<&'static str>,
}

impl Scale {
    /// Create a scale for an aesthetic channel with all parameters unset.
    #[must_use]
    pub fn new(aesthetic: &'static str) -> Self {
        Self {
            aesthetic,
            name: None,
            guide: None,
            range: None,
            max_size: None,
            mapper_kind: None,
        }
    }

    /// Set the scale name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the guide (`"none"` suppresses the legend).
    #[must_use]
    pub fn guide(mut self, guide: impl Into<String>) -> Self {
        self.guide = Some(guide.into());
        self
    }

    /// Set the output range.
    #[must_use]
    pub fn range(mut self, range: (f64, f64)) -> Self {
        self.range = Some(range);
        self
    }

    /// Set the maximum size for the area mapper.
    #[must_use]
    pub fn max_size(mut self, max_size: f64) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Scale parameters as an option map (set entries only, aesthetic first).
    #[must_use]
    pub fn options(&self) -> Options {
        Options::of([
            ("aesthetic", Some(OptionValue::Text(self.aesthetic.to_string()))),
            ("name", self.name.clone().map(OptionValue::Text)),
            ("guide", self.guide.clone().map(OptionValue::Text)),
            ("range", self.range.map(OptionValue::from)),
            ("max_size", self.max_size.map(OptionValue::from)),
            (
                "scale_mapper_kind",
                self.mapper_kind.map(|k| OptionValue::Text(k.to_string())),
            ),
        ])
    }
}

/// Continuous size scale: data values map linearly onto a radius range.
#[must_use]
pub fn scale_size() -> Scale {
    Scale::new("size")
}

/// Area-proportional size scale: zero maps to zero radius.
#[must_use]
pub fn scale_size_area() -> Scale {
    Scale {
        mapper_kind: Some("size_area"),
        ..Scale::new("size")
    }
}
