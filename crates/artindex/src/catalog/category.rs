//! Canonical medium categories and parent groupings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical art-medium categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Oil paintings
    OilPainting,

    /// Paintings in other (non-oil) techniques
    OtherPainting,

    /// Mixed medium
    MixedMedium,

    /// Graphics (prints)
    Graphics,

    /// Drawing
    Drawing,
}

impl Category {
    /// Returns all categories.
    pub fn all() -> Vec<Self> {
        vec![
            Self::OilPainting,
            Self::OtherPainting,
            Self::MixedMedium,
            Self::Graphics,
            Self::Drawing,
        ]
    }

    /// Canonical (Estonian) label, as stored in the cleaned datasets.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OilPainting => "Õlimaalid",
            Self::OtherPainting => "Teised (mitte õli) maalid",
            Self::MixedMedium => "Segatehnika",
            Self::Graphics => "Graafika",
            Self::Drawing => "Joonistus",
        }
    }

    /// English label, as found in raw gallery exports.
    pub const fn label_en(&self) -> &'static str {
        match self {
            Self::OilPainting => "Oil paintings",
            Self::OtherPainting => "Other (non-oil) paintings",
            Self::MixedMedium => "Mixed medium",
            Self::Graphics => "Graphics",
            Self::Drawing => "Drawing",
        }
    }

    /// Parent grouping used for coarse breakdowns.
    pub const fn parent(&self) -> CategoryParent {
        match self {
            Self::OilPainting | Self::OtherPainting => CategoryParent::Painting,
            Self::MixedMedium => CategoryParent::MixedMedium,
            Self::Graphics => CategoryParent::Graphics,
            Self::Drawing => CategoryParent::Drawing,
        }
    }

    /// Parse a category from its canonical or English label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|c| c.label() == label || c.label_en() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse parent groupings of the mediums.
///
/// The breakdown tables present parents in a fixed editorial order:
/// painting, graphics, drawing, mixed medium, other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryParent {
    /// Painting in any technique
    Painting,

    /// Graphics (prints)
    Graphics,

    /// Drawing
    Drawing,

    /// Mixed medium
    MixedMedium,

    /// Everything else
    Other,
}

impl CategoryParent {
    /// Returns all parents in presentation order.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Painting,
            Self::Graphics,
            Self::Drawing,
            Self::MixedMedium,
            Self::Other,
        ]
    }

    /// Canonical (Estonian) label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Painting => "Maal",
            Self::Graphics => "Graafika",
            Self::Drawing => "Joonistus",
            Self::MixedMedium => "Segatehnika",
            Self::Other => "Muu",
        }
    }

    /// Position in the fixed presentation order.
    pub fn sort_key(&self) -> usize {
        Self::all().iter().position(|p| p == self).unwrap_or(usize::MAX)
    }

    /// Classify a source-specific category label into a parent.
    ///
    /// Covers the fine-grained labels of the Haus gallery exports
    /// (print techniques, painting techniques) in addition to the
    /// canonical labels; anything unknown lands in [`Self::Other`].
    pub fn from_category_label(label: &str) -> Self {
        match label {
            "Maal" | "Õlimaal" | "Õlimaalid" | "Muu maalitehnika"
            | "Teised (mitte õli) maalid" => Self::Painting,
            "Graafika" | "Kõrgtrükk" | "Sügavtrükk" | "Lametrükk" | "Digitrükk" => {
                Self::Graphics
            }
            "Joonistus" | "Joonistustehnika" => Self::Drawing,
            "Segatehnika" => Self::MixedMedium,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for CategoryParent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
