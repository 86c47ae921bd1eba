//! Typed vocabulary shared by the exercises
//!
//! Small closed sets of values are proper Rust enums instead of strings, so an
//! engine status can never be misspelled.

use strum::{Display, EnumIter};

/// Engine state of a [`crate::car::Car`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum EngineStatus {
    #[default]
    Off,
    On,
}

impl EngineStatus {
    /// Returns true if the engine is running
    pub fn is_running(self) -> bool {
        matches!(self, Self::On)
    }
}

/// Built-in data type categories covered by the tour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TypeCategory {
    Text,
    Numeric,
    Sequence,
    Mapping,
    Set,
    Boolean,
    Binary,
    None,
}

impl TypeCategory {
    /// Rust types that fill this category
    pub const fn members(self) -> &'static [&'static str] {
        match self {
            Self::Text => &["String", "&str", "char"],
            Self::Numeric => &["i64", "f64", "Complex"],
            Self::Sequence => &["Vec<T>", "(T, U, V)", "Range<i64>"],
            Self::Mapping => &["HashMap<K, V>", "BTreeMap<K, V>"],
            Self::Set => &["HashSet<T>", "BTreeSet<T>"],
            Self::Boolean => &["bool"],
            Self::Binary => &["Vec<u8>", "[u8; N]", "&[u8]"],
            Self::None => &["()", "Option<T>"],
        }
    }

    /// Label used when printing the category table
    pub fn heading(self) -> String {
        match self {
            Self::Text | Self::Boolean | Self::Mapping | Self::None => format!("{self} Type"),
            _ => format!("{self} Types"),
        }
    }
}
