use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Measurement domain constraining which units are mutually convertible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Area,
    Mass,
    Volume,
    Time,
    Temperature,
    Speed,
    Angle,
    Digital,
}

impl Category {
    /// Every category, in the order offered to the user
    pub const ALL: [Category; 9] = [
        Category::Length,
        Category::Area,
        Category::Mass,
        Category::Volume,
        Category::Time,
        Category::Temperature,
        Category::Speed,
        Category::Angle,
        Category::Digital,
    ];

    /// Lowercase identifier ("length")
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Area => "area",
            Category::Mass => "mass",
            Category::Volume => "volume",
            Category::Time => "time",
            Category::Temperature => "temperature",
            Category::Speed => "speed",
            Category::Angle => "angle",
            Category::Digital => "digital",
        }
    }

    /// Capitalised label for pickers ("Length")
    pub fn label(self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Area => "Area",
            Category::Mass => "Mass",
            Category::Volume => "Volume",
            Category::Time => "Time",
            Category::Temperature => "Temperature",
            Category::Speed => "Speed",
            Category::Angle => "Angle",
            Category::Digital => "Digital",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{input}' (expected one of: {})", valid_names())]
pub struct ParseCategoryError {
    pub input: String,
}

fn valid_names() -> String {
    Category::ALL.iter().map(|c| c.as_str()).collect::<Vec<_>>().join(", ")
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseCategoryError { input: s.to_string() })
    }
}
