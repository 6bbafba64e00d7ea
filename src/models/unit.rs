use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitDescriptor {
    pub abbreviation: String,
    pub display_name: String,
}

impl UnitDescriptor {
    pub fn new(abbreviation: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self { abbreviation: abbreviation.into(), display_name: display_name.into() }
    }
}
