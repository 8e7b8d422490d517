use crate::common::*;

#[doc = r#"
    How a tracked category is updated when the same service shows up more than once
    in a single day's breakdown.

    * `Overwrite` - the later amount replaces the earlier one (the subtotal still counts both)
    * `Accumulate` - amounts are summed
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateRule {
    #[default]
    Overwrite,
    Accumulate,
}

impl DuplicateRule {
    pub fn apply(&self, current: f64, incoming: f64) -> f64 {
        match self {
            DuplicateRule::Overwrite => incoming,
            DuplicateRule::Accumulate => current + incoming,
        }
    }
}
