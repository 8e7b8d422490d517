use crate::common::*;

use crate::enums::duplicate_rule::*;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct AggregationConfig {
    #[serde(default)]
    pub duplicate_rule: DuplicateRule,
}
