use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct CloudConfig {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default = "default_cost_explorer_region")]
    pub cost_explorer_region: String,
}

fn default_cost_explorer_region() -> String {
    "us-east-1".to_string()
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            region: None,
            cost_explorer_region: default_cost_explorer_region(),
        }
    }
}
