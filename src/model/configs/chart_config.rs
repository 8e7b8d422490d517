use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub y_desc: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 800,
            y_desc: "Cost ($)".to_string(),
        }
    }
}
