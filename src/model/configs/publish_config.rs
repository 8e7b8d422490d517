use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct PublishConfig {
    pub bucket: String,
    #[serde(default = "default_object_key")]
    pub object_key: String,
    #[serde(default = "default_scratch_path")]
    pub scratch_path: String,
    #[serde(default = "default_public_read")]
    pub public_read: bool,
}

fn default_object_key() -> String {
    "cost.png".to_string()
}

fn default_scratch_path() -> String {
    "/tmp/cost.png".to_string()
}

fn default_public_read() -> bool {
    true
}
