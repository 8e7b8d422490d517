use crate::common::*;

use crate::model::configs::publish_config::*;

#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct PublishTarget {
    bucket: String,
    object_key: String,
    public_read: bool,
}

impl From<&PublishConfig> for PublishTarget {
    fn from(config: &PublishConfig) -> Self {
        PublishTarget::new(
            config.bucket.clone(),
            config.object_key.clone(),
            config.public_read,
        )
    }
}
