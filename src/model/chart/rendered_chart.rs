use crate::common::*;

pub const PNG_CONTENT_TYPE: &str = "image/png";

#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct RenderedChart {
    pub pic_path: PathBuf,
    pub content_type: String,
}
