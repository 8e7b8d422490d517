use crate::common::*;

#[async_trait]
pub trait ObjectStorageRepository: Send + Sync {
    async fn upload_file(
        &self,
        local_path: &Path,
        bucket: &str,
        key: &str,
        content_type: &str,
        public_read: bool,
    ) -> Result<(), anyhow::Error>;
}
