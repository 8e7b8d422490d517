use crate::common::*;

use crate::traits::repository_traits::object_storage_repository::*;

#[derive(Debug, Clone)]
pub struct S3RepositoryImpl {
    s3_client: S3Client,
}

impl S3RepositoryImpl {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        S3RepositoryImpl {
            s3_client: S3Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl ObjectStorageRepository for S3RepositoryImpl {
    #[doc = "로컬 파일을 S3 오브젝트로 업로드한다 (PutObject)."]
    async fn upload_file(
        &self,
        local_path: &Path,
        bucket: &str,
        key: &str,
        content_type: &str,
        public_read: bool,
    ) -> Result<(), anyhow::Error> {
        let body: ByteStream = ByteStream::from_path(local_path).await.map_err(|e| {
            anyhow!(
                "[S3RepositoryImpl->upload_file] Failed to read {:?}: {:?}",
                local_path,
                e
            )
        })?;

        let mut request = self
            .s3_client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(body);

        if public_read {
            request = request.acl(ObjectCannedAcl::PublicRead);
        }

        request.send().await.map_err(|e| {
            anyhow!(
                "[S3RepositoryImpl->upload_file] PutObject s3://{}/{} failed: {}",
                bucket,
                key,
                S3ErrorContext(&e)
            )
        })?;

        Ok(())
    }
}
