use crate::common::*;

use crate::enums::pipeline_error::*;
use crate::model::{chart::rendered_chart::*, publish::publish_target::*};
use crate::traits::{
    repository_traits::object_storage_repository::*, service_traits::publish_service::*,
};

#[derive(Debug, new)]
pub struct PublishServiceImpl<R: ObjectStorageRepository> {
    storage_repo: Arc<R>,
}

#[async_trait]
impl<R: ObjectStorageRepository> PublishService for PublishServiceImpl<R> {
    #[doc = r#"
        렌더링된 차트 이미지를 고정된 버킷/키로 업로드한다. 재시도는 하지 않는다.

        # Arguments
        * `rendered_chart` - 임시 경로에 저장된 차트 이미지
        * `target` - 업로드 대상 버킷, 오브젝트 키, public-read 여부

        # Errors
        버킷/키가 비어 있거나, 임시 파일이 없거나, 업로드가 실패하면 `PipelineError::Publish`
    "#]
    async fn publish_chart(
        &self,
        rendered_chart: &RenderedChart,
        target: &PublishTarget,
    ) -> anyhow::Result<()> {
        if target.bucket().trim().is_empty() || target.object_key().trim().is_empty() {
            return Err(PipelineError::Publish(format!(
                "[PublishServiceImpl->publish_chart] Invalid destination s3://{}/{}",
                target.bucket(),
                target.object_key()
            ))
            .into());
        }

        let pic_path: &Path = rendered_chart.pic_path();

        if !tokio::fs::try_exists(pic_path).await.unwrap_or(false) {
            return Err(PipelineError::Publish(format!(
                "[PublishServiceImpl->publish_chart] Rendered chart not found at {:?}",
                pic_path
            ))
            .into());
        }

        self.storage_repo
            .upload_file(
                pic_path,
                target.bucket(),
                target.object_key(),
                rendered_chart.content_type(),
                *target.public_read(),
            )
            .await
            .map_err(|e| {
                PipelineError::Publish(format!(
                    "[PublishServiceImpl->publish_chart] {:?}",
                    e
                ))
            })?;

        info!(
            "Chart published to s3://{}/{} (public_read={})",
            target.bucket(),
            target.object_key(),
            target.public_read()
        );

        Ok(())
    }
}
