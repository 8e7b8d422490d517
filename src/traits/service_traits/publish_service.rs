use crate::common::*;

use crate::model::{chart::rendered_chart::*, publish::publish_target::*};

#[async_trait]
pub trait PublishService: Send + Sync {
    async fn publish_chart(
        &self,
        rendered_chart: &RenderedChart,
        target: &PublishTarget,
    ) -> anyhow::Result<()>;
}
