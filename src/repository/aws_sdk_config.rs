use crate::common::*;

use crate::model::configs::cloud_config::*;

#[doc = r#"
    AWS 공통 설정을 로드한다.

    자격증명은 기본 credential chain(환경변수, 프로파일, 인스턴스/태스크 롤)을 따른다.
    `region` 이 설정되어 있으면 기본 리전 해석 결과를 덮어쓴다.
"#]
pub async fn load_aws_sdk_config(cloud_config: &CloudConfig) -> SdkConfig {
    let loader = aws_config::defaults(BehaviorVersion::latest());

    let loader = match cloud_config.region() {
        Some(region) => loader.region(Region::new(region.clone())),
        None => loader,
    };

    loader.load().await
}
