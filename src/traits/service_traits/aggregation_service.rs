use crate::dto::cost::cost_report::*;
use crate::model::usage::usage_table::*;

pub trait AggregationService: Send + Sync {
    #[doc = r#"
        Cost Explorer 일별 리포트를 카테고리 x 날짜 테이블로 변환한다.

        # Arguments
        * `report` - 서비스별로 그룹핑된 일별 비용 리포트

        # Returns
        * `UsageTable` - 추적 카테고리 6개 + Others 행, 리포트 순서의 날짜 열
    "#]
    fn aggregate(&self, report: &CostReport) -> anyhow::Result<UsageTable>;
}
