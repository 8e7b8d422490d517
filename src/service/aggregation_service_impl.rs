use crate::common::*;

use crate::dto::cost::cost_report::*;
use crate::enums::{cost_category::*, duplicate_rule::*, pipeline_error::*};
use crate::model::usage::{category_amount::*, usage_table::*};
use crate::repository::cost_explorer_repository_impl::AMORTIZED_COST_METRIC;
use crate::traits::service_traits::aggregation_service::*;
use crate::utils_modules::{io_utils::*, time_utils::*};

#[doc = r#"
    금액을 소수점 첫째 자리로 반올림한다.

    10배 한 값에 `f64::round` (0.5 는 0 에서 먼 쪽으로) 를 적용한다.
    예) 2.25 -> 2.3, -2.25 -> -2.3, 12.34 -> 12.3
"#]
pub fn round_amount(amount: f64) -> f64 {
    (amount * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, Default, new)]
pub struct AggregationServiceImpl {
    duplicate_rule: DuplicateRule,
}

impl AggregationServiceImpl {
    #[doc = r#"
        하루치 결과를 (날짜 라벨, 카테고리별 금액) 으로 변환한다.

        1. `TimePeriod.Start` 를 `월/일` 라벨로 변환
        2. 추적 카테고리 6개를 0 으로 초기화
        3. 그룹(서비스)마다 금액을 한 번 반올림한 뒤
           - 추적 카테고리면 중복 규칙에 따라 반영하고 소계에 더한다
           - 일 합계에는 항상 더한다
        4. Others = round(일 합계 - 소계)
    "#]
    fn aggregate_day(
        &self,
        day_idx: usize,
        result: &DailyCostResult,
    ) -> anyhow::Result<(String, CategoryAmount)> {
        let time_period: &TimePeriod = result.time_period().as_ref().ok_or_else(|| {
            PipelineError::Aggregation(format!(
                "[AggregationServiceImpl->aggregate_day] ResultsByTime[{}] is missing 'TimePeriod'",
                day_idx
            ))
        })?;

        let start_date: NaiveDate = parse_query_date(time_period.start()).map_err(|e| {
            PipelineError::Aggregation(format!(
                "[AggregationServiceImpl->aggregate_day] ResultsByTime[{}] {:?}",
                day_idx, e
            ))
        })?;

        let date_label: String = format_date_label(start_date);

        let mut amounts: CategoryAmount = CategoryAmount::default();
        let mut sub_total: f64 = 0.0;
        let mut total: f64 = 0.0;

        for (group_idx, group) in result.groups().iter().enumerate() {
            let service_name: &String = group.keys().first().ok_or_else(|| {
                PipelineError::Aggregation(format!(
                    "[AggregationServiceImpl->aggregate_day] {} Groups[{}] has no 'Keys'",
                    date_label, group_idx
                ))
            })?;

            let amount: f64 =
                round_amount(Self::parse_group_amount(group, &date_label, service_name)?);

            if let Some(category) = CostCategory::from_service_name(service_name) {
                let current: f64 = amounts.get(category);
                amounts.set(category, self.duplicate_rule.apply(current, amount));
                sub_total += amount;
            }

            total += amount;
        }

        amounts.set(CostCategory::Others, round_amount(total - sub_total));

        Ok((date_label, amounts))
    }

    #[doc = r#"
        하루치 원본 레코드를 JSON 한 줄로 남긴다.
        직렬화에 실패하면 경고만 남기고 집계는 계속한다. 기록 여부를 반환한다.
    "#]
    fn log_raw_record<T: Serialize>(day_idx: usize, record: &T) -> bool {
        match convert_json_str_from_struct(record) {
            Ok(raw_json) => {
                info!("{}", raw_json);
                true
            }
            Err(e) => {
                warn!(
                    "[AggregationServiceImpl->log_raw_record] Failed to serialize ResultsByTime[{}]: {:?}",
                    day_idx, e
                );
                false
            }
        }
    }

    #[doc = "그룹의 `AmortizedCost.Amount` 를 숫자로 파싱한다. 유한한 값만 허용."]
    fn parse_group_amount(
        group: &CostGroup,
        date_label: &str,
        service_name: &str,
    ) -> anyhow::Result<f64> {
        let raw_amount: &str = group
            .metrics()
            .get(AMORTIZED_COST_METRIC)
            .and_then(|metric| metric.amount().as_deref())
            .ok_or_else(|| {
                PipelineError::Aggregation(format!(
                    "[AggregationServiceImpl->parse_group_amount] {} '{}' is missing '{}.Amount'",
                    date_label, service_name, AMORTIZED_COST_METRIC
                ))
            })?;

        let amount: f64 = raw_amount.trim().parse::<f64>().map_err(|e| {
            PipelineError::Aggregation(format!(
                "[AggregationServiceImpl->parse_group_amount] {} '{}' has non-numeric amount '{}': {}",
                date_label, service_name, raw_amount, e
            ))
        })?;

        if !amount.is_finite() {
            return Err(PipelineError::Aggregation(format!(
                "[AggregationServiceImpl->parse_group_amount] {} '{}' has non-finite amount '{}'",
                date_label, service_name, raw_amount
            ))
            .into());
        }

        Ok(amount)
    }
}

impl AggregationService for AggregationServiceImpl {
    fn aggregate(&self, report: &CostReport) -> anyhow::Result<UsageTable> {
        let mut usage_table: UsageTable = UsageTable::default();

        for (day_idx, result) in report.results_by_time().iter().enumerate() {
            Self::log_raw_record(day_idx, result);

            let (date_label, amounts) = self.aggregate_day(day_idx, result)?;
            info!(
                "{} tracked={:.1} others={:.1} total={:.1}",
                date_label,
                amounts.tracked_sum(),
                amounts.get(CostCategory::Others),
                amounts.total()
            );
            usage_table.insert_column(date_label, amounts);
        }

        Ok(usage_table)
    }
}
