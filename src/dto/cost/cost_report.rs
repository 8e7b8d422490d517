use crate::common::*;

use crate::utils_modules::traits::*;

#[doc = r#"
    Cost Explorer `GetCostAndUsage` 응답을 그대로 옮긴 DTO.

    JSON 형태(`ResultsByTime`, `TimePeriod`, `Groups`, `Metrics`)를 따르므로
    `aws ce get-cost-and-usage` 출력도 그대로 역직렬화된다.
    누락 가능성이 있는 필드는 Option 으로 두고, 검증은 집계 단계에서 수행한다.
"#]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters, new)]
#[serde(rename_all = "PascalCase")]
#[getset(get = "pub")]
pub struct CostReport {
    #[serde(default)]
    pub results_by_time: Vec<DailyCostResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters, new)]
#[serde(rename_all = "PascalCase")]
#[getset(get = "pub")]
pub struct DailyCostResult {
    pub time_period: Option<TimePeriod>,
    #[serde(default)]
    pub groups: Vec<CostGroup>,
    #[serde(default)]
    pub estimated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[serde(rename_all = "PascalCase")]
#[getset(get = "pub")]
pub struct TimePeriod {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters, new)]
#[serde(rename_all = "PascalCase")]
#[getset(get = "pub")]
pub struct CostGroup {
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default)]
    pub metrics: HashMap<String, MetricAmount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters, new)]
#[serde(rename_all = "PascalCase")]
#[getset(get = "pub")]
pub struct MetricAmount {
    pub amount: Option<String>,
    pub unit: Option<String>,
}

impl FromSdkOutput<GetCostAndUsageOutput> for CostReport {
    fn from_sdk_output(output: &GetCostAndUsageOutput) -> Self {
        let results_by_time: Vec<DailyCostResult> = output
            .results_by_time()
            .iter()
            .map(|result| {
                let time_period: Option<TimePeriod> = result.time_period().map(|period| {
                    TimePeriod::new(period.start().to_string(), period.end().to_string())
                });

                let groups: Vec<CostGroup> = result
                    .groups()
                    .iter()
                    .map(|group| {
                        let metrics: HashMap<String, MetricAmount> = group
                            .metrics()
                            .map(|metrics| {
                                metrics
                                    .iter()
                                    .map(|(name, value)| {
                                        (
                                            name.to_string(),
                                            MetricAmount::new(
                                                value.amount().map(str::to_string),
                                                value.unit().map(str::to_string),
                                            ),
                                        )
                                    })
                                    .collect()
                            })
                            .unwrap_or_default();

                        CostGroup::new(group.keys().to_vec(), metrics)
                    })
                    .collect();

                DailyCostResult::new(time_period, groups, result.estimated())
            })
            .collect();

        CostReport::new(
            results_by_time,
            output.next_page_token().map(str::to_string),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_costexplorer::types::{Group, MetricValue, ResultByTime};

    #[test]
    fn test_deserialize_cost_explorer_json() {
        let report: CostReport = serde_json::from_str(
            r#"{
                "GroupDefinitions": [{ "Type": "DIMENSION", "Key": "SERVICE" }],
                "ResultsByTime": [
                    {
                        "TimePeriod": { "Start": "2025-07-03", "End": "2025-07-04" },
                        "Total": {},
                        "Groups": [
                            {
                                "Keys": ["Tax"],
                                "Metrics": { "AmortizedCost": { "Amount": "1.2", "Unit": "USD" } }
                            }
                        ],
                        "Estimated": true
                    }
                ],
                "DimensionValueAttributes": []
            }"#,
        )
        .unwrap();

        assert_eq!(report.results_by_time().len(), 1);
        let day: &DailyCostResult = &report.results_by_time()[0];
        assert_eq!(day.time_period().as_ref().unwrap().start(), "2025-07-03");
        assert_eq!(day.groups()[0].keys(), &vec!["Tax".to_string()]);
        assert_eq!(
            day.groups()[0].metrics()["AmortizedCost"].amount().as_deref(),
            Some("1.2")
        );
        assert!(day.estimated);
        assert!(report.next_page_token().is_none());
    }

    #[test]
    fn test_missing_fields_stay_empty() {
        let report: CostReport =
            serde_json::from_str(r#"{ "ResultsByTime": [ { "Groups": [ { "Keys": [] } ] } ] }"#)
                .unwrap();

        let day: &DailyCostResult = &report.results_by_time()[0];
        assert!(day.time_period().is_none());
        assert!(day.groups()[0].keys().is_empty());
        assert!(day.groups()[0].metrics().is_empty());
    }

    #[test]
    fn test_from_sdk_output() {
        let output: GetCostAndUsageOutput = GetCostAndUsageOutput::builder()
            .results_by_time(
                ResultByTime::builder()
                    .time_period(
                        DateInterval::builder()
                            .start("2025-07-03")
                            .end("2025-07-04")
                            .build()
                            .unwrap(),
                    )
                    .groups(
                        Group::builder()
                            .keys("EC2 - Other")
                            .metrics(
                                "AmortizedCost",
                                MetricValue::builder().amount("5.0").unit("USD").build(),
                            )
                            .build(),
                    )
                    .build(),
            )
            .next_page_token("token-1")
            .build();

        let report: CostReport = CostReport::from_sdk_output(&output);

        assert_eq!(report.next_page_token().as_deref(), Some("token-1"));
        let day: &DailyCostResult = &report.results_by_time()[0];
        assert_eq!(
            day.time_period(),
            &Some(TimePeriod::new(
                "2025-07-03".to_string(),
                "2025-07-04".to_string()
            ))
        );
        assert_eq!(day.groups()[0].keys(), &vec!["EC2 - Other".to_string()]);
        assert_eq!(
            day.groups()[0].metrics()["AmortizedCost"],
            MetricAmount::new(Some("5.0".to_string()), Some("USD".to_string()))
        );
    }
}
