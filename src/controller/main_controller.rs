use crate::common::*;

use crate::dto::cost::cost_report::*;
use crate::model::{
    chart::rendered_chart::*, configs::schedule_config::*, publish::publish_target::*,
    usage::usage_table::*, window::date_window::*,
};
use crate::traits::service_traits::{
    aggregation_service::*, chart_service::*, cost_query_service::*, publish_service::*,
};
use crate::utils_modules::time_utils::*;

#[derive(Debug, new)]
pub struct MainController<Q, A, C, P>
where
    Q: CostQueryService,
    A: AggregationService,
    C: ChartService,
    P: PublishService,
{
    cost_query_service: Q,
    aggregation_service: A,
    chart_service: C,
    publish_service: P,
    publish_target: PublishTarget,
    scratch_path: PathBuf,
    schedule_config: ScheduleConfig,
}

impl<Q, A, C, P> MainController<Q, A, C, P>
where
    Q: CostQueryService,
    A: AggregationService,
    C: ChartService,
    P: PublishService,
{
    #[doc = r#"
        프로그램 진입점.

        * 스케줄이 비활성화된 경우: 비용 리포트 작업을 한 번 실행하고 결과를 그대로 반환한다
          (외부 스케줄러가 프로세스를 주기적으로 실행하는 구성)
        * 스케줄이 활성화된 경우: cron 스케줄에 맞춰 작업을 반복 실행한다

        # Returns
        * `anyhow::Result<()>` - 단발 실행 시 작업 결과, 스케줄 실행 시 스케줄 파싱 오류
    "#]
    pub async fn main_task(&self) -> anyhow::Result<()> {
        if !self.schedule_config.enabled {
            return self.cost_report_task(Local::now()).await;
        }

        self.cost_report_loop().await
    }

    #[doc = r#"
        비용 차트를 한 번 생성해서 게시한다. 각 단계는 순서대로 실행되며,
        어느 단계든 실패하면 남은 단계는 실행하지 않는다.

        1. 조회 기간 계산 (최근 8일 ~ 오늘)
        2. Cost Explorer 조회
        3. 카테고리 x 날짜 테이블로 집계
        4. 누적 막대 차트를 임시 경로에 렌더링
        5. S3 업로드
    "#]
    pub async fn cost_report_task(&self, now: DateTime<Local>) -> anyhow::Result<()> {
        /* 1. 조회 기간 */
        let window: DateWindow = calc_cost_window(now);
        info!(
            "Cost report task start: {} ~ {}",
            window.start_str(),
            window.end_str()
        );

        /* 2. 서비스별 일별 비용 조회 */
        let report: CostReport = self.cost_query_service.get_cost_and_usage(&window).await?;

        /* 3. 집계 */
        let usage_table: UsageTable = self.aggregation_service.aggregate(&report)?;
        info!(
            "Aggregated usage table ({} rows x {} columns)\n{}",
            usage_table.row_count(),
            usage_table.column_count(),
            usage_table
        );

        /* 4. 차트 렌더링 */
        let rendered_chart: RenderedChart = self
            .chart_service
            .generate_stacked_bar_chart(&usage_table, &self.scratch_path)
            .await?;

        /* 5. 업로드 */
        self.publish_service
            .publish_chart(&rendered_chart, &self.publish_target)
            .await?;

        info!("Cost report task finished");

        Ok(())
    }

    #[doc = "cron 스케줄(로컬 시간 기준)에 맞춰 비용 리포트 작업을 반복 실행한다."]
    async fn cost_report_loop(&self) -> anyhow::Result<()> {
        let schedule: Schedule = Schedule::from_str(&self.schedule_config.cron_schedule)
            .map_err(|e| {
                anyhow!(
                    "[MainController->cost_report_loop] Failed to parse cron schedule '{}': {:?}",
                    self.schedule_config.cron_schedule,
                    e
                )
            })?;

        info!(
            "Starting cost report scheduler with cron schedule: {}",
            self.schedule_config.cron_schedule
        );

        loop {
            let now_local: DateTime<Local> = Local::now();

            /* 다음 실행 시간 계산 */
            let next_run: DateTime<Local> = schedule
                .after(&now_local)
                .next()
                .ok_or_else(|| anyhow!("[MainController->cost_report_loop] Failed to calculate next run time from cron schedule"))?;

            let duration_until_next_run: Duration = match (next_run - now_local).to_std() {
                Ok(duration) => duration,
                Err(e) => {
                    error!(
                        "[MainController->cost_report_loop] Failed to calculate duration: {:?}",
                        e
                    );
                    continue;
                }
            };

            info!(
                "Next cost report scheduled at: {}. Sleeping for {:?}",
                next_run.format("%Y-%m-%d %H:%M:%S"),
                duration_until_next_run
            );

            sleep(duration_until_next_run).await;

            if let Err(e) = self.cost_report_task(Local::now()).await {
                error!("[MainController->cost_report_loop] {:?}", e);
            }
        }
    }
}
