use crate::common::*;

use crate::model::window::date_window::*;

pub const COST_WINDOW_DAYS: i64 = 8;

#[doc = r#"
    실행 시각을 기준으로 Cost Explorer 조회 기간을 계산한다.

    타임존 변환은 하지 않는다. 전달된 시각의 달력 날짜를 그대로 사용하므로
    호스트 타임존에 따라 경계가 달라질 수 있다.
"#]
pub fn calc_cost_window<Tz: TimeZone>(now: DateTime<Tz>) -> DateWindow {
    let start: DateTime<Tz> = now.clone() - chrono::Duration::days(COST_WINDOW_DAYS);
    DateWindow::new(start.date_naive(), now.date_naive())
}

#[doc = "`YYYY-MM-DD` 형식의 날짜 문자열을 파싱한다."]
pub fn parse_query_date(date_str: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, QUERY_DATE_FORMAT)
        .map_err(|e| anyhow!("[parse_query_date] Invalid date '{}': {}", date_str, e))
}

#[doc = "차트 x축용 날짜 라벨. 0 패딩 없는 `월/일` (예: 7/4)"]
pub fn format_date_label(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}
