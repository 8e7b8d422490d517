use crate::common::*;

pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

#[doc = r#"
    Cost Explorer 조회 기간.

    `end` 는 실행 시점의 로컬 날짜, `start` 는 `end` 로부터 8일 전이다.
    Cost Explorer 는 `End` 를 포함하지 않으므로 실제 집계 대상은 어제까지다.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    pub fn start_str(&self) -> String {
        self.start.format(QUERY_DATE_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format(QUERY_DATE_FORMAT).to_string()
    }
}
