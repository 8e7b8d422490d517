use crate::common::*;

#[doc = r#"
    전역 로거를 설정한다.

    * 로그 레벨은 `RUST_LOG` 환경변수, 없으면 `info`
    * `logs/` 디렉토리에 하루 단위로 로테이션, 최근 10개 파일 보관
    * 모든 로그를 표준출력으로도 복제

    반환된 핸들은 프로그램 종료 시점까지 유지해야 한다.
"#]
pub fn set_global_logger() -> LoggerHandle {
    let log_directory: &str = "logs";

    Logger::try_with_env_or_str("info")
        .and_then(|logger| {
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(log_directory)
                        .basename("daily_cost_tracking"),
                )
                .rotate(
                    Criterion::Age(Age::Day),
                    Naming::Timestamps,
                    Cleanup::KeepLogFiles(10),
                )
                .format_for_files(custom_format)
                .format_for_stdout(custom_format)
                .duplicate_to_stdout(Duplicate::All)
                .start()
        })
        .unwrap_or_else(|e| panic!("[set_global_logger] Logger initialization failed: {}", e))
}

#[doc = "[시각] [레벨] T[스레드] 메시지"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{}] {}",
        now.now().format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        std::thread::current().name().unwrap_or("unknown"),
        record.args()
    )
}
