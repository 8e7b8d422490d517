use crate::common::*;

#[doc = r#"
    TOML 형식의 설정 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    1. 지정된 경로의 TOML 파일을 문자열로 읽어온다
    2. `toml::from_str()`을 사용하여 TOML 문자열을 제네릭 타입 T로 파싱
    3. 파일 읽기나 파싱 실패 시 오류 반환

    # Arguments
    * `file_path` - 읽을 TOML 파일의 경로

    # Returns
    * `Result<T, anyhow::Error>` - 성공 시 파싱된 구조체, 실패 시 오류
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)
        .with_context(|| format!("[read_toml_from_file] Failed to read '{}'", file_path))?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = r#"
    구조체를 한 줄짜리 JSON 문자열로 변환한다. 주로 로깅 용도로 사용한다.

    # Arguments
    * `input_struct` - JSON으로 변환할 구조체

    # Returns
    * `Result<String, anyhow::Error>`
"#]
pub fn convert_json_str_from_struct<T: Serialize>(input_struct: &T) -> Result<String, anyhow::Error> {
    serde_json::to_string(input_struct).map_err(|err| {
        anyhow!(
            "[Error][convert_json_str_from_struct()] Failed to serialize struct to JSON: {}",
            err
        )
    })
}

#[doc = "파일을 쓰기 전에 상위 디렉토리가 없으면 만들어준다."]
pub async fn ensure_parent_dir(file_path: &Path) -> Result<(), anyhow::Error> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!(
                    "[ensure_parent_dir] Failed to create directory {:?}",
                    parent
                )
            })?;
        }
    }

    Ok(())
}
