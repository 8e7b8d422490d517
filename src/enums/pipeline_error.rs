use thiserror::Error;

#[doc = r#"
    Failure classes of a single cost report run. Every variant is fatal for the run.

    Services raise one of these as the root of an `anyhow::Error`; callers recover the
    class with `err.downcast_ref::<PipelineError>()`.
"#]
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("[QueryError] {0}")]
    Query(String),

    #[error("[AggregationError] {0}")]
    Aggregation(String),

    #[error("[RenderError] {0}")]
    Render(String),

    #[error("[PublishError] {0}")]
    Publish(String),
}
