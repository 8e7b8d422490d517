/* AWS SDK 응답 → 도메인 DTO 변환을 위한 공통 트레이트 */
pub trait FromSdkOutput<S> {
    fn from_sdk_output(output: &S) -> Self;
}
