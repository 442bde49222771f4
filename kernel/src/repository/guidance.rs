use async_trait::async_trait;

/// Outbound port for the completion endpoint.
///
/// Generation never fails: configuration gaps, HTTP failures and malformed
/// responses are all folded into the returned text so the page render
/// degrades gracefully instead of erroring.
#[async_trait]
pub trait GuidanceClient: Send + Sync {
    async fn generate(&self, user_prompt: &str) -> String;
}
