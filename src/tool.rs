//! Capabilities exposed to the agent during a stage.
//!
//! Tools are pure functions from a string input to a string result. The
//! agent loop cannot handle a thrown error from a tool, so every failure
//! path must degrade to a descriptive string returned in-band.

use async_trait::async_trait;

/// A capability the agent can invoke by name.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name the agent uses to invoke the tool.
    fn name(&self) -> &str;

    /// One-line description shown in the system prompt.
    fn description(&self) -> &str;

    /// Run the tool. Failures are encoded in the returned string.
    async fn call(&self, input: &str) -> String;
}
