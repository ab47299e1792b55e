//! Agent events and callbacks for observability.

use std::sync::Arc;

/// Events emitted during one stage execution.
#[derive(Debug, Clone)]
pub enum AgentEvent {
    /// About to call the LLM
    LlmRequest { message_count: usize },
    /// LLM responded
    LlmResponse { content: String },
    /// A tool was invoked
    ToolCall { name: String, input: String },
    /// A tool returned a result
    ToolResult { name: String, output: String },
    /// The stage produced its final text
    Finish { text: String },
    /// An error occurred
    Error { message: String },
}

/// Type alias for event callbacks
pub type EventCallback = Arc<dyn Fn(&AgentEvent) + Send + Sync>;

/// Storage for agent callbacks
#[derive(Default, Clone)]
pub struct AgentCallbacks {
    pub on_llm_request: Option<EventCallback>,
    pub on_llm_response: Option<EventCallback>,
    pub on_tool_call: Option<EventCallback>,
    pub on_tool_result: Option<EventCallback>,
    pub on_finish: Option<EventCallback>,
    pub on_error: Option<EventCallback>,
    /// Catch-all callback for any event
    pub on_event: Option<EventCallback>,
}

impl AgentCallbacks {
    /// Emit an event to the appropriate callback(s)
    pub fn emit(&self, event: &AgentEvent) {
        let specific = match event {
            AgentEvent::LlmRequest { .. } => &self.on_llm_request,
            AgentEvent::LlmResponse { .. } => &self.on_llm_response,
            AgentEvent::ToolCall { .. } => &self.on_tool_call,
            AgentEvent::ToolResult { .. } => &self.on_tool_result,
            AgentEvent::Finish { .. } => &self.on_finish,
            AgentEvent::Error { .. } => &self.on_error,
        };

        if let Some(cb) = specific {
            cb(event);
        }

        if let Some(cb) = &self.on_event {
            cb(event);
        }
    }
}

fn preview(text: &str, limit: usize) -> String {
    let head: String = text.chars().take(limit).collect();
    let suffix = if text.chars().count() > limit { "..." } else { "" };
    format!("{}{}", head.replace('\n', "\\n"), suffix)
}

/// Create callbacks that log each event through `tracing`.
pub fn verbose_callbacks() -> AgentCallbacks {
    AgentCallbacks {
        on_llm_request: Some(Arc::new(|e| {
            if let AgentEvent::LlmRequest { message_count } = e {
                tracing::debug!(messages = message_count, "calling LLM");
            }
        })),
        on_llm_response: Some(Arc::new(|e| {
            if let AgentEvent::LlmResponse { content } = e {
                tracing::debug!(response = %preview(content, 100), "LLM responded");
            }
        })),
        on_tool_call: Some(Arc::new(|e| {
            if let AgentEvent::ToolCall { name, input } = e {
                tracing::debug!(tool = %name, input = %preview(input, 80), "tool call");
            }
        })),
        on_tool_result: Some(Arc::new(|e| {
            if let AgentEvent::ToolResult { name, output } = e {
                tracing::debug!(tool = %name, output = %preview(output, 80), "tool result");
            }
        })),
        on_finish: Some(Arc::new(|e| {
            if let AgentEvent::Finish { text } = e {
                tracing::debug!(text = %preview(text, 100), "stage finished");
            }
        })),
        on_error: Some(Arc::new(|e| {
            if let AgentEvent::Error { message } = e {
                tracing::error!(%message, "agent error");
            }
        })),
        ..Default::default()
    }
}
