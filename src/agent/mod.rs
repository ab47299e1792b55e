//! Stage agent: one delegated-reasoning step over the chat client.
//!
//! The agent runs an iterative loop: the model either invokes one tool per
//! response (a `<tool>` block with a JSON invocation, whose output is fed
//! back into the conversation) or returns its final text (a `<finish>`
//! block, or a response with no blocks at all).

mod config;
mod events;
mod prompt;

pub use config::AgentConfig;
pub use events::{AgentCallbacks, AgentEvent, EventCallback};
pub use prompt::journalist_system;

use crate::error::{Error, Result};
use crate::llm::{ChatClient, ChatOptions, Message};
use crate::tool::Tool;
use async_trait::async_trait;
use events::verbose_callbacks;
use prompt::{DEFAULT_SYSTEM, SYSTEM_PROMPT_TEMPLATE};
use regex::Regex;
use serde::Deserialize;
use std::sync::Arc;

/// One delegated reasoning step: a task description plus prior stage texts
/// in, markdown text out.
#[async_trait]
pub trait StageRunner: Send + Sync {
    /// Run one stage. `context` carries labeled raw texts from prior
    /// stages, injected verbatim into the prompt.
    async fn run(&self, task: &str, context: &[(&str, &str)]) -> Result<String>;
}

/// Tool invocation parsed from a `<tool>` block.
#[derive(Deserialize)]
struct ToolInvocation {
    name: String,
    #[serde(default)]
    input: String,
}

/// A stage agent bound to a chat client and a set of tools.
pub struct Agent {
    client: ChatClient,
    config: AgentConfig,
    tools: Vec<Arc<dyn Tool>>,
    tool_regex: Regex,
    finish_regex: Regex,
    callbacks: AgentCallbacks,
}

impl Agent {
    /// Create a new agent over the given client and configuration.
    pub fn new(client: ChatClient, config: AgentConfig) -> Self {
        Self {
            client,
            config,
            tools: Vec::new(),
            tool_regex: Regex::new(r"<tool>\s*([\s\S]*?)\s*</tool>").unwrap(),
            finish_regex: Regex::new(r"<finish>\s*([\s\S]*?)\s*</finish>").unwrap(),
            callbacks: AgentCallbacks::default(),
        }
    }

    /// Register a tool with the agent.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.push(Arc::new(tool));
    }

    /// Enable event logging through `tracing`.
    pub fn verbose(mut self, enabled: bool) -> Self {
        if enabled {
            self.callbacks = verbose_callbacks();
        }
        self
    }

    /// Set a catch-all callback for any event.
    pub fn on_event<F>(mut self, f: F) -> Self
    where
        F: Fn(&AgentEvent) + Send + Sync + 'static,
    {
        self.callbacks.on_event = Some(Arc::new(f));
        self
    }

    fn emit(&self, event: AgentEvent) {
        self.callbacks.emit(&event);
    }

    fn tool(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    /// Tool documentation for the system prompt.
    fn tool_docs(&self) -> String {
        if self.tools.is_empty() {
            return "No tools available.".to_string();
        }
        self.tools
            .iter()
            .map(|t| format!("- {}: {}", t.name(), t.description()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Build the system prompt with tool documentation.
    fn system_prompt(&self) -> String {
        let system = self.config.system.as_deref().unwrap_or(DEFAULT_SYSTEM);
        SYSTEM_PROMPT_TEMPLATE
            .replace("{system}", system)
            .replace("{tools}", &self.tool_docs())
    }

    /// Inject prior stage texts into the task prompt.
    fn inject_context(&self, task: &str, context: &[(&str, &str)]) -> String {
        if context.is_empty() {
            return task.to_string();
        }

        let injections: Vec<String> = context
            .iter()
            .map(|(label, text)| format!("=== {} ===\n{}", label.to_uppercase(), text))
            .collect();

        format!("<context>\n{}\n</context>\n\n{}", injections.join("\n\n"), task)
    }

    /// Extract a tool block from a response.
    fn extract_tool_block(&self, text: &str) -> Option<String> {
        self.tool_regex
            .captures(text)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Extract a finish block from a response.
    fn extract_finish(&self, text: &str) -> Option<String> {
        self.finish_regex
            .captures(text)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().to_string())
    }

    async fn run_task(&self, task: &str, context: &[(&str, &str)]) -> Result<String> {
        let task = self.inject_context(task, context);

        let mut messages = vec![
            Message::system(self.system_prompt()),
            Message::user(task),
        ];

        let options = ChatOptions {
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let mut iterations = 0;

        loop {
            iterations += 1;

            if iterations > self.config.max_iterations {
                self.emit(AgentEvent::Error {
                    message: format!("Max iterations ({}) reached", self.config.max_iterations),
                });
                return Err(Error::MaxIterations(self.config.max_iterations));
            }

            self.emit(AgentEvent::LlmRequest { message_count: messages.len() });

            let text = self
                .client
                .chat(&self.config.model, &messages, &options)
                .await?;

            self.emit(AgentEvent::LlmResponse { content: text.clone() });
            messages.push(Message::assistant(text.clone()));

            if let Some(finish) = self.extract_finish(&text) {
                let result = normalize_stage_output(&finish);
                self.emit(AgentEvent::Finish { text: result.clone() });
                return Ok(result);
            }

            if let Some(block) = self.extract_tool_block(&text) {
                match serde_json::from_str::<ToolInvocation>(&block) {
                    Ok(invocation) => match self.tool(&invocation.name) {
                        Some(tool) => {
                            self.emit(AgentEvent::ToolCall {
                                name: invocation.name.clone(),
                                input: invocation.input.clone(),
                            });

                            let output = tool.call(&invocation.input).await;

                            self.emit(AgentEvent::ToolResult {
                                name: invocation.name.clone(),
                                output: output.clone(),
                            });

                            messages.push(Message::user(format!(
                                "Tool output:\n```\n{output}\n```"
                            )));
                        }
                        None => {
                            messages.push(Message::user(format!(
                                "Unknown tool \"{}\". Available tools:\n{}",
                                invocation.name,
                                self.tool_docs()
                            )));
                        }
                    },
                    Err(e) => {
                        self.emit(AgentEvent::Error {
                            message: format!("Invalid JSON in <tool> block: {e}"),
                        });
                        messages.push(Message::user(format!(
                            "Error parsing your <tool> block:\n\n{e}\n\nYour block:\n```\n{block}\n```\n\nPlease fix and try again."
                        )));
                    }
                }
                continue;
            }

            // No blocks at all: the whole response is the final answer.
            let result = normalize_stage_output(text.trim());
            self.emit(AgentEvent::Finish { text: result.clone() });
            return Ok(result);
        }
    }
}

#[async_trait]
impl StageRunner for Agent {
    async fn run(&self, task: &str, context: &[(&str, &str)]) -> Result<String> {
        self.run_task(task, context).await
    }
}

/// Normalize a stage result to raw text.
///
/// A stage may return plain text, a JSON string, or a JSON object exposing
/// a `"raw"` text field; all three collapse to the same raw text.
fn normalize_stage_output(text: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(text) {
        match value {
            serde_json::Value::String(s) => return s,
            serde_json::Value::Object(map) => {
                if let Some(raw) = map.get("raw").and_then(|v| v.as_str()) {
                    return raw.to_string();
                }
            }
            _ => {}
        }
    }
    text.to_string()
}
