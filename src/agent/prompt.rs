//! System prompt templates for the stage agent.

use crate::request::GenerationRequest;

/// Default system description when no persona is configured.
pub const DEFAULT_SYSTEM: &str =
    "You are an AI assistant that solves tasks, using the available tools when needed.";

/// System prompt template for the stage agent.
pub const SYSTEM_PROMPT_TEMPLATE: &str = r#"{system}

<tools>
{tools}
</tools>

<format>
To call a tool, write ONE tool block with a JSON invocation:

<tool>
{"name": "search", "input": "the tool input"}
</tool>

To return your final answer, use a finish block:

<finish>
your complete markdown answer
</finish>
</format>

<rules>
- Write ONE tool block per response, then STOP and wait for the result
- Do NOT assume tool output - you will see the actual result
- Only use the tools listed above
- When done, return the answer in a <finish> block (plain text with no blocks is also treated as final)
</rules>
"#;

/// Journalist persona for the three pipeline stages, derived from the
/// requested style and audience.
pub fn journalist_system(request: &GenerationRequest) -> String {
    format!(
        "You are an AI Journalist. Your goal is to create a {} article for {}. \
         You are a versatile journalist who creates quality articles adapted to \
         different audiences and styles.",
        request.style.to_string().to_lowercase(),
        request.audience_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{ArticleStyle, GenerationRequest, ModelChoice};

    #[test]
    fn test_journalist_system_uses_style_and_audience() {
        let request = GenerationRequest {
            topic: "solar power".to_string(),
            model: ModelChoice::Fast,
            target_word_count: 500,
            source_count: 3,
            style: ArticleStyle::Persuasive,
            audience: Some("policy makers".to_string()),
        };
        let system = journalist_system(&request);
        assert!(system.contains("persuasive article for policy makers"));
    }
}
