//! Stage agent configuration.

/// Configuration for one stage agent.
#[derive(Clone)]
pub struct AgentConfig {
    /// Provider model identifier (e.g., "gpt-4o", "gpt-3.5-turbo")
    pub model: String,
    /// Maximum loop iterations (tool round-trips) per stage
    pub max_iterations: usize,
    /// Temperature for LLM sampling
    pub temperature: Option<f32>,
    /// Maximum tokens for one LLM response
    pub max_tokens: Option<u32>,
    /// Persona description embedded in the full prompt template
    pub system: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            max_iterations: 10,
            temperature: Some(0.7),
            max_tokens: None,
            system: None,
        }
    }
}

impl AgentConfig {
    /// Create a new config with the specified model.
    pub fn new(model: impl Into<String>) -> Self {
        Self { model: model.into(), ..Default::default() }
    }

    /// Set the maximum number of iterations.
    pub fn max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, t: f32) -> Self {
        self.temperature = Some(t);
        self
    }

    /// Set the max tokens for one response.
    pub fn max_tokens(mut self, n: u32) -> Self {
        self.max_tokens = Some(n);
        self
    }

    /// Set the persona description embedded in the prompt template.
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}
