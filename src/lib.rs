//! Pressroom - agent-driven article generation.
//!
//! Pressroom drives an LLM agent through a sequential three-stage pipeline
//! (research, analysis, writing) to produce a markdown article. The agent
//! is equipped with a web-search tool and a single-URL fetch tool; the
//! pipeline reports coarse milestone progress and surfaces stage errors to
//! the caller unchanged.
//!
//! # Quick Start
//!
//! ```ignore
//! use pressroom::{
//!     Agent, AgentConfig, ChatClient, GenerationRequest, ModelChoice,
//!     ArticleStyle, generate_article, journalist_system,
//! };
//! use pressroom::tools::{FetchTool, SearchTool};
//!
//! #[tokio::main]
//! async fn main() -> pressroom::Result<()> {
//!     let request = GenerationRequest {
//!         topic: "renewable energy".to_string(),
//!         model: ModelChoice::HighQuality,
//!         target_word_count: 500,
//!         source_count: 3,
//!         style: ArticleStyle::Informative,
//!         audience: None,
//!     };
//!
//!     let config = AgentConfig::new(request.model.id())
//!         .system(journalist_system(&request));
//!     let mut agent = Agent::new(ChatClient::new("sk-..."), config);
//!     agent.register(SearchTool::new("serper-key"));
//!     agent.register(FetchTool::new());
//!
//!     let bundle = generate_article(&agent, &request, None).await?;
//!     println!("{}", bundle.article);
//!     Ok(())
//! }
//! ```

mod agent;
mod error;
mod llm;
mod pipeline;
mod request;
mod session;
mod tool;

pub mod server;
pub mod tools;

pub use agent::{
    Agent, AgentCallbacks, AgentConfig, AgentEvent, EventCallback, StageRunner, journalist_system,
};
pub use error::{Error, Result};
pub use llm::{ChatClient, ChatOptions, Message, Role};
pub use pipeline::{ArticleBundle, ProgressCallback, ProgressEvent, generate_article};
pub use request::{
    ArticleStyle, Credentials, GenerationRequest, ModelChoice, SOURCE_COUNT_MAX, SOURCE_COUNT_MIN,
    WORD_COUNT_MAX, WORD_COUNT_MIN, artifact_filename,
};
pub use session::{Session, StoredArticle};
pub use tool::Tool;
