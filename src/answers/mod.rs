pub mod builtin;
pub mod error;
pub mod http;
pub mod image;
pub mod question;
pub mod resolver;
pub mod storage;
pub mod types;
pub mod wiki;
pub mod worker;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used items
pub use builtin::{SUGGESTIONS, builtin_answers};
pub use http::HttpFetcher;
pub use question::question_for;
pub use resolver::Resolver;
pub use storage::{get_config_path, load_config};
pub use types::{AnswerImage, DecodedImage, Resolution};
pub use worker::{ResolveResult, ResolverHandle};
