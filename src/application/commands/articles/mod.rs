// src/application/commands/articles/mod.rs
mod create;
mod service;

pub use create::CreateArticleCommand;
pub use service::ArticleCommandService;
