pub mod article;
pub mod context;
pub mod errors;
