pub mod embedded;
pub mod models;
pub mod selector;
pub mod source_resolver;
