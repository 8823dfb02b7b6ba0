pub mod cache_store;
pub mod ua_fetcher;
