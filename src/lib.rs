pub mod analyzers;
pub mod config;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod records;
