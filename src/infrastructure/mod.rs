pub mod config;
pub mod http_client;
pub mod line_source;
pub mod logger;
pub mod output;
