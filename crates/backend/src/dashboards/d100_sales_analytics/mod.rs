pub mod aggregator;
pub mod dispatcher;
pub mod filter;
pub mod normalizer;
pub mod periods;
pub mod service;
pub mod source_client;

pub use dispatcher::AnalyticsDispatcher;
pub use source_client::{RecordSource, SalesApiClient};
