mod service;
mod stats;

pub use service::RouteRegistry;
pub use stats::RegistryMetrics;
