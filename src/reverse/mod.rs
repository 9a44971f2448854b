mod check;
mod errors;
mod options;

pub use check::{RouteDiff, diff_routes};
pub use errors::{IrreversibleRoutes, NonExistentRoutes, ReverseError, ReverseResult};
pub use options::{CheckOptions, CheckOptionsBuilder, OptionsError};
