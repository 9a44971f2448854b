mod error;
mod linker;
mod query;

pub use error::{LinkError, LinkResult};
pub use linker::{HostLinker, Link, Linker, LinkerFn, RelativeLinker, abs_url, url_for};
pub use query::Query;
