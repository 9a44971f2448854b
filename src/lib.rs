pub mod errors;
pub mod link;
pub mod mux;
pub mod path;
pub mod pattern;
pub mod record;
pub mod registry;
pub mod reverse;

pub use errors::{RouterError, RouterResult};
pub use link::{HostLinker, Link, Linker, Query, abs_url, url_for};
pub use mux::{
    Handler, Multiplexer, MuxError, MuxOptions, Request, Response, RouteMatch, ServeMux,
};
pub use pattern::{compose, decompose, host_path, is_parametric};
pub use record::{Reflect, ReflectMut, RecordError, fill_defaults, populated};
pub use registry::{RegistryMetrics, RouteRegistry};
pub use reverse::{CheckOptions, IrreversibleRoutes, NonExistentRoutes, ReverseError};
