mod errors;
mod handler;
mod options;
mod serve_mux;

pub use errors::{MuxError, MuxResult};
pub(crate) use handler::request_host;
pub use handler::{Handler, NotFound, Redirect, Request, Response, RouteMatch};
pub use options::{MuxOptions, MuxOptionsBuilder};
pub use serve_mux::ServeMux;

use std::sync::Arc;

/// The host multiplexer contract: pattern registration, the routing decision
/// for a request, and request dispatch.
///
/// Implementations must be safe for concurrent registration.
pub trait Multiplexer: Send + Sync {
    fn handle(&self, pattern: &str, handler: Arc<dyn Handler>) -> MuxResult<()>;

    /// Returns the handler selected for `req` together with the pattern that
    /// matched it. That pattern is what `decompose` expects.
    fn handler(&self, req: &Request) -> RouteMatch;

    fn serve(&self, req: &Request, resp: &mut Response) {
        let matched = self.handler(req);
        matched.handler.serve(req, resp);
    }
}
