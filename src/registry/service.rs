use crate::mux::{
    Handler, Multiplexer, MuxOptions, MuxResult, Request, Response, RouteMatch, ServeMux,
};
use crate::record::{Reflect, reference_set};
use crate::registry::RegistryMetrics;
use crate::reverse::{CheckOptions, ReverseError, ReverseResult, RouteDiff, diff_routes};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Default)]
struct RegistryState {
    patterns: Vec<String>,
    metrics: RegistryMetrics,
}

/// Records every pattern registered with the host multiplexer so the set of
/// served routes can be checked against a route table.
///
/// Handler storage and dispatch stay with the host multiplexer `M`.
pub struct RouteRegistry<M: Multiplexer = ServeMux> {
    mux: M,
    state: Mutex<RegistryState>,
}

impl RouteRegistry<ServeMux> {
    pub fn with_options(options: MuxOptions) -> Self {
        Self::new(ServeMux::with_options(options))
    }
}

impl Default for RouteRegistry<ServeMux> {
    fn default() -> Self {
        Self::new(ServeMux::new())
    }
}

impl<M: Multiplexer> RouteRegistry<M> {
    pub fn new(mux: M) -> Self {
        Self {
            mux,
            state: Mutex::new(RegistryState::default()),
        }
    }

    pub fn mux(&self) -> &M {
        &self.mux
    }

    /// Registers `handler` for `pattern` with the host multiplexer and records
    /// the pattern. A pattern the host rejects is not recorded, and the host's
    /// error is returned as is.
    pub fn handle<H>(&self, pattern: &str, handler: H) -> MuxResult<()>
    where
        H: Handler + 'static,
    {
        self.register(pattern, Arc::new(handler))
    }

    pub fn handle_fn<F>(&self, pattern: &str, f: F) -> MuxResult<()>
    where
        F: Fn(&Request, &mut Response) + Send + Sync + 'static,
    {
        self.register(pattern, Arc::new(f))
    }

    pub fn register(&self, pattern: &str, handler: Arc<dyn Handler>) -> MuxResult<()> {
        tracing::event!(tracing::Level::TRACE, operation = "register", pattern = %pattern);

        if let Err(err) = self.mux.handle(pattern, handler) {
            self.state.lock().metrics.record_rejection();
            return Err(err);
        }

        let mut state = self.state.lock();
        state.patterns.push(pattern.to_string());
        state.metrics.record_insert();
        Ok(())
    }

    /// The host multiplexer's routing decision for `req`.
    pub fn handler(&self, req: &Request) -> RouteMatch {
        self.mux.handler(req)
    }

    pub fn serve(&self, req: &Request, resp: &mut Response) {
        self.mux.serve(req, resp)
    }

    /// Registered patterns, sorted, duplicates included.
    pub fn patterns(&self) -> Vec<String> {
        let mut patterns = self.state.lock().patterns.clone();
        patterns.sort_unstable();
        patterns
    }

    pub fn metrics(&self) -> RegistryMetrics {
        self.state.lock().metrics
    }

    /// Checks that `routes` names exactly the registered patterns.
    ///
    /// `routes` must lead, through any number of indirections, to a record of
    /// string fields. Referenced patterns that were never registered are
    /// reported ahead of registered patterns with no reference.
    pub fn check_reverse(&self, routes: &dyn Reflect) -> ReverseResult<()> {
        self.check_reverse_with(&CheckOptions::default(), routes)
    }

    pub fn check_reverse_with(
        &self,
        options: &CheckOptions,
        routes: &dyn Reflect,
    ) -> ReverseResult<()> {
        let mut diff = self.reverse_diff(routes)?;
        diff.apply(options);

        let result = diff.into_result();
        match &result {
            Ok(()) => {
                tracing::event!(
                    tracing::Level::DEBUG,
                    operation = "check_reverse",
                    "reverse routes consistent"
                );
            }
            Err(err) => {
                tracing::event!(
                    tracing::Level::WARN,
                    operation = "check_reverse",
                    detail = %err.detail(),
                    "{err}"
                );
            }
        }
        result
    }

    /// Both one-sided differences between the registered patterns and the
    /// fields of `routes`, without choosing which one to report.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn reverse_diff(&self, routes: &dyn Reflect) -> ReverseResult<RouteDiff> {
        let referenced = reference_set(routes).map_err(ReverseError::InvalidInput)?;

        let registered = {
            let mut state = self.state.lock();
            state.metrics.record_check();
            state.patterns.clone()
        };

        Ok(diff_routes(registered, referenced))
    }
}

impl<M: Multiplexer> Multiplexer for RouteRegistry<M> {
    fn handle(&self, pattern: &str, handler: Arc<dyn Handler>) -> MuxResult<()> {
        self.register(pattern, handler)
    }

    fn handler(&self, req: &Request) -> RouteMatch {
        self.mux.handler(req)
    }

    fn serve(&self, req: &Request, resp: &mut Response) {
        self.mux.serve(req, resp)
    }
}

impl<M: Multiplexer> Handler for RouteRegistry<M> {
    fn serve(&self, req: &Request, resp: &mut Response) {
        self.mux.serve(req, resp)
    }
}

impl<M: Multiplexer + fmt::Debug> fmt::Debug for RouteRegistry<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("RouteRegistry")
            .field("mux", &self.mux)
            .field("patterns", &state.patterns)
            .field("metrics", &state.metrics)
            .finish()
    }
}
