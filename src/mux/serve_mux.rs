use crate::mux::{
    Handler, Multiplexer, MuxError, MuxOptions, MuxResult, Redirect, Request, Response,
    RouteMatch, request_host,
};
use crate::path::{clean_path, strip_host_port};
use hashbrown::HashMap as FastHashMap;
use http::{HeaderValue, Method, StatusCode, header};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
struct MuxEntry {
    handler: Arc<dyn Handler>,
    pattern: String,
}

impl MuxEntry {
    fn to_match(&self) -> RouteMatch {
        RouteMatch::new(self.handler.clone(), self.pattern.clone())
    }
}

#[derive(Default)]
struct MuxState {
    exact: FastHashMap<String, MuxEntry>,
    // `/`-terminated patterns, longest first.
    prefixes: Vec<MuxEntry>,
    hosts: bool,
}

impl MuxState {
    fn find(&self, path: &str) -> Option<&MuxEntry> {
        if let Some(entry) = self.exact.get(path) {
            return Some(entry);
        }
        self.prefixes
            .iter()
            .find(|entry| path.starts_with(entry.pattern.as_str()))
    }

    fn lookup(&self, host: &str, path: &str, host_routing: bool) -> RouteMatch {
        if self.hosts && host_routing {
            let qualified = format!("{host}{path}");
            if let Some(entry) = self.find(&qualified) {
                return entry.to_match();
            }
        }
        match self.find(path) {
            Some(entry) => entry.to_match(),
            None => RouteMatch::not_found(),
        }
    }

    fn should_redirect_to_slash(&self, host: &str, path: &str, host_routing: bool) -> bool {
        let qualified = format!("{host}{path}");
        let all = [path, qualified.as_str()];
        let candidates = if self.hosts && host_routing {
            &all[..]
        } else {
            &all[..1]
        };
        if candidates.iter().any(|c| self.exact.contains_key(*c)) {
            return false;
        }
        if path.is_empty() || path.ends_with('/') {
            return false;
        }
        candidates
            .iter()
            .any(|c| self.exact.contains_key(format!("{c}/").as_str()))
    }
}

/// A prefix-matching request multiplexer.
///
/// Patterns ending in `/` match every path below them; other patterns match
/// one path exactly. The longest matching pattern wins, and host-qualified
/// patterns (`host/path`) take precedence over path-only ones.
pub struct ServeMux {
    state: RwLock<MuxState>,
    options: MuxOptions,
}

impl ServeMux {
    pub fn new() -> Self {
        Self::with_options(MuxOptions::default())
    }

    pub fn with_options(options: MuxOptions) -> Self {
        Self {
            state: RwLock::new(MuxState::default()),
            options,
        }
    }

    pub fn options(&self) -> &MuxOptions {
        &self.options
    }

    fn redirect(location: String, pattern: String) -> RouteMatch {
        RouteMatch::new(Arc::new(Redirect::permanent(location)), pattern)
    }
}

impl Default for ServeMux {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ServeMux {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        let mut patterns: Vec<&str> = state.exact.keys().map(String::as_str).collect();
        patterns.sort_unstable();
        f.debug_struct("ServeMux")
            .field("patterns", &patterns)
            .field("options", &self.options)
            .finish()
    }
}

impl Multiplexer for ServeMux {
    fn handle(&self, pattern: &str, handler: Arc<dyn Handler>) -> MuxResult<()> {
        if pattern.is_empty() {
            return Err(MuxError::InvalidPattern {
                pattern: pattern.to_string(),
            });
        }

        let mut state = self.state.write();
        if state.exact.contains_key(pattern) {
            return Err(MuxError::MultipleRegistrations {
                pattern: pattern.to_string(),
            });
        }

        let entry = MuxEntry {
            handler,
            pattern: pattern.to_string(),
        };
        if pattern.ends_with('/') {
            let idx = state
                .prefixes
                .partition_point(|e| e.pattern.len() >= pattern.len());
            state.prefixes.insert(idx, entry.clone());
        }
        if !pattern.starts_with('/') {
            state.hosts = true;
        }
        state.exact.insert(pattern.to_string(), entry);

        tracing::event!(tracing::Level::TRACE, operation = "handle", pattern = %pattern);
        Ok(())
    }

    #[tracing::instrument(level = "trace", skip(self, req), fields(method = %req.method(), path = %req.uri().path()))]
    fn handler(&self, req: &Request) -> RouteMatch {
        let state = self.state.read();
        let path = req.uri().path();
        let query = req.uri().query();
        let with_query = |p: &str| match query {
            Some(q) => format!("{p}?{q}"),
            None => p.to_string(),
        };

        if req.method() == Method::CONNECT {
            let host = req.uri().host().unwrap_or("");
            if self.options.redirect_trailing_slash
                && state.should_redirect_to_slash(host, path, self.options.host_routing)
            {
                let target = format!("{path}/");
                return Self::redirect(with_query(&target), target);
            }
            return state.lookup(request_host(req), path, self.options.host_routing);
        }

        let host = strip_host_port(request_host(req));
        let cleaned = clean_path(path);

        if self.options.redirect_trailing_slash
            && state.should_redirect_to_slash(host, &cleaned, self.options.host_routing)
        {
            let target = format!("{cleaned}/");
            tracing::event!(tracing::Level::DEBUG, from = %path, to = %target, "redirecting to subtree");
            return Self::redirect(with_query(&target), target);
        }

        if self.options.redirect_unclean_paths && cleaned != path {
            let matched = state.lookup(host, &cleaned, self.options.host_routing);
            tracing::event!(tracing::Level::DEBUG, from = %path, to = %cleaned, "redirecting to clean path");
            return Self::redirect(with_query(&cleaned), matched.pattern);
        }

        state.lookup(host, path, self.options.host_routing)
    }

    fn serve(&self, req: &Request, resp: &mut Response) {
        if req.uri().path() == "*" {
            resp.headers_mut()
                .insert(header::CONNECTION, HeaderValue::from_static("close"));
            *resp.status_mut() = StatusCode::BAD_REQUEST;
            return;
        }
        let matched = self.handler(req);
        matched.handler.serve(req, resp);
    }
}

impl Handler for ServeMux {
    fn serve(&self, req: &Request, resp: &mut Response) {
        Multiplexer::serve(self, req, resp)
    }
}
