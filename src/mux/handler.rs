use http::{HeaderValue, StatusCode, header};
use std::fmt;
use std::sync::Arc;

pub type Request = http::Request<Vec<u8>>;
pub type Response = http::Response<Vec<u8>>;

/// Anything that can answer a request by filling in a response.
pub trait Handler: Send + Sync {
    fn serve(&self, req: &Request, resp: &mut Response);
}

impl<F> Handler for F
where
    F: Fn(&Request, &mut Response) + Send + Sync,
{
    fn serve(&self, req: &Request, resp: &mut Response) {
        self(req, resp)
    }
}

/// The routing decision for a request.
#[derive(Clone)]
pub struct RouteMatch {
    pub handler: Arc<dyn Handler>,
    pub pattern: String,
}

impl RouteMatch {
    pub fn new(handler: Arc<dyn Handler>, pattern: impl Into<String>) -> Self {
        Self {
            handler,
            pattern: pattern.into(),
        }
    }

    pub(crate) fn not_found() -> Self {
        Self::new(Arc::new(NotFound), "")
    }
}

impl fmt::Debug for RouteMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// The request's host as sent by the client, port included.
pub(crate) fn request_host(req: &Request) -> &str {
    req.headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| req.uri().authority().map(|authority| authority.as_str()))
        .unwrap_or("")
}

/// Replies 404 with a plain-text body.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotFound;

impl Handler for NotFound {
    fn serve(&self, _req: &Request, resp: &mut Response) {
        *resp.status_mut() = StatusCode::NOT_FOUND;
        resp.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        *resp.body_mut() = b"404 page not found\n".to_vec();
    }
}

/// Redirects every request to a fixed location.
#[derive(Debug, Clone)]
pub struct Redirect {
    location: String,
    status: StatusCode,
}

impl Redirect {
    pub fn new(location: impl Into<String>, status: StatusCode) -> Self {
        Self {
            location: location.into(),
            status,
        }
    }

    pub fn permanent(location: impl Into<String>) -> Self {
        Self::new(location, StatusCode::MOVED_PERMANENTLY)
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl Handler for Redirect {
    fn serve(&self, req: &Request, resp: &mut Response) {
        *resp.status_mut() = self.status;
        match HeaderValue::from_str(&self.location) {
            Ok(value) => {
                resp.headers_mut().insert(header::LOCATION, value);
            }
            Err(_) => {
                tracing::event!(
                    tracing::Level::WARN,
                    location = %self.location,
                    "redirect location is not a valid header value"
                );
            }
        }

        if req.method() == http::Method::GET || req.method() == http::Method::HEAD {
            resp.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/html; charset=utf-8"),
            );
            if req.method() == http::Method::GET {
                let reason = self.status.canonical_reason().unwrap_or("Redirect");
                *resp.body_mut() =
                    format!("<a href=\"{}\">{}</a>.\n\n", self.location, reason).into_bytes();
            }
        }
    }
}
