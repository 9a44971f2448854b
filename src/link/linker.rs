use crate::link::{LinkError, LinkResult, Query};
use crate::mux::{Request, request_host};
use crate::pattern::compose;
use serde::{Deserialize, Serialize};
use url::{Position, Url};

// Placeholder host for building relative references; only the part from the
// path onward is kept.
const RELATIVE_HOST: &str = "relative.invalid";

/// A typed hypermedia link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }
}

fn build(scheme: &str, host: &str, pattern: &str, param: &str, query: &Query) -> LinkResult<Url> {
    let mut url =
        Url::parse(&format!("{scheme}://{host}")).map_err(|source| LinkError::InvalidHost {
            host: host.to_string(),
            source,
        })?;
    url.set_path(&compose(pattern, param));
    if !query.is_empty() {
        url.set_query(Some(&query.encode()));
    }
    Ok(url)
}

/// A relative URL whose path is `compose(pattern, param)` and whose query is
/// `query`.
pub fn url_for(pattern: &str, param: &str, query: &Query) -> LinkResult<String> {
    let url = build("http", RELATIVE_HOST, pattern, param, query)?;
    Ok(url[Position::BeforePath..].to_string())
}

/// Like [`url_for`] but absolute on `host`, using `https` or `http`.
pub fn abs_url(
    https: bool,
    host: &str,
    pattern: &str,
    param: &str,
    query: &Query,
) -> LinkResult<String> {
    let scheme = if https { "https" } else { "http" };
    build(scheme, host, pattern, param, query).map(String::from)
}

/// Produces URLs from a pattern, a parameter and a query.
pub trait Linker {
    /// The returned URL may be relative.
    fn url(&self, pattern: &str, param: &str, query: &Query) -> LinkResult<String>;

    fn link(&self, rel: &str, pattern: &str, param: &str, query: &Query) -> LinkResult<Link> {
        Ok(Link::new(rel, self.url(pattern, param, query)?))
    }
}

/// Adapts a function to [`Linker`].
#[derive(Debug, Clone, Copy)]
pub struct LinkerFn<F>(pub F);

impl<F> Linker for LinkerFn<F>
where
    F: Fn(&str, &str, &Query) -> LinkResult<String>,
{
    fn url(&self, pattern: &str, param: &str, query: &Query) -> LinkResult<String> {
        (self.0)(pattern, param, query)
    }
}

/// Builds relative URLs with [`url_for`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeLinker;

impl Linker for RelativeLinker {
    fn url(&self, pattern: &str, param: &str, query: &Query) -> LinkResult<String> {
        url_for(pattern, param, query)
    }
}

/// Builds absolute URLs on a fixed host, usually the one a request was sent
/// to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostLinker {
    host: String,
    use_https: bool,
}

impl HostLinker {
    pub fn new(host: impl Into<String>, use_https: bool) -> Self {
        Self {
            host: host.into(),
            use_https,
        }
    }

    pub fn from_request(req: &Request, use_https: bool) -> Self {
        Self::new(request_host(req), use_https)
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

impl Linker for HostLinker {
    fn url(&self, pattern: &str, param: &str, query: &Query) -> LinkResult<String> {
        abs_url(self.use_https, &self.host, pattern, param, query)
    }
}
