/// Splits `pattern` into its host and path parts.
///
/// Path-only patterns (leading `/`) have an empty host. A host-qualified
/// pattern without any `/` has an empty path.
pub fn host_path(pattern: &str) -> (&str, &str) {
    if pattern.is_empty() {
        return ("", "");
    }
    if pattern.as_bytes()[0] == b'/' {
        return ("", pattern);
    }
    match memchr::memchr(b'/', pattern.as_bytes()) {
        Some(idx) => pattern.split_at(idx),
        None => (pattern, ""),
    }
}

/// Reports whether `pattern` takes a suffix parameter, i.e. its path part
/// ends in `/`.
#[inline]
pub fn is_parametric(pattern: &str) -> bool {
    host_path(pattern).1.ends_with('/')
}

/// Builds a request path from `pattern` and the parameter `value`.
///
/// The host part of `pattern` is dropped. Fixed patterns ignore `value` and
/// return their path unchanged; parametric patterns have `value` appended
/// verbatim.
pub fn compose(pattern: &str, value: &str) -> String {
    let (_, path) = host_path(pattern);
    if !path.ends_with('/') {
        return path.to_string();
    }

    let mut out = String::with_capacity(path.len() + value.len());
    out.push_str(path);
    out.push_str(value);
    out
}

/// Extracts the parameter of `pattern` from the request path `path`.
///
/// Returns an empty string when `pattern` is fixed or `path` does not start
/// with the path part of `pattern`. The host part of `pattern` is ignored.
pub fn decompose<'p>(pattern: &str, path: &'p str) -> &'p str {
    let (_, prefix) = host_path(pattern);
    if !prefix.ends_with('/') {
        return "";
    }
    path.strip_prefix(prefix).unwrap_or("")
}
