use smallvec::SmallVec;

/// Returns the canonical form of a request path.
///
/// Repeated slashes, `.` elements and `..` elements (with the element they
/// cancel) are removed lexically. The result always starts with `/`, and a
/// trailing slash on the input is kept.
#[tracing::instrument(level = "trace", skip(path), fields(path_len = path.len() as u64))]
pub fn clean_path(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }

    let mut segments: SmallVec<[&str; 8]> = SmallVec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut output = String::with_capacity(path.len() + 1);
    for segment in &segments {
        output.push('/');
        output.push_str(segment);
    }

    if output.is_empty() || path.ends_with('/') {
        output.push('/');
    }

    output
}

/// Removes a `:port` suffix from a request host. Hosts that do not split
/// cleanly into host and port are returned unchanged.
pub fn strip_host_port(host: &str) -> &str {
    let bytes = host.as_bytes();
    if memchr::memchr(b':', bytes).is_none() {
        return host;
    }

    if bytes[0] == b'[' {
        return match memchr::memchr(b']', bytes) {
            Some(end) if bytes.get(end + 1) == Some(&b':') => &host[1..end],
            _ => host,
        };
    }

    let mut colons = memchr::memchr_iter(b':', bytes);
    match (colons.next(), colons.next()) {
        (Some(idx), None) => &host[..idx],
        _ => host,
    }
}
