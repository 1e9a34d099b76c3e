use url::Url;

/// Returns `true` when `candidate` is an absolute URL with both a scheme and a host.
///
/// Parsing follows the WHATWG URL rules. Any scheme is accepted as long as it
/// carries an authority, so `ftp://host` passes while `mailto:a@b` and bare
/// words such as `example.com` do not.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}
