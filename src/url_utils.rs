//! URL Utility Functions
//!
//! Syntactic predicates and component accessors for raw attribute values.
//! Values come straight out of markup, so every helper tolerates garbage and
//! reports "absent" rather than failing.
//!
//! Three shapes are recognized:
//!
//! | Shape            | Example                       |
//! |------------------|-------------------------------|
//! | scheme-agnostic  | `//cdn.example.com/app.js`    |
//! | relative         | `/images/logo.png`            |
//! | absolute         | `https://example.com/about`   |
//!
//! Scheme-agnostic is always tested before relative: `/` is a prefix of `//`.

use url::Url;

/// Check if a string is a scheme-agnostic URL (`//host/path`).
#[inline]
#[must_use]
pub fn is_scheme_agnostic_url(s: &str) -> bool {
    s.starts_with("//")
}

/// Check if a string is a root-relative URL (`/path`).
///
/// Scheme-agnostic URLs are excluded even though they also start with `/`.
#[inline]
#[must_use]
pub fn is_relative_url(s: &str) -> bool {
    s.starts_with('/') && !is_scheme_agnostic_url(s)
}

/// Check if a string is an absolute URL with both a scheme and a host.
///
/// The raw text must spell out the `scheme://` authority marker. The `url`
/// crate would otherwise accept `http:example.com` as having a host.
///
/// # Examples
/// ```
/// use url_extractor::url_utils::is_absolute_url;
///
/// assert!(is_absolute_url("https://example.com/path"));
/// assert!(is_absolute_url("ftp://files.example.com"));
/// assert!(!is_absolute_url("www.example.com"));
/// assert!(!is_absolute_url("mailto:someone@example.com"));
/// ```
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    parse_absolute(s).is_some()
}

/// Check if a string is any kind of URL this crate understands.
#[must_use]
pub fn is_url(s: &str) -> bool {
    is_scheme_agnostic_url(s) || is_relative_url(s) || is_absolute_url(s)
}

/// Parse a string as an absolute URL, or `None` if it is not one.
#[must_use]
pub fn parse_absolute(s: &str) -> Option<Url> {
    if s.is_empty() || s.trim() != s {
        return None;
    }

    let url = Url::parse(s).ok()?;

    let has_authority = s
        .get(url.scheme().len()..)
        .is_some_and(|rest| rest.starts_with("://"));
    if !has_authority {
        return None;
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Some(url),
        _ => None,
    }
}

/// Parse a scheme-agnostic URL by borrowing a placeholder scheme.
fn parse_scheme_agnostic(s: &str) -> Option<Url> {
    let authority = s.strip_prefix("//")?;
    if authority.is_empty() || authority.starts_with('/') {
        return None;
    }
    parse_absolute(&format!("http:{s}"))
}

/// Parse anything that carries a host: absolute or scheme-agnostic.
fn parse_with_host(s: &str) -> Option<Url> {
    if is_scheme_agnostic_url(s) {
        parse_scheme_agnostic(s)
    } else {
        parse_absolute(s)
    }
}

/// Extract the host from an absolute or scheme-agnostic URL.
///
/// Relative URLs and unparsable strings have no host. The `url` crate
/// validates the string, but the host is sliced out of the raw text so its
/// case survives: locality and alternate-domain checks are case-sensitive.
/// Userinfo and port are dropped.
///
/// # Examples
/// ```
/// use url_extractor::url_utils::url_host;
///
/// assert_eq!(url_host("https://www.example.com:8080/a"), Some("www.example.com".to_string()));
/// assert_eq!(url_host("//CDN.Example.com/app.js"), Some("CDN.Example.com".to_string()));
/// assert_eq!(url_host("/relative"), None);
/// ```
#[must_use]
pub fn url_host(s: &str) -> Option<String> {
    let url = parse_with_host(s)?;

    let after_slashes = if is_scheme_agnostic_url(s) {
        &s[2..]
    } else {
        s.get(url.scheme().len() + 3..)?
    };

    let host = raw_host(after_slashes);
    if host.is_empty() {
        return None;
    }
    Some(host.to_string())
}

/// Host part of the text following `//`: up to the path, without
/// `user@` or `:port`. Bracketed IPv6 literals are kept whole.
fn raw_host(rest: &str) -> &str {
    let end = rest.find(['/', '?', '#', '\\']).unwrap_or(rest.len());
    let authority = &rest[..end];
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host)| host);

    if host_port.starts_with('[') {
        return host_port.find(']').map_or(host_port, |close| &host_port[..=close]);
    }
    host_port.split(':').next().unwrap_or_default()
}

/// Extract the path component, without query or fragment.
///
/// Strings that don't parse as a URL with a host are treated as a bare path.
#[must_use]
pub fn url_path(s: &str) -> String {
    if let Some(url) = parse_with_host(s) {
        return url.path().to_string();
    }

    let end = s.find(['?', '#']).unwrap_or(s.len());
    s[..end].to_string()
}

/// Strip a single leading `www.` label from a host. Case-sensitive:
/// `WWW.` is left alone.
#[inline]
#[must_use]
pub fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// Lower-cased file extension of the URL's path, or an empty string.
///
/// Only the last path segment is inspected. A path ending in `/` names a
/// directory and has no extension. Query strings and fragments never
/// contribute.
///
/// # Examples
/// ```
/// use url_extractor::url_utils::extension_of;
///
/// assert_eq!(extension_of("/images/Photo.JPG"), "jpg");
/// assert_eq!(extension_of("https://example.com/app.js?v=1.2"), "js");
/// assert_eq!(extension_of("https://example.com/docs/"), "");
/// assert_eq!(extension_of("https://example.com"), "");
/// ```
#[must_use]
pub fn extension_of(url: &str) -> String {
    let path = url_path(url);
    let file_name = path.rsplit('/').next().unwrap_or_default();

    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

/// Check if a URL points at a file (its path has an extension).
#[must_use]
pub fn is_file_url(url: &str) -> bool {
    !extension_of(url).is_empty()
}

/// Check if a URL belongs to the same site as `home_url`.
///
/// Relative URLs are always local. Otherwise hosts are compared after
/// dropping a leading `www.` from each side, so `www.example.com` and
/// `example.com` count as one site. The rest of the host must match
/// exactly, case included. This is a heuristic: no public-suffix logic is
/// applied.
///
/// # Examples
/// ```
/// use url_extractor::url_utils::is_local_url;
///
/// assert!(is_local_url("/about", "https://example.com"));
/// assert!(is_local_url("https://www.example.com/a", "https://example.com"));
/// assert!(is_local_url("//example.com/a.css", "https://www.example.com"));
/// assert!(!is_local_url("https://other.com/", "https://example.com"));
/// ```
#[must_use]
pub fn is_local_url(url: &str, home_url: &str) -> bool {
    if is_relative_url(url) {
        return true;
    }

    match (url_host(url), url_host(home_url)) {
        (Some(host), Some(home_host)) => strip_www(&host) == strip_www(&home_host),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_agnostic_is_not_relative() {
        assert!(is_scheme_agnostic_url("//cdn.example.com/x.js"));
        assert!(!is_relative_url("//cdn.example.com/x.js"));
        assert!(is_relative_url("/x.js"));
        assert!(!is_scheme_agnostic_url("/x.js"));
    }

    #[test]
    fn test_relative_requires_leading_slash() {
        assert!(!is_relative_url("images/a.png"));
        assert!(!is_relative_url("../a.png"));
        assert!(!is_relative_url(" /a.png"));
        assert!(!is_relative_url(""));
        assert!(is_relative_url("/"));
    }

    #[test]
    fn test_is_absolute_url_valid() {
        assert!(is_absolute_url("https://example.com/path"));
        assert!(is_absolute_url("http://example.com"));
        assert!(is_absolute_url("ftp://files.example.com/a.zip"));
        assert!(is_absolute_url("http://localhost:8080/"));
    }

    #[test]
    fn test_is_absolute_url_invalid() {
        assert!(!is_absolute_url("/relative/path"));
        assert!(!is_absolute_url("example.com"));
        assert!(!is_absolute_url("www.bad-url.com"));
        assert!(!is_absolute_url(""));
        assert!(!is_absolute_url("http:example.com"));
        assert!(!is_absolute_url("mailto:test@example.com"));
        assert!(!is_absolute_url("javascript:void(0)"));
        assert!(!is_absolute_url("data:image/png;base64,abc"));
        assert!(!is_absolute_url("file:///etc/passwd"));
    }

    #[test]
    fn test_is_absolute_url_rejects_surrounding_whitespace() {
        assert!(!is_absolute_url("  https://example.com/path  "));
    }

    #[test]
    fn test_is_url() {
        assert!(is_url("/a"));
        assert!(is_url("//cdn.example.com/a"));
        assert!(is_url("https://example.com"));
        assert!(!is_url("width=device-width, initial-scale=1"));
        assert!(!is_url("#top"));
        assert!(!is_url("page.html"));
        assert!(!is_url("tel:+1234567890"));
    }

    #[test]
    fn test_url_host() {
        assert_eq!(url_host("https://example.com/path"), Some("example.com".to_string()));
        assert_eq!(url_host("https://sub.example.com/"), Some("sub.example.com".to_string()));
        assert_eq!(url_host("//cdn.example.com/a.js"), Some("cdn.example.com".to_string()));
        assert_eq!(url_host("/relative"), None);
        assert_eq!(url_host("///no-host"), None);
        assert_eq!(url_host("//"), None);
        assert_eq!(url_host(""), None);
    }

    #[test]
    fn test_url_host_preserves_case() {
        assert_eq!(url_host("http://WWW.Home.Example/x"), Some("WWW.Home.Example".to_string()));
        assert_eq!(url_host("//CDN.Example/a.png"), Some("CDN.Example".to_string()));
        assert_eq!(url_host("HTTPS://Example.com"), Some("Example.com".to_string()));
    }

    #[test]
    fn test_url_host_drops_userinfo_and_port() {
        assert_eq!(url_host("https://user:pw@example.com:8443/a"), Some("example.com".to_string()));
        assert_eq!(url_host("http://[::1]:8080/"), Some("[::1]".to_string()));
        assert_eq!(url_host("https://example.com?q=1"), Some("example.com".to_string()));
        assert_eq!(url_host("https://example.com#top"), Some("example.com".to_string()));
    }

    #[test]
    fn test_url_path() {
        assert_eq!(url_path("https://example.com/a/b.png?x=1#f"), "/a/b.png");
        assert_eq!(url_path("//cdn.example.com/lib.js"), "/lib.js");
        assert_eq!(url_path("/img/a.png?size=2"), "/img/a.png");
        assert_eq!(url_path("/docs#intro"), "/docs");
        assert_eq!(url_path("https://example.com"), "/");
    }

    #[test]
    fn test_strip_www() {
        assert_eq!(strip_www("www.example.com"), "example.com");
        assert_eq!(strip_www("example.com"), "example.com");
        assert_eq!(strip_www("www2.example.com"), "www2.example.com");
        assert_eq!(strip_www("www.www.example.com"), "www.example.com");
        assert_eq!(strip_www("WWW.example.com"), "WWW.example.com");
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("/a.png"), "png");
        assert_eq!(extension_of("/A.PNG"), "png");
        assert_eq!(extension_of("/archive.tar.gz"), "gz");
        assert_eq!(extension_of("/about"), "");
        assert_eq!(extension_of("/"), "");
        assert_eq!(extension_of("/v1.2/docs"), "");
        assert_eq!(extension_of("/file."), "");
        assert_eq!(extension_of("https://example.com/page?file=a.pdf"), "");
        assert_eq!(extension_of("https://example.com/page#a.pdf"), "");
        assert_eq!(extension_of("//cdn.example.com/y.JS"), "js");
    }

    #[test]
    fn test_extension_of_host_is_not_a_file() {
        // The host's dots are not part of the path.
        assert_eq!(extension_of("https://example.com"), "");
        assert_eq!(extension_of("//cdn.example.com"), "");
    }

    #[test]
    fn test_is_file_url() {
        assert!(is_file_url("/a.png"));
        assert!(is_file_url("https://example.com/doc.pdf?dl=1"));
        assert!(!is_file_url("https://example.com/about/"));
        assert!(!is_file_url("/contact"));
    }

    #[test]
    fn test_is_local_url() {
        let home = "http://home.example";
        assert!(is_local_url("/a.png", home));
        assert!(is_local_url("http://home.example/x", home));
        assert!(is_local_url("https://home.example/x", home));
        assert!(is_local_url("http://www.home.example/x", home));
        assert!(is_local_url("//home.example/x", home));
        assert!(!is_local_url("http://other.example/x", home));
        assert!(!is_local_url("//cdn.example/y.js", home));
        assert!(!is_local_url("http://sub.home.example/x", home));
    }

    #[test]
    fn test_is_local_url_is_case_sensitive() {
        let home = "http://home.example";
        assert!(!is_local_url("http://WWW.Home.Example/x", home));
        assert!(!is_local_url("http://Home.Example/x", home));
        assert!(!is_local_url("http://WWW.home.example/x", home));
        assert!(is_local_url("http://www.Home.Example/x", "http://Home.Example"));
    }

    #[test]
    fn test_is_local_url_www_on_home_side() {
        assert!(is_local_url("https://home.example/a", "https://www.home.example"));
    }

    #[test]
    fn test_is_local_url_without_host() {
        assert!(!is_local_url("mailto:x@home.example", "http://home.example"));
        assert!(!is_local_url("page.html", "http://home.example"));
    }
}
