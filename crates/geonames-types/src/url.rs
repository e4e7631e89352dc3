//! Base URL normalization.

/// Normalizes a client base URL.
///
/// Surrounding whitespace is trimmed, any `?query` suffix is discarded and
/// trailing slashes are stripped, so endpoints can be joined as
/// `{base}/{path}`.
///
/// # Example
///
/// ```
/// use geonames_types::normalize_base_url;
///
/// assert_eq!(
///     normalize_base_url(" https://download.geonames.org/export/dump/?x=1 "),
///     "https://download.geonames.org/export/dump"
/// );
/// ```
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_query = trimmed.split_once('?').map_or(trimmed, |(head, _)| head);
    without_query.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plain() {
        assert_eq!(
            normalize_base_url("https://secure.geonames.org"),
            "https://secure.geonames.org"
        );
    }

    #[test]
    fn test_normalize_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://secure.geonames.org//"),
            "https://secure.geonames.org"
        );
    }

    #[test]
    fn test_normalize_query_and_whitespace() {
        assert_eq!(
            normalize_base_url("\thttp://127.0.0.1:8080/dump/?token=abc\n"),
            "http://127.0.0.1:8080/dump"
        );
    }
}
