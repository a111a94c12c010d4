//! The `q` URL query parameter used for shareable search links.

/// Name of the query-string parameter carrying the search text.
pub const QUERY_PARAM: &str = "q";

/// Read the search text from a URL query string.
///
/// Accepts the string with or without the leading `?`. Keys and values are
/// percent-decoded, with `+` as a space as in form submissions, so `%71=crm`
/// is read as `q=crm`. A missing `q`, or one that fails to decode, yields an
/// empty query. When `q` repeats, the first occurrence wins.
pub fn parse_query_param(query_string: &str) -> String {
    let query_string = query_string.strip_prefix('?').unwrap_or(query_string);

    let raw = query_string.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let is_query = decode(key).is_ok_and(|key| key == QUERY_PARAM);
        is_query.then_some(value)
    });

    let Some(raw) = raw else {
        return String::new();
    };
    decode(raw).unwrap_or_else(|e| {
        tracing::warn!("Ignoring undecodable '{}' parameter: {}", QUERY_PARAM, e);
        String::new()
    })
}

fn decode(component: &str) -> Result<String, std::string::FromUtf8Error> {
    urlencoding::decode(&component.replace('+', " ")).map(|decoded| decoded.into_owned())
}

/// Build the query string for a search link (`?q=...`).
///
/// A blank query produces an empty string so the link points at the bare
/// search page.
pub fn to_query_string(query: &str) -> String {
    if query.trim().is_empty() {
        String::new()
    } else {
        format!("?{}={}", QUERY_PARAM, urlencoding::encode(query))
    }
}
