//! Safari default header set. WebKit User-Agent, no client hints, and the
//! shorter Accept list Safari ships.

use crate::http::Headers;

pub(crate) fn default_headers(version: &str) -> Headers {
    let mut headers = Headers::new();
    headers.append(
        "User-Agent",
        format!(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
             AppleWebKit/605.1.15 (KHTML, like Gecko) Version/{version} \
             Safari/605.1.15"
        ),
    );
    headers.append(
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
    );
    headers.append("Accept-Language", "en-US,en;q=0.9");
    headers.append("Accept-Encoding", "gzip, deflate, br");
    headers.append("Sec-Fetch-Dest", "document");
    headers.append("Sec-Fetch-Mode", "navigate");
    headers.append("Sec-Fetch-Site", "none");
    headers
}
