//! Firefox default header set. No client-hint headers; Firefox-specific
//! Accept and Accept-Language weights.

use crate::http::Headers;

pub(crate) fn default_headers(version: &str) -> Headers {
    let mut headers = Headers::new();
    headers.append(
        "User-Agent",
        format!(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:{version}) \
             Gecko/20100101 Firefox/{version}"
        ),
    );
    headers.append(
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,\
         image/webp,image/png,image/svg+xml,*/*;q=0.8",
    );
    headers.append("Accept-Language", "en-US,en;q=0.5");
    headers.append("Accept-Encoding", "gzip, deflate, br, zstd");
    headers.append("Upgrade-Insecure-Requests", "1");
    headers.append("Sec-Fetch-Dest", "document");
    headers.append("Sec-Fetch-Mode", "navigate");
    headers.append("Sec-Fetch-Site", "none");
    headers.append("Sec-Fetch-User", "?1");
    headers
}
