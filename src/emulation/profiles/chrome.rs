//! Chrome default header set.

use crate::http::Headers;

pub(crate) fn default_headers(version: &str) -> Headers {
    let major = version.split('.').next().unwrap_or(version);

    let mut headers = Headers::new();
    headers.append(
        "User-Agent",
        format!(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/{version} Safari/537.36"
        ),
    );
    headers.append(
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,\
         image/webp,image/apng,*/*;q=0.8",
    );
    headers.append("Accept-Language", "en-US,en;q=0.9");
    headers.append("Accept-Encoding", "gzip, deflate, br, zstd");
    headers.append("Upgrade-Insecure-Requests", "1");
    headers.append(
        "Sec-CH-UA",
        format!(
            "\"Chromium\";v=\"{major}\", \"Google Chrome\";v=\"{major}\", \
             \"Not-A.Brand\";v=\"99\""
        ),
    );
    headers.append("Sec-CH-UA-Mobile", "?0");
    headers.append("Sec-CH-UA-Platform", "\"Windows\"");
    headers.append("Sec-Fetch-Dest", "document");
    headers.append("Sec-Fetch-Mode", "navigate");
    headers.append("Sec-Fetch-Site", "none");
    headers.append("Sec-Fetch-User", "?1");
    headers
}
