use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped inside a single URL path segment.
///
/// The WHATWG path set, extended with '/' and '%' so arbitrary file names
/// stay confined to one segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Percent-encode a directory or file name as one URL path segment
pub fn encode_segment(name: &str) -> String {
    utf8_percent_encode(name, SEGMENT).to_string()
}

/// Determine if a string is an absolute URL rather than a server-local path
pub fn is_absolute_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Resolve a URL or server-local path against the serving base URL
///
/// Absolute URLs pass through verbatim; anything else is joined onto the
/// base URL.
pub fn absolutize(base_url: &str, url_or_path: &str) -> String {
    if is_absolute_url(url_or_path) {
        url_or_path.to_string()
    } else if url_or_path.starts_with('/') {
        format!("{}{}", base_url.trim_end_matches('/'), url_or_path)
    } else {
        format!("{}/{}", base_url.trim_end_matches('/'), url_or_path)
    }
}

/// Server-local route for a cached cover file
pub fn cover_route(file_name: &str) -> String {
    format!("/covers/{}", encode_segment(file_name))
}

/// Full served URL for an audio or sidecar file inside a source folder
pub fn audio_url(base_url: &str, dir_name: &str, file_name: &str) -> String {
    format!(
        "{}/audio/{}/{}",
        base_url.trim_end_matches('/'),
        encode_segment(dir_name),
        encode_segment(file_name)
    )
}

/// Canonical URL of a source's feed document
pub fn feed_url(base_url: &str, dir_name: &str) -> String {
    format!(
        "{}/feeds/{}.xml",
        base_url.trim_end_matches('/'),
        encode_segment(dir_name)
    )
}
