//! Dotted property paths decoded from engine locations.

/// Convert an engine instance location into a dotted property path.
///
/// Locations arrive as URI fragments or bare JSON Pointers: an optional
/// part up to and including the first `#`, then slash-separated segments
/// with the first segment empty for the document root (`#/a/b`, `/a/b`,
/// `""`). Segments carry JSON Pointer escapes (`~1` for `/`, `~0` for
/// `~`) and may be percent-encoded. The root location yields an empty
/// string.
pub fn dotted_path(location: &str) -> String {
    let fragment = match location.find('#') {
        Some(index) => &location[index + 1..],
        None => location,
    };

    fragment
        .split('/')
        .skip(1)
        .map(decode_segment)
        .collect::<Vec<_>>()
        .join(".")
}

fn decode_segment(segment: &str) -> String {
    // Unescape `~1` before `~0` so `~01` decodes to `~1`, not `/`.
    let unescaped = segment.replace("~1", "/").replace("~0", "~");
    match urlencoding::decode(&unescaped) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => unescaped,
    }
}
