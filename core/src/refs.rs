#![deny(missing_docs)]

//! # Reference Helpers
//!
//! Shared helpers for splitting `$ref` strings and decoding JSON Pointer
//! segments. These never fetch documents; turning a document part into a
//! registered document is the bundler's job.

use percent_encoding::percent_decode_str;
use url::Url;

/// Prefix carried by document-local references into a `definitions` map.
pub const LOCAL_DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Splits a reference into its document part and fragment at the first `#`.
///
/// A reference without a `#` is all document part.
pub fn split_reference(ref_str: &str) -> (&str, Option<&str>) {
    match ref_str.find('#') {
        Some(idx) => (&ref_str[..idx], Some(&ref_str[idx + 1..])),
        None => (ref_str, None),
    }
}

/// Extracts the definition name from a reference whose fragment points at a
/// top-level definition, e.g. `a.json#/definitions/Foo` -> `Foo`.
///
/// Returns `None` for fragments that point anywhere else, including deeper
/// pointers like `#/definitions/Foo/properties/bar`.
pub fn definition_name(ref_str: &str) -> Option<String> {
    let (_, fragment) = split_reference(ref_str);
    let pointer = fragment?.trim_start_matches('/');
    let mut segments = pointer.split('/');

    if segments.next() != Some("definitions") {
        return None;
    }
    let name_seg = segments.next()?;
    if segments.next().is_some() {
        return None;
    }

    let name = decode_pointer_segment(name_seg);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
pub fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}

/// Resolves a reference's document part to an absolute URL string.
///
/// Absolute URLs pass through normalized; anything else is joined against
/// `base` (the owning document's own URL).
pub fn resolve_document_url(document: &str, base: &str) -> Option<String> {
    if let Ok(url) = Url::parse(document) {
        return Some(url.to_string());
    }
    let base = Url::parse(base).ok()?;
    base.join(document).ok().map(|u| u.to_string())
}
