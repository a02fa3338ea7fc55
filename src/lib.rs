// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`svgpaths` extracts `path` elements from an SVG document.

It is not an SVG parser. It runs a permissive pattern match over the raw
markup, collects every self-closing `path` tag that carries both an `id`
and a `d` attribute, and re-serializes them as indented, JSX-ready lines.
Tags that do not fit the pattern are skipped silently.

The whole thing is a linear pipeline:
[`load`] → [`extract`] → [`format`] → [`save`].
*/

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

pub use crate::error::Error;

mod error;

/// An extracted `path` element.
///
/// Both values are copied verbatim from the matched attributes.
/// No escaping or unescaping is applied.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PathRecord {
    /// The `id` attribute value.
    pub id: String,
    /// The `d` attribute value, an opaque string of drawing commands.
    pub data: String,
}

// A self-closing `path` tag with `id` and `d` attributes in either order,
// tolerating any other attributes in between. Negated classes match
// newlines, so attribute values can span multiple physical lines.
static PATH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"<path[^>]*?(?:\bid="([^"]+)"[^>]*?\bd="([^"]+)"|\bd="([^"]+)"[^>]*?\bid="([^"]+)")[^>]*?/>"#,
    )
    .unwrap()
});

/// Reads the whole file at `path` into a string.
pub fn load(path: &Path) -> Result<String, Error> {
    let data = std::fs::read(path).map_err(|_| Error::OpenFailed(path.to_path_buf()))?;
    let text = String::from_utf8(data).map_err(|_| Error::NotAnUtf8Str)?;

    if text.is_empty() {
        log::warn!("'{}' is empty", path.display());
    }

    Ok(text)
}

/// Finds all matching `path` tags in `doc`, in document order.
///
/// The returned iterator is lazy and finite. No matches is not an error,
/// it simply yields nothing.
pub fn extract(doc: &str) -> impl Iterator<Item = PathRecord> + '_ {
    PATH_RE.captures_iter(doc).filter_map(|caps| {
        let (id, data) = match (caps.get(1), caps.get(2)) {
            (Some(id), Some(data)) => (id, data),
            _ => (caps.get(4)?, caps.get(3)?),
        };

        Some(PathRecord {
            id: id.as_str().to_string(),
            data: data.as_str().to_string(),
        })
    })
}

/// Formats records as indented `path` lines joined by single newlines.
///
/// `id` always precedes `d` in the output, regardless of the order in the
/// source document. No trailing newline is appended.
pub fn format<I>(records: I) -> String
where
    I: IntoIterator<Item = PathRecord>,
{
    let lines: Vec<String> = records
        .into_iter()
        .map(|rec| format!("        <path id=\"{}\" d=\"{}\" />", rec.id, rec.data))
        .collect();

    lines.join("\n")
}

/// Writes `fragment` verbatim to `path`, overwriting any existing content.
pub fn save(fragment: &str, path: &Path) -> Result<(), Error> {
    std::fs::write(path, fragment).map_err(|_| Error::WriteFailed(path.to_path_buf()))
}
