//! `remove_dot_segments` algorithm described in [RFC 3986 5.2.4].
//!
//! [RFC 3986 5.2.4]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4

use crate::parser::str::find;

/// Removes `.` and `..` segments from the given path.
///
/// Percent-encoded dots (`%2E`) are not recognized as dots.
#[must_use]
pub(crate) fn remove_dot_segments(path: &str) -> String {
    // Each element is a segment with its preceding slash (if any).
    let mut output: Vec<&str> = Vec::new();
    let mut input = path;

    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../") {
            // 2.A ("../").
            input = rest;
        } else if let Some(rest) = input.strip_prefix("./") {
            // 2.A ("./").
            input = rest;
        } else if input.starts_with("/./") {
            // 2.B ("/./").
            input = &input[2..];
        } else if input == "/." {
            // 2.B ("/.").
            input = "/";
        } else if input.starts_with("/../") {
            // 2.C ("/../").
            input = &input[3..];
            output.pop();
        } else if input == "/.." {
            // 2.C ("/..").
            input = "/";
            output.pop();
        } else if input == "." || input == ".." {
            // 2.D.
            input = "";
        } else {
            // 2.E.
            let start = usize::from(input.starts_with('/'));
            let end = find(&input.as_bytes()[start..], b'/').map_or(input.len(), |pos| pos + start);
            output.push(&input[..end]);
            input = &input[end..];
        }
    }

    output.concat()
}
