//! Fenced-block extraction and reassembly.
//!
//! SQL lives in documents inside three-tilde fences tagged `sql`; within
//! a fence, REPL-style `>` prompts at the start of a line separate
//! sequential statements. Reformatting is best-effort per fragment: a
//! fragment that is filtered out or fails to parse is emitted
//! byte-for-byte, so a whole document never fails on one bad statement.

use std::sync::LazyLock;

use regex::bytes::{Captures, Regex};

use crate::mode::Mode;
use crate::render::{self, Style};
use crate::skip;

/// A fenced SQL region: opening marker (tilde fence plus `sql` tag and
/// any following whitespace), lazy body, closing fence.
static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Unicode mode is off so the pattern operates on raw bytes and the
    // document is not required to be valid UTF-8.
    Regex::new(r"(?is-u)(~~~.?sql\s*)(.*?)(\s*~~~)").expect("block pattern must compile")
});

/// Fragment separator: a `>` prompt at the start of a line.
static SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^>").expect("split pattern must compile"));

/// Reformat every SQL fence in `doc`, returning the new document bytes.
///
/// Text outside fences, the fence markers themselves, and every fragment
/// that is skipped or unparseable are preserved verbatim, so comparing
/// the result against `doc` tells the caller whether anything changed.
pub fn reformat_document(doc: &[u8], mode: &Mode) -> Vec<u8> {
    let style = mode.style();
    BLOCK_RE
        .replace_all(doc, |caps: &Captures| reformat_block(caps, mode, &style))
        .into_owned()
}

fn reformat_block(caps: &Captures, mode: &Mode, style: &Style) -> Vec<u8> {
    let mut buf = Vec::with_capacity(caps[0].len());
    buf.extend_from_slice(&caps[1]);
    for (i, fragment) in SPLIT_RE.split(&caps[2]).enumerate() {
        if i > 0 {
            buf.push(b'>');
        }
        buf.extend_from_slice(&reformat_fragment(fragment, mode, style));
    }
    buf.extend_from_slice(&caps[3]);
    buf
}

/// Reformat one statement fragment, or return it unchanged.
fn reformat_fragment(fragment: &[u8], mode: &Mode, style: &Style) -> Vec<u8> {
    if skip::should_skip(fragment, mode) {
        return fragment.to_vec();
    }

    let (leading, core, trailing) = split_padding(fragment);
    // The skip filter rejected non-ASCII bytes, so the core is valid UTF-8.
    let Ok(core) = std::str::from_utf8(core) else {
        return fragment.to_vec();
    };
    let statement = match render::parse_one(core) {
        Ok(statement) => statement,
        Err(_) => return fragment.to_vec(),
    };

    let mut out = Vec::with_capacity(fragment.len());
    out.extend_from_slice(leading);
    out.extend_from_slice(render::render(&statement, style).as_bytes());
    out.push(b';');
    out.extend_from_slice(trailing);
    out
}

/// Split a fragment into leading whitespace, core, and trailing
/// whitespace, so the padding can be reproduced verbatim around the
/// reformatted core.
fn split_padding(expr: &[u8]) -> (&[u8], &[u8], &[u8]) {
    let start = match expr.iter().position(|b| !b.is_ascii_whitespace()) {
        Some(i) => i,
        None => return (expr, &[], &[]),
    };
    let end = expr
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(expr.len(), |i| i + 1);
    (&expr[..start], &expr[start..end], &expr[end..])
}
