use memchr::memmem;

use crate::mode::Mode;

/// Substrings that disqualify a fragment from reformatting, matched
/// against the lowercased text. Documentation SQL is often illustrative
/// rather than executable, and the formatter's canonical output is not
/// trustworthy for these constructs.
const DENYLIST: &[&str] = &[
    "--",
    "backup",
    "begin",
    "cancel",
    "cluster setting",
    "collate",
    "commit",
    "create role",
    "create user",
    "create view",
    "drop role",
    "drop user",
    "export",
    "import",
    "partition",
    "password",
    "pause",
    "reset",
    "restore",
    "resume",
    "rollback",
    "set database",
    "set tracing",
    "show",
    "transaction",
    "using gin",
    // fragments with non-standard type names are often prose examples
    "boolean",
    "numeric",
    "timestamptz",
];

/// Decide whether a fragment should be left untouched.
///
/// Rules short-circuit in order: any non-ASCII byte, any denylisted
/// substring, then the CREATE TABLE ... AS guard (the formatter mangles
/// that form).
pub fn should_skip(expr: &[u8], mode: &Mode) -> bool {
    if expr.iter().any(|&b| b > 127) {
        return true;
    }

    let lowered = expr.to_ascii_lowercase();
    if DENYLIST
        .iter()
        .any(|needle| memmem::find(&lowered, needle.as_bytes()).is_some())
    {
        return true;
    }
    if mode
        .skip
        .iter()
        .any(|needle| memmem::find(&lowered, needle.to_ascii_lowercase().as_bytes()).is_some())
    {
        return true;
    }

    memmem::find(&lowered, b"create table").is_some() && memmem::find(&lowered, b"as").is_some()
}
