//! Tool-name sanitization

/// Maps an arbitrary tool identifier to the `^[a-zA-Z0-9_-]+$` charset the
/// tool-calling protocol requires, replacing every other character with `-`.
///
/// Total and idempotent: sanitizing an already-sanitized name is a no-op.
pub fn format_tool_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
