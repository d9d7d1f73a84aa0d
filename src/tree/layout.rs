/// Connector for an entry that has siblings after it.
pub const TEE: &str = "\u{251c}\u{2500}\u{2500} "; // ├──
/// Connector for the last entry in a sibling group.
pub const ELBOW: &str = "\u{2514}\u{2500}\u{2500} "; // └──
/// Continuation segment below a non-last entry.
pub const PIPE: &str = "\u{2502}   "; // │
/// Continuation segment below a last entry.
pub const SPACER: &str = "    ";

/// Connector glyph for an entry, depending on whether it is the last sibling.
pub fn connector(is_last: bool) -> &'static str {
    if is_last {
        ELBOW
    } else {
        TEE
    }
}

/// Prefix handed to the children of an entry rendered with `prefix`.
pub fn next_prefix(prefix: &str, is_last: bool) -> String {
    let segment = if is_last { SPACER } else { PIPE };
    let mut next = String::with_capacity(prefix.len() + segment.len());
    next.push_str(prefix);
    next.push_str(segment);
    next
}
