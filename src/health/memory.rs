// src/health/memory.rs

const USED_MEMORY_KEY: &str = "used_memory";

/// Extract `used_memory` (bytes) from the text of `INFO memory`.
///
/// The payload is a `\r\n` separated block of `key:value` lines headed by
/// `# Memory`. Redis puts `used_memory` on the second line, but the key is
/// matched on any line rather than by position. Returns `None` when the
/// field is missing or not a base-10 integer.
pub fn parse_used_memory(info: &str) -> Option<u64> {
    info.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(key, _)| *key == USED_MEMORY_KEY)
        .and_then(|(_, value)| value.trim().parse().ok())
}
