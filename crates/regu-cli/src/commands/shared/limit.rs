/// Pick the limit for a list command: subcommand flag, then the global
/// `--limit`, then the configured default. Zero is raised to one.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback).max(1)
}
