/*!
 * Trace Formatting
 *
 * Pure helpers for the stdout trace. Every call returns a fresh value;
 * there is no shared display buffer to race on.
 */

use crate::core::limits::{MAX_WORKERS, TRACE_INDENT};
use crate::core::types::WorkerId;

/// Ordinal ranks for worker identities; index 0 unused
const ORDER: [&str; MAX_WORKERS + 1] = [
    "", "first", "second", "third", "fourth", "fifth", "sixth", "seventh",
];

/// Human-readable rank for an identity ("first".."seventh")
///
/// Identities are bounded by [`MAX_WORKERS`], which the table covers.
pub fn ordinal(identity: WorkerId) -> &'static str {
    ORDER[identity]
}

/// Space-separated rendering of region cells
pub fn render(cells: &[i32]) -> String {
    cells
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trace prefix for a worker, indented by its identity
pub fn worker_prefix(identity: WorkerId) -> String {
    format!(
        "{:indent$}Worker {identity}:",
        "",
        indent = TRACE_INDENT * identity
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ordinals_cover_every_identity() {
        assert_eq!(ordinal(1), "first");
        assert_eq!(ordinal(7), "seventh");
        assert_eq!(ORDER.len(), crate::core::limits::MAX_WORKERS + 1);
    }

    #[test]
    fn render_joins_cells_with_spaces() {
        assert_eq!(render(&[3, 10]), "3 10");
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn worker_prefix_indents_by_identity() {
        assert_eq!(worker_prefix(1), "  Worker 1:");
        assert_eq!(worker_prefix(3), "      Worker 3:");
    }
}
