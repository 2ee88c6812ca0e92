//! Search-as-you-type suggestions

use ecoscan_common::Suggestion;

use super::catalogue::suggestion_list;

/// Maximum suggestions returned per query
pub const MAX_SUGGESTIONS: usize = 5;

/// Suggestions whose name or brand contains `query`, case-insensitively
///
/// Source order is preserved; at most five entries are returned.
pub fn get_suggestions(query: &str) -> Vec<Suggestion> {
    let query_lower = query.to_lowercase();

    suggestion_list()
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&query_lower)
                || s.brand.to_lowercase().contains(&query_lower)
        })
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}
