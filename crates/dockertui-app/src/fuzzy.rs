//! Fuzzy string matching for the list filter.
//!
//! A query matches when its characters appear in the target in order,
//! ignoring case. Matching items keep their list order.

/// Indices of `values` that match `query`, in their original order.
///
/// An empty query matches everything.
pub fn filter_indices<'a, I>(query: &str, values: I) -> Vec<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let query_chars: Vec<char> = query.to_lowercase().chars().collect();
    values
        .into_iter()
        .enumerate()
        .filter(|(_, value)| is_subsequence(&query_chars, &value.to_lowercase()))
        .map(|(index, _)| index)
        .collect()
}

fn is_subsequence(query: &[char], target: &str) -> bool {
    let mut remaining = query.iter().peekable();
    for c in target.chars() {
        match remaining.peek() {
            Some(&&q) if q == c => {
                remaining.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    remaining.peek().is_none()
}
