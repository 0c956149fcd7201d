//! Request path synthesis.

/// Endpoint every search path ends with.
pub const SEARCH_ENDPOINT: &str = "_search";

/// Placeholder index used when only types are given.
pub const ALL_INDICES: &str = "_all";

/// Builds the search path for the given indices and types.
///
/// | indices | types | path |
/// |---------|-------|------|
/// | none | none | `/_search` |
/// | none | `t1,t2` | `_all/t1,t2/_search` |
/// | `a,b` | none | `a,b/_search` |
/// | `a` | `t1,t2` | `a/t1,t2/_search` |
///
/// Names are joined with `,` in the order given, duplicates included.
///
/// ```
/// use trawl_search::path::build;
///
/// assert_eq!(build::<&str>(&[], &[]), "/_search");
/// assert_eq!(build(&["a", "b"], &[]), "a,b/_search");
/// assert_eq!(build(&[], &["t1", "t2"]), "_all/t1,t2/_search");
/// assert_eq!(build(&["a"], &["t1", "t2"]), "a/t1,t2/_search");
/// ```
pub fn build<S: AsRef<str>>(indices: &[S], types: &[S]) -> String {
    let mut path = String::new();

    if indices.is_empty() {
        if !types.is_empty() {
            path.push_str(ALL_INDICES);
        }
    } else {
        path.push_str(&join(indices));
    }

    if !types.is_empty() {
        path.push('/');
        path.push_str(&join(types));
    }

    path.push('/');
    path.push_str(SEARCH_ENDPOINT);
    path
}

fn join<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(",")
}
