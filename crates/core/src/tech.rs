//! Conversion between the free-text tech field and the stored tag list.

/// Split comma-separated input into trimmed tags, dropping empty segments.
///
/// ```
/// use folio_core::tech::split_tech;
///
/// assert_eq!(split_tech("Rust, axum ,sqlx"), vec!["Rust", "axum", "sqlx"]);
/// assert!(split_tech("  ").is_empty());
/// ```
pub fn split_tech(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join tags back into the form's comma-separated text.
pub fn join_tech(tags: &[String]) -> String {
    tags.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_order() {
        assert_eq!(split_tech("HTML,CSS,Postgres"), vec!["HTML", "CSS", "Postgres"]);
    }

    #[test]
    fn drops_empty_segments() {
        assert_eq!(split_tech("Java,, ,"), vec!["Java"]);
    }

    #[test]
    fn empty_input_gives_no_tags() {
        assert!(split_tech("").is_empty());
    }

    #[test]
    fn join_then_split_is_stable() {
        let tags = vec!["React".to_string(), "Node.js".to_string()];
        assert_eq!(join_tech(&tags), "React, Node.js");
        assert_eq!(split_tech(&join_tech(&tags)), tags);
    }
}
