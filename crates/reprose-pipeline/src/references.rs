//! Reference citations appended to republished content.

/// Append a numbered reference list to `content`.
///
/// Content is returned unchanged when there are no URLs.
///
/// # Example
///
/// ```
/// use reprose_pipeline::append_references;
///
/// let out = append_references("<p>Body</p>", &["https://a.com", "https://b.com"]);
/// assert_eq!(
///     out,
///     "<p>Body</p>\n\n---\n\n**References:**\n1. https://a.com\n2. https://b.com"
/// );
/// ```
pub fn append_references<S: AsRef<str>>(content: &str, urls: &[S]) -> String {
    if urls.is_empty() {
        return content.to_string();
    }

    let list = urls
        .iter()
        .enumerate()
        .map(|(i, url)| format!("{}. {}", i + 1, url.as_ref()))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{content}\n\n---\n\n**References:**\n{list}")
}
