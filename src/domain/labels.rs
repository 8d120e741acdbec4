/// Split the comma-separated PR label argument into labels.
///
/// Segments are trimmed and empty segments dropped, so an empty argument
/// yields no labels at all.
pub fn parse_pr_labels(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}
