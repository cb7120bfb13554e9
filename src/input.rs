use itertools::Itertools;

/// Splits one line of comma-separated URLs, trimming each and dropping empties.
///
/// Order is preserved and repeated URLs are kept.
pub fn parse_url_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(String::from)
        .collect_vec()
}
