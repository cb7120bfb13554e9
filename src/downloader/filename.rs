use url::Url;

const FALLBACK_STEM: &str = "downloaded_image";
const FALLBACK_EXTENSION: &str = "jpg";

/// Picks the name a fetched image is saved under.
///
/// Uses the last segment of the URL path when it contains a `.`; otherwise
/// `downloaded_image.<subtype>` built from the declared media type, or
/// `downloaded_image.jpg` when there is no subtype to use. Names are not
/// de-duplicated, so two URLs resolving to the same name overwrite each other.
pub fn resolve_filename(url: &Url, content_type: Option<&str>) -> String {
    basename(url).unwrap_or_else(|| {
        format!(
            "{}.{}",
            FALLBACK_STEM,
            extension_from_content_type(content_type)
        )
    })
}

fn basename(url: &Url) -> Option<String> {
    let segment = url.path().rsplit('/').next()?;

    // "." and ".." would point at the fetch directory or its parent.
    if segment == "." || segment == ".." || !segment.contains('.') {
        return None;
    }

    Some(segment.to_string())
}

fn extension_from_content_type(content_type: Option<&str>) -> &str {
    content_type
        .unwrap_or_default()
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .split_once('/')
        .map(|(_, subtype)| subtype.trim())
        .filter(|subtype| !subtype.is_empty())
        .unwrap_or(FALLBACK_EXTENSION)
}
