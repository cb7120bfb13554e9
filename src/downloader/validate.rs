const IMAGE_PREFIX: &str = "image/";

/// Accepts a response only when its declared media type starts with `image/`.
///
/// A missing header counts as the empty string. The body is not inspected.
pub fn is_safe_image(content_type: Option<&str>) -> bool {
    content_type.unwrap_or_default().starts_with(IMAGE_PREFIX)
}

/// Logs when the body's signature disagrees with the declared type. Never rejects.
pub(crate) fn log_sniffed_format(content_type: Option<&str>, body: &[u8]) {
    let declared = content_type
        .and_then(|value| value.split(';').next())
        .map(str::trim);

    match image::guess_format(body) {
        Ok(format) if Some(format.to_mime_type()) != declared => {
            tracing::debug!(
                ?declared,
                sniffed = format.to_mime_type(),
                "declared content type differs from image signature"
            );
        }
        Ok(_) => {}
        Err(_) => {
            tracing::debug!(?declared, "body has no recognised image signature");
        }
    }
}
