// Image format and name inference from source references

/// Path portion of a source reference, without query string or fragment
fn source_path(src: &str) -> &str {
    let end = src.find(['?', '#']).unwrap_or(src.len());
    &src[..end]
}

/// Last path segment of a source reference
fn file_name(src: &str) -> &str {
    let path = source_path(src);
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Subtype of a `data:` URI media type (`image/svg+xml` gives `svg`)
fn data_uri_subtype(src: &str) -> Option<&str> {
    let header = src.strip_prefix("data:")?.split([',', ';']).next()?;
    let (_, subtype) = header.split_once('/')?;
    let subtype = subtype.split('+').next().unwrap_or(subtype);
    (!subtype.is_empty()).then_some(subtype)
}

/// Lowercased file extension of a source reference, if any
///
/// For `data:` URIs the media subtype stands in for the extension.
pub fn extension(src: &str) -> Option<String> {
    if src.starts_with("data:") {
        return data_uri_subtype(src).map(str::to_ascii_lowercase);
    }
    let name = file_name(src);
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Image format name for a source: its extension, with `jpg` spelled `jpeg`
///
/// Sources without an extension fall back to sniffing the fetched bytes.
pub fn image_format(src: &str, data: &[u8]) -> String {
    match extension(src).as_deref() {
        Some("jpg") => "jpeg".to_string(),
        Some(ext) => ext.to_string(),
        None => detect_format(data).unwrap_or("bin").to_string(),
    }
}

/// Display name of an image: the file stem of its source
pub fn image_name(src: &str) -> String {
    if src.starts_with("data:") {
        return "image".to_string();
    }
    let name = file_name(src);
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => name.to_string(),
    }
}

/// Detect a raster format from its magic bytes
pub fn detect_format(data: &[u8]) -> Option<&'static str> {
    if data.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some("png")
    } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("jpeg")
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        Some("gif")
    } else if data.starts_with(b"BM") {
        Some("bmp")
    } else if data.len() >= 12 && &data[..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        Some("webp")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_passthrough() {
        assert_eq!(image_format("img/chart.png", &[]), "png");
        assert_eq!(image_format("photo.JPG", &[]), "jpeg");
        assert_eq!(image_format("https://cdn.test/a/b.gif?v=3#top", &[]), "gif");
        assert_eq!(image_format("diagram.svg", &[]), "svg");
    }

    #[test]
    fn test_missing_extension_sniffs_bytes() {
        assert_eq!(image_format("https://cdn.test/image", b"\x89PNG\r\n\x1a\nrest"), "png");
        assert_eq!(image_format("blob", &[0xFF, 0xD8, 0xFF, 0xE0]), "jpeg");
        assert_eq!(image_format("dir.v2/file", b"????"), "bin");
        assert_eq!(image_format(".hidden", b"GIF89a"), "gif");
    }

    #[test]
    fn test_data_uri_media_type() {
        assert_eq!(image_format("data:image/jpg;base64,AAAA", &[]), "jpeg");
        assert_eq!(image_format("data:image/svg+xml,<svg/>", &[]), "svg");
        assert_eq!(image_format("data:;base64,R0lG", b"GIF87a"), "gif");
        assert_eq!(image_name("data:image/png;base64,AAAA"), "image");
    }

    #[test]
    fn test_image_name() {
        assert_eq!(image_name("/assets/pipe-flow.png"), "pipe-flow");
        assert_eq!(image_name("https://cdn.test/a/b.tar.gz?x=1"), "b.tar");
        assert_eq!(image_name("C:\\images\\plot.jpg"), "plot");
        assert_eq!(image_name("noext"), "noext");
    }
}
