use serde::{Deserialize, Serialize};

/// Path segment that asks the media host for the thumbnail rendition
pub const THUMBNAIL_TOKEN: &str = "t_media_lib_thumb";

/// Index, among the path segments after the host, the thumbnail token is inserted at
const THUMBNAIL_SEGMENT_INDEX: usize = 6;

/// Insertion index for shorter paths: right after the transformation slot of
/// "<cloud>/image/upload/", ahead of the version segment
const SHORT_PATH_SEGMENT_INDEX: usize = 3;

/// Unsigned-upload settings for the hosted media endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaSettings {
    pub cloud_name: String,
    pub upload_preset: String,
    pub tag: String,
}

impl Default for MediaSettings {
    fn default() -> Self {
        Self {
            cloud_name: "hbgnmifwf".to_string(),
            upload_preset: "testing_preset".to_string(),
            tag: "browser_upload".to_string(),
        }
    }
}

impl MediaSettings {
    pub fn upload_url(&self) -> String {
        format!("https://api.cloudinary.com/v1_1/{}/upload", self.cloud_name)
    }
}

/// Successful upload response; only the delivery URL is used
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub secure_url: String,
}

/// Thumbnail rendition of a hosted image URL.
///
/// Paths with at least seven segments get the token as path segment 6 (counted after
/// the host). Shorter delivery paths ("<cloud>/image/upload/v<n>/<id>") get it right
/// after `upload`, where the media host expects a named transformation.
pub fn thumbnail_url(url: &str) -> String {
    let (origin, path) = split_origin(url);
    if path.is_empty() {
        return format!("{}/{}", url.trim_end_matches('/'), THUMBNAIL_TOKEN);
    }
    let mut segments: Vec<&str> = path.split('/').collect();
    let index = if segments.len() > THUMBNAIL_SEGMENT_INDEX {
        THUMBNAIL_SEGMENT_INDEX
    } else {
        SHORT_PATH_SEGMENT_INDEX.min(segments.len())
    };
    segments.insert(index, THUMBNAIL_TOKEN);
    format!("{}{}", origin, segments.join("/"))
}

/// Split "https://host/a/b" into ("https://host/", "a/b")
fn split_origin(url: &str) -> (&str, &str) {
    let authority_start = url.find("://").map(|i| i + 3).unwrap_or(0);
    if authority_start == 0 {
        return ("", url);
    }
    match url[authority_start..].find('/') {
        Some(slash) => url.split_at(authority_start + slash + 1),
        None => (url, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_url() {
        assert_eq!(
            thumbnail_url("https://host/a/b/c/d/e/f/file.jpg"),
            "https://host/a/b/c/d/e/f/t_media_lib_thumb/file.jpg"
        );
        assert_eq!(
            thumbnail_url("https://host/a/b/c/d/e/f/g/file.jpg"),
            "https://host/a/b/c/d/e/f/t_media_lib_thumb/g/file.jpg"
        );
    }

    #[test]
    fn test_thumbnail_url_short_path() {
        assert_eq!(
            thumbnail_url("https://res.cloudinary.com/demo/image/upload/sample.jpg"),
            "https://res.cloudinary.com/demo/image/upload/t_media_lib_thumb/sample.jpg"
        );
        assert_eq!(thumbnail_url("https://host"), "https://host/t_media_lib_thumb");
        assert_eq!(thumbnail_url("https://host/a.jpg"), "https://host/a.jpg/t_media_lib_thumb");
    }

    #[test]
    fn test_thumbnail_url_versioned_delivery_url() {
        assert_eq!(
            thumbnail_url("https://res.cloudinary.com/hbgnmifwf/image/upload/v1507000000/abc123.jpg"),
            "https://res.cloudinary.com/hbgnmifwf/image/upload/t_media_lib_thumb/v1507000000/abc123.jpg"
        );
        assert_eq!(
            thumbnail_url("https://res.cloudinary.com/hbgnmifwf/image/upload/v1507000000/shelf/abc123.jpg"),
            "https://res.cloudinary.com/hbgnmifwf/image/upload/t_media_lib_thumb/v1507000000/shelf/abc123.jpg"
        );
    }

    #[test]
    fn test_upload_url_uses_cloud_name() {
        let settings = MediaSettings {
            cloud_name: "demo".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.upload_url(), "https://api.cloudinary.com/v1_1/demo/upload");
    }

    #[test]
    fn test_upload_response_ignores_extra_fields() {
        let resp: UploadResponse = serde_json::from_str(
            r#"{"public_id": "abc", "secure_url": "https://host/x.jpg", "bytes": 10}"#,
        )
        .unwrap();
        assert_eq!(resp.secure_url, "https://host/x.jpg");
    }
}
