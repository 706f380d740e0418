use serde::{Deserialize, Serialize};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Metadata of one image in the media library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAsset {
    pub filepath: Option<String>,
    pub filename: Option<String>,
    pub alt_text: Option<String>,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub album: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub file_size: Option<u64>,
}

impl MediaAsset {
    pub fn size_mb(&self) -> Option<f64> {
        self.file_size.map(|bytes| bytes as f64 / BYTES_PER_MB)
    }

    pub fn seo_metadata(&self) -> ImageSeoMetadata {
        ImageSeoMetadata {
            alt_text: self.alt_text.clone(),
            title: self.title.clone(),
            caption: self.caption.clone(),
        }
    }

    pub fn display_name(&self) -> String {
        self.filename
            .as_deref()
            .or(self.filepath.as_deref())
            .unwrap_or("media")
            .to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub focus_keyword: Option<String>,
    /// Raw HTML body.
    pub content: Option<String>,
    /// Media library filepath of the featured image.
    pub image: Option<String>,
}

impl BlogPost {
    pub fn display_name(&self) -> String {
        self.slug
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or("blog")
            .to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSeoMetadata {
    pub alt_text: Option<String>,
    pub title: Option<String>,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Snapshot {
    Media(MediaAsset),
    Blog(BlogPost),
}

impl Snapshot {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Media(_) => "media",
            Self::Blog(_) => "blog",
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Self::Media(asset) => asset.display_name(),
            Self::Blog(post) => post.display_name(),
        }
    }
}

/// Treats empty strings like absent values.
pub fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_media_snapshot_from_toml() {
        let toml_str = r#"
kind = "media"
filepath = "/static/uploads/banners/hero.jpg"
alt_text = "Hero banner"
width = 1200
height = 800
file_size = 150000
"#;
        let snapshot: Snapshot = toml::from_str(toml_str).expect("media snapshot should parse");
        match snapshot {
            Snapshot::Media(asset) => {
                assert_eq!(asset.width, Some(1200));
                assert_eq!(asset.file_size, Some(150_000));
                assert!(asset.title.is_none());
            }
            Snapshot::Blog(_) => panic!("expected media snapshot"),
        }
    }

    #[test]
    fn parse_blog_snapshot_from_json() {
        let json = r#"{"kind": "blog", "title": "Hello", "focus_keyword": "hello"}"#;
        let snapshot: Snapshot = serde_json::from_str(json).expect("blog snapshot should parse");
        assert_eq!(snapshot.kind(), "blog");
        assert_eq!(snapshot.display_name(), "Hello");
    }

    #[test]
    fn present_filters_empty_strings() {
        let empty = String::new();
        let text = "alt".to_string();
        assert_eq!(present(Some(&empty)), None);
        assert_eq!(present(Some(&text)), Some("alt"));
        assert_eq!(present(None), None);
    }

    #[test]
    fn size_mb_converts_bytes() {
        let asset = MediaAsset {
            file_size: Some(1024 * 1024),
            ..MediaAsset::default()
        };
        assert_eq!(asset.size_mb(), Some(1.0));
    }
}
