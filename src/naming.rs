//! Slugs, SEO-friendly upload names and alt-text validation.

use chrono::{DateTime, Utc};
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::path::Path;
use std::sync::OnceLock;

const MAX_BASE_LEN: usize = 50;
const FALLBACK_BASE: &str = "image";

const ALT_MIN: usize = 10;
const ALT_OPTIMAL_MIN: usize = 30;
const ALT_MAX: usize = 125;

fn fold_vietnamese(c: char) -> char {
    match c {
        'à' | 'á' | 'ạ' | 'ả' | 'ã' | 'â' | 'ầ' | 'ấ' | 'ậ' | 'ẩ' | 'ẫ' | 'ă' | 'ằ' | 'ắ' | 'ặ'
        | 'ẳ' | 'ẵ' => 'a',
        'è' | 'é' | 'ẹ' | 'ẻ' | 'ẽ' | 'ê' | 'ề' | 'ế' | 'ệ' | 'ể' | 'ễ' => 'e',
        'ì' | 'í' | 'ị' | 'ỉ' | 'ĩ' => 'i',
        'ò' | 'ó' | 'ọ' | 'ỏ' | 'õ' | 'ô' | 'ồ' | 'ố' | 'ộ' | 'ổ' | 'ỗ' | 'ơ' | 'ờ' | 'ớ' | 'ợ'
        | 'ở' | 'ỡ' => 'o',
        'ù' | 'ú' | 'ụ' | 'ủ' | 'ũ' | 'ư' | 'ừ' | 'ứ' | 'ự' | 'ử' | 'ữ' => 'u',
        'ỳ' | 'ý' | 'ỵ' | 'ỷ' | 'ỹ' => 'y',
        'đ' => 'd',
        other => other,
    }
}

/// "Máy lọc nước A.O.Smith" becomes "may-loc-nuoc-aosmith".
pub fn slugify(text: &str) -> String {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    let separators =
        SEPARATORS.get_or_init(|| Regex::new(r"[\s-]+").expect("valid separator pattern"));

    let kept = text
        .to_lowercase()
        .chars()
        .map(fold_vietnamese)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect::<String>();
    separators
        .replace_all(&kept, "-")
        .trim_matches('-')
        .to_string()
}

/// Upload name built from the alt text when present, else from the original
/// stem, stamped with `now` to keep names unique.
pub fn seo_filename(original: &str, alt_text: Option<&str>, now: DateTime<Utc>) -> String {
    let path = Path::new(original);
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default();

    let source = alt_text.filter(|alt| !alt.is_empty()).unwrap_or(stem);
    let slug = slugify(source);
    let truncated = slug.chars().take(MAX_BASE_LEN).collect::<String>();
    let base = match truncated.trim_end_matches('-') {
        "" => FALLBACK_BASE,
        base => base,
    };
    format!("{base}-{}{extension}", now.format("%Y%m%d%H%M%S"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AltTextVerdict {
    pub valid: bool,
    pub message: String,
}

impl AltTextVerdict {
    fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    fn valid(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }
}

fn spam_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            r"(ảnh|hình|image|picture|photo)\s*\d+",
            r"click\s+here",
            r"buy\s+now",
        ]
        .iter()
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .expect("valid spam pattern")
        })
        .collect()
    })
}

pub fn validate_alt_text(text: &str) -> AltTextVerdict {
    if text.trim().is_empty() {
        return AltTextVerdict::invalid("Alt text must not be empty");
    }

    let alt_len = text.chars().count();
    if alt_len < ALT_MIN {
        return AltTextVerdict::invalid(format!(
            "Alt text is too short ({alt_len} chars); aim for {ALT_OPTIMAL_MIN}-{ALT_MAX}"
        ));
    }
    if alt_len > ALT_MAX {
        return AltTextVerdict::invalid(format!(
            "Alt text is too long ({alt_len} chars); aim for {ALT_OPTIMAL_MIN}-{ALT_MAX}"
        ));
    }
    if spam_patterns().iter().any(|pattern| pattern.is_match(text)) {
        return AltTextVerdict::invalid("Alt text should not contain spam phrases");
    }

    if alt_len >= ALT_OPTIMAL_MIN {
        AltTextVerdict::valid("Alt text meets SEO guidelines")
    } else {
        AltTextVerdict::valid(format!(
            "Alt text is valid but {ALT_OPTIMAL_MIN}-{ALT_MAX} chars is better (currently {alt_len})"
        ))
    }
}
