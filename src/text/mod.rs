//! Text metrics shared by the scorers. Every function is total: absent or
//! empty input yields zero or an empty collection.

use regex::{Regex, RegexBuilder};
use scraper::{Html, Selector};
use std::ops::RangeInclusive;
use std::sync::OnceLock;

/// Character count, 0 when absent.
pub fn char_len(text: Option<&str>) -> usize {
    text.map(|value| value.chars().count()).unwrap_or(0)
}

/// Drops tag markup and decodes entities.
pub fn strip_html(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    Html::parse_fragment(html).root_element().text().collect()
}

pub fn word_count(plain: &str) -> usize {
    plain.split_whitespace().count()
}

/// Non-overlapping occurrences; callers lowercase both sides.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// The first `limit` whitespace-separated words joined by single spaces.
pub fn leading_words(plain: &str, limit: usize) -> String {
    plain
        .split_whitespace()
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inner text of every heading whose level is in `levels`, in document order.
pub fn find_headings(html: &str, levels: RangeInclusive<u8>) -> Vec<String> {
    let tags = levels
        .filter(|level| (1..=6).contains(level))
        .map(|level| format!("h{level}"))
        .collect::<Vec<_>>();
    if html.is_empty() || tags.is_empty() {
        return Vec::new();
    }
    let Ok(selector) = Selector::parse(&tags.join(", ")) else {
        return Vec::new();
    };

    let document = Html::parse_fragment(html);
    document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .collect()
}

/// Number of h2-h6 elements.
pub fn count_headings(html: &str) -> usize {
    find_headings(html, 2..=6).len()
}

pub fn count_paragraphs(html: &str) -> usize {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    if html.is_empty() {
        return 0;
    }
    let selector = SELECTOR.get_or_init(|| Selector::parse("p").expect("valid selector"));
    Html::parse_fragment(html).select(selector).count()
}

/// Recognises hrefs that stay on the site: root-relative paths, or absolute
/// URLs on one of the configured hosts (with or without scheme and `www.`).
#[derive(Debug, Clone)]
pub struct InternalLinkMatcher {
    hosts: Option<Regex>,
}

impl InternalLinkMatcher {
    pub fn new(hosts: &[String]) -> Self {
        let alternatives = hosts
            .iter()
            .map(|host| host.trim().trim_start_matches("www.").to_lowercase())
            .filter(|host| !host.is_empty())
            .map(|host| regex::escape(&host))
            .collect::<Vec<_>>();
        if alternatives.is_empty() {
            return Self { hosts: None };
        }
        let pattern = format!(
            r"^(?:https?://)?(?:www\.)?(?:{})(?:[/:?#]|$)",
            alternatives.join("|")
        );
        let hosts = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .ok();
        Self { hosts }
    }

    pub fn is_internal(&self, href: &str) -> bool {
        let href = href.trim();
        href.starts_with('/')
            || self
                .hosts
                .as_ref()
                .map(|hosts| hosts.is_match(href))
                .unwrap_or(false)
    }
}

pub fn count_internal_links(html: &str, matcher: &InternalLinkMatcher) -> usize {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    if html.is_empty() {
        return 0;
    }
    let selector = SELECTOR.get_or_init(|| Selector::parse("a[href]").expect("valid selector"));
    Html::parse_fragment(html)
        .select(selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| matcher.is_internal(href))
        .count()
}
