use super::grade::BLOG_GRADES;
use super::ScoreSheet;
use crate::text::{self, InternalLinkMatcher};
use crate::types::scoring::{ScoreResult, Severity};
use crate::types::snapshot::{present, BlogPost, ImageSeoMetadata};
use serde::Serialize;
use tracing::debug;

const LEAD_WORDS: usize = 150;
const WORDS_PER_MINUTE: f64 = 200.0;

/// Read port for the SEO metadata of a post's featured image.
pub trait ImageSeoLookup {
    fn lookup_image_seo(&self, image: &str) -> Option<ImageSeoMetadata>;
}

impl<F> ImageSeoLookup for F
where
    F: Fn(&str) -> Option<ImageSeoMetadata>,
{
    fn lookup_image_seo(&self, image: &str) -> Option<ImageSeoMetadata> {
        self(image)
    }
}

/// Lookup that never finds an image.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImages;

impl ImageSeoLookup for NoImages {
    fn lookup_image_seo(&self, _image: &str) -> Option<ImageSeoMetadata> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadingMetrics {
    pub word_count: usize,
    pub reading_time_minutes: usize,
}

pub fn reading_metrics(content: Option<&str>) -> ReadingMetrics {
    let word_count = content
        .map(|html| text::word_count(&text::strip_html(html)))
        .unwrap_or(0);
    let minutes = (word_count as f64 / WORDS_PER_MINUTE).round_ties_even() as usize;
    ReadingMetrics {
        word_count,
        reading_time_minutes: minutes.max(1),
    }
}

/// Scores an article: title (20), meta description (15), focus keyword (25),
/// content length (15), featured image (10), internal links (10) and
/// structure (5).
#[derive(Debug, Clone)]
pub struct BlogScorer {
    links: InternalLinkMatcher,
}

impl BlogScorer {
    pub fn new(site_hosts: &[String]) -> Self {
        Self {
            links: InternalLinkMatcher::new(site_hosts),
        }
    }

    pub fn score(&self, post: &BlogPost, images: &dyn ImageSeoLookup) -> ScoreResult {
        let mut sheet = ScoreSheet::default();
        let keyword = post
            .focus_keyword
            .as_deref()
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty());
        let content = present(post.content.as_ref());
        let plain = content.map(text::strip_html).unwrap_or_default();

        title(&mut sheet, post, keyword);
        meta_description(&mut sheet, post, keyword);
        match keyword {
            Some(keyword) => focus_keyword(&mut sheet, keyword, content.unwrap_or(""), &plain),
            None => {
                sheet
                    .issue("No focus keyword")
                    .recommend("Choose a focus keyword to optimise the post for")
                    .check(Severity::Danger, "No focus keyword set");
            }
        }
        content_length(&mut sheet, content.map(|_| text::word_count(&plain)));
        featured_image(&mut sheet, post, keyword, images);
        if let Some(html) = content {
            self.internal_links(&mut sheet, html);
            structure(&mut sheet, html);
        }

        let result = sheet.finish(&BLOG_GRADES);
        debug!(
            post = %post.display_name(),
            score = result.score,
            grade = %result.grade,
            "blog post scored"
        );
        result
    }

    fn internal_links(&self, sheet: &mut ScoreSheet, html: &str) {
        let links = text::count_internal_links(html, &self.links);
        match links {
            3.. => {
                sheet
                    .award(10)
                    .check(Severity::Success, format!("{links} internal links"));
            }
            2 => {
                sheet
                    .award(7)
                    .check(
                        Severity::Info,
                        "2 internal links (3 or more recommended)",
                    )
                    .recommend("Add one or two more internal links");
            }
            1 => {
                sheet
                    .award(4)
                    .check(Severity::Warning, "Only 1 internal link")
                    .recommend("Add at least 2-3 links to related posts or products");
            }
            0 => {
                sheet
                    .issue("No internal links")
                    .recommend("Add 2-3 internal links to related posts or products")
                    .check(Severity::Danger, "No internal links");
            }
        }
    }
}

fn title(sheet: &mut ScoreSheet, post: &BlogPost, keyword: Option<&str>) {
    let Some(title) = present(post.title.as_ref()) else {
        sheet
            .issue("Missing title")
            .check(Severity::Danger, "Missing title");
        return;
    };

    let title_len = title.chars().count();
    match title_len {
        30..=60 => {
            sheet
                .award(10)
                .check(Severity::Success, format!("Title is optimal ({title_len} chars)"));
        }
        20..=29 => {
            sheet
                .award(7)
                .check(
                    Severity::Info,
                    format!("Title is a little short ({title_len}/30 chars)"),
                )
                .recommend("Expand the title to 30-60 characters");
        }
        61..=70 => {
            sheet
                .award(7)
                .check(
                    Severity::Warning,
                    format!("Title is a little long ({title_len}/60 chars)"),
                )
                .recommend("Shorten the title to 30-60 characters");
        }
        _ => {
            sheet
                .award(3)
                .issue("Title is too short or too long")
                .check(
                    Severity::Danger,
                    format!("Title is not optimised ({title_len} chars)"),
                )
                .recommend("Keep the title within 30-60 characters so search results show it in full");
        }
    }

    let Some(keyword) = keyword else {
        return;
    };
    if title.to_lowercase().contains(&keyword.to_lowercase()) {
        sheet.award(10).check(
            Severity::Success,
            format!("Keyword \"{keyword}\" appears in the title"),
        );
    } else {
        sheet
            .recommend(format!("Add the keyword \"{keyword}\" to the title"))
            .check(Severity::Danger, "Keyword missing from the title");
    }
}

fn meta_description(sheet: &mut ScoreSheet, post: &BlogPost, keyword: Option<&str>) {
    let Some(description) = present(post.meta_description.as_ref()) else {
        sheet
            .issue("Missing meta description")
            .recommend("Add a meta description of 120-160 characters")
            .check(Severity::Danger, "Missing meta description");
        return;
    };

    let desc_len = description.chars().count();
    match desc_len {
        120..=160 => {
            sheet.award(10).check(
                Severity::Success,
                format!("Meta description is optimal ({desc_len} chars)"),
            );
        }
        100..=119 => {
            sheet.award(7).check(
                Severity::Info,
                format!("Meta description is a little short ({desc_len}/120 chars)"),
            );
        }
        161..=180 => {
            sheet.award(7).check(
                Severity::Warning,
                format!("Meta description is a little long ({desc_len}/160 chars)"),
            );
        }
        _ => {
            sheet
                .award(3)
                .issue("Meta description is not optimised")
                .check(
                    Severity::Warning,
                    format!("Meta description has {desc_len} chars"),
                )
                .recommend("Keep the meta description within 120-160 characters");
        }
    }

    let Some(keyword) = keyword else {
        return;
    };
    if description
        .to_lowercase()
        .contains(&keyword.to_lowercase())
    {
        sheet
            .award(5)
            .check(Severity::Success, "Keyword appears in the meta description");
    } else {
        sheet
            .recommend("Add the keyword to the meta description")
            .check(
                Severity::Info,
                "Consider adding the keyword to the meta description",
            );
    }
}

fn focus_keyword(sheet: &mut ScoreSheet, keyword: &str, html: &str, plain: &str) {
    let keyword = keyword.to_lowercase();
    let plain = plain.to_lowercase();

    let occurrences = text::count_occurrences(&plain, &keyword);
    let words = text::word_count(&plain);
    let density = (words > 0).then(|| occurrences as f64 / words as f64 * 100.0);

    match density {
        Some(density) if (0.5..=2.5).contains(&density) => {
            sheet.award(10).check(
                Severity::Success,
                format!("Keyword density is optimal: {density:.1}% ({occurrences} occurrences)"),
            );
        }
        Some(density) if (0.1..0.5).contains(&density) => {
            sheet
                .award(6)
                .check(
                    Severity::Info,
                    format!("Keyword density is low: {density:.1}% ({occurrences} occurrences)"),
                )
                .recommend(format!(
                    "Use the keyword \"{keyword}\" more often (current density {density:.1}%)"
                ));
        }
        Some(density) if density > 2.5 => {
            sheet
                .award(4)
                .check(
                    Severity::Warning,
                    format!("Keyword density is high: {density:.1}% (risk of keyword stuffing)"),
                )
                .recommend(format!(
                    "Reduce keyword density to 0.5-2.5% (currently {density:.1}%)"
                ));
        }
        _ => {
            sheet
                .issue("Keyword appears too rarely")
                .check(
                    Severity::Danger,
                    format!("Keyword appears only {occurrences} time(s)"),
                )
                .recommend(format!(
                    "Add the keyword \"{keyword}\" to the content (at least 3-5 times)"
                ));
        }
    }

    if text::leading_words(&plain, LEAD_WORDS).contains(&keyword) {
        sheet.award(8).check(
            Severity::Success,
            format!("Keyword appears in the first {LEAD_WORDS} words"),
        );
    } else {
        sheet
            .issue("Keyword missing from the opening")
            .recommend("Use the keyword in the opening paragraph")
            .check(Severity::Danger, "Keyword missing from the opening paragraph");
    }

    let headings = text::find_headings(html, 2..=3)
        .into_iter()
        .map(|heading| heading.to_lowercase())
        .collect::<Vec<_>>();
    if headings.iter().any(|heading| heading.contains(&keyword)) {
        sheet
            .award(7)
            .check(Severity::Success, "Keyword appears in an H2/H3 subheading");
    } else if !headings.is_empty() {
        sheet
            .recommend("Use the keyword in at least one H2/H3 subheading")
            .check(Severity::Warning, "Keyword missing from the subheadings");
    } else {
        sheet
            .issue("No H2/H3 subheadings")
            .recommend("Add H2/H3 subheadings that contain the keyword")
            .check(Severity::Danger, "No H2/H3 subheadings");
    }
}

fn content_length(sheet: &mut ScoreSheet, words: Option<usize>) {
    let Some(words) = words else {
        sheet
            .issue("Missing content")
            .recommend("Write the article body (at least 500 words)")
            .check(Severity::Danger, "Missing content");
        return;
    };

    match words {
        1000.. => {
            sheet.award(15).check(
                Severity::Success,
                format!("Content is long and detailed ({words} words)"),
            );
        }
        800..=999 => {
            sheet
                .award(13)
                .check(Severity::Success, format!("Content is complete ({words} words)"));
        }
        500..=799 => {
            sheet
                .award(10)
                .check(Severity::Info, format!("Content is fair ({words} words)"))
                .recommend("Expand the content to 800-1000 words");
        }
        300..=499 => {
            sheet
                .award(5)
                .issue("Content is a little short")
                .check(
                    Severity::Warning,
                    format!("Content is a little short ({words} words)"),
                )
                .recommend("Content should have at least 500-800 words");
        }
        _ => {
            sheet
                .issue("Content is too short")
                .check(Severity::Danger, format!("Content is too short ({words} words)"))
                .recommend("Write more content (at least 500 words)");
        }
    }
}

fn featured_image(
    sheet: &mut ScoreSheet,
    post: &BlogPost,
    keyword: Option<&str>,
    images: &dyn ImageSeoLookup,
) {
    let Some(image) = present(post.image.as_ref()) else {
        sheet
            .recommend("Add a featured image to the post")
            .check(Severity::Warning, "No featured image");
        return;
    };

    let alt_text = images
        .lookup_image_seo(image)
        .and_then(|metadata| metadata.alt_text)
        .filter(|alt| !alt.is_empty());
    let Some(alt_text) = alt_text else {
        sheet
            .award(3)
            .recommend("Add alt text to the featured image")
            .check(Severity::Warning, "Featured image has no alt text");
        return;
    };

    match keyword {
        Some(keyword) if alt_text.to_lowercase().contains(&keyword.to_lowercase()) => {
            sheet
                .award(10)
                .check(Severity::Success, "Featured image alt text contains the keyword");
        }
        _ => {
            sheet.award(7).check(
                Severity::Info,
                "Featured image has alt text without the keyword",
            );
            if let Some(keyword) = keyword {
                sheet.recommend(format!(
                    "Add the keyword \"{keyword}\" to the featured image alt text"
                ));
            }
        }
    }
}

fn structure(sheet: &mut ScoreSheet, html: &str) {
    let headings = text::count_headings(html);
    match headings {
        3.. => {
            sheet
                .award(3)
                .check(Severity::Success, format!("{headings} subheadings (H2-H6)"));
        }
        1..=2 => {
            sheet
                .award(2)
                .recommend("Add more H2/H3 subheadings to improve structure")
                .check(
                    Severity::Info,
                    format!("{headings} subheading(s) (3 or more recommended)"),
                );
        }
        0 => {
            sheet
                .recommend("Add H2/H3 subheadings to break up the content")
                .check(Severity::Warning, "No subheadings");
        }
    }

    let paragraphs = text::count_paragraphs(html);
    match paragraphs {
        5.. => {
            sheet.award(2).check(
                Severity::Success,
                format!("Content is split into {paragraphs} paragraphs"),
            );
        }
        3..=4 => {
            sheet
                .award(1)
                .check(Severity::Info, format!("{paragraphs} paragraphs"));
        }
        _ => {}
    }
}
