use super::grade::MEDIA_GRADES;
use super::keywords::{KeywordMatch, KeywordTaxonomy};
use super::ScoreSheet;
use crate::text;
use crate::types::scoring::{ScoreResult, Severity};
use crate::types::snapshot::{present, MediaAsset};
use tracing::debug;

/// Scores image metadata: alt text (50), title (15), caption (15), album (10),
/// dimensions (10) and file size (10).
#[derive(Debug, Clone, Default)]
pub struct MediaScorer {
    taxonomy: KeywordTaxonomy,
}

impl MediaScorer {
    pub fn new(taxonomy: KeywordTaxonomy) -> Self {
        Self { taxonomy }
    }

    pub fn score(&self, asset: &MediaAsset) -> ScoreResult {
        let mut sheet = ScoreSheet::default();

        self.alt_text(&mut sheet, asset);
        title(&mut sheet, asset);
        caption(&mut sheet, asset);
        album(&mut sheet, asset);
        dimensions(&mut sheet, asset);
        file_size(&mut sheet, asset);

        let result = sheet.finish(&MEDIA_GRADES);
        debug!(
            media = %asset.display_name(),
            score = result.score,
            grade = %result.grade,
            "media scored"
        );
        result
    }

    fn alt_text(&self, sheet: &mut ScoreSheet, asset: &MediaAsset) {
        let Some(alt) = present(asset.alt_text.as_ref()) else {
            sheet
                .issue("Missing alt text")
                .check(Severity::Danger, "Missing alt text");
            return;
        };

        let alt_len = alt.chars().count();
        match alt_len {
            30..=125 => sheet
                .award(30)
                .check(Severity::Success, format!("Alt text is optimal ({alt_len} chars)")),
            10..=29 => sheet.award(15).check(
                Severity::Warning,
                format!("Alt text is a little short ({alt_len} chars)"),
            ),
            _ => sheet.award(5).check(
                Severity::Danger,
                format!("Alt text is not optimised ({alt_len} chars)"),
            ),
        };

        let matched = self.taxonomy.classify(alt);
        sheet.award(self.taxonomy.points(&matched));
        match matched {
            KeywordMatch::Primary(keyword) => {
                sheet.check(
                    Severity::Success,
                    format!("Contains primary keyword \"{keyword}\""),
                );
            }
            KeywordMatch::SecondaryBrand => {
                sheet.check(Severity::Success, "Contains a secondary keyword and the brand");
            }
            KeywordMatch::Secondary => {
                let advice = match self.taxonomy.first_brand() {
                    Some(brand) => format!("Add \"{brand}\" to raise the score"),
                    None => "Add the brand name to raise the score".to_string(),
                };
                sheet
                    .check(
                        Severity::Info,
                        "Contains a secondary keyword (consider adding the brand)",
                    )
                    .recommend(advice);
            }
            KeywordMatch::Brand => {
                sheet
                    .check(Severity::Warning, "Only the brand is mentioned")
                    .recommend("Add a keyword describing the product");
            }
            KeywordMatch::General => {
                sheet.check(Severity::Warning, "Only general keywords found");
            }
            KeywordMatch::Nothing => {
                sheet
                    .check(Severity::Danger, "No keywords found")
                    .recommend(format!(
                        "Add keywords such as: {}",
                        self.taxonomy.suggestions().join(", ")
                    ));
            }
        }
    }
}

fn title(sheet: &mut ScoreSheet, asset: &MediaAsset) {
    let title = present(asset.title.as_ref());
    match (title, text::char_len(title)) {
        (None, _) => {
            sheet
                .recommend("Add a title attribute (shown on hover)")
                .check(Severity::Warning, "Consider adding a title attribute");
        }
        (Some(_), title_len @ 20..=100) => {
            sheet.award(15).check(
                Severity::Success,
                format!("Title is optimal ({title_len} chars)"),
            );
        }
        (Some(_), title_len) => {
            sheet.award(10).check(
                Severity::Info,
                format!("Title present but length is not optimal ({title_len} chars)"),
            );
        }
    }
}

fn caption(sheet: &mut ScoreSheet, asset: &MediaAsset) {
    let caption_len = present(asset.caption.as_ref())
        .map(|caption| caption.chars().count())
        .filter(|len| *len > 20);
    match caption_len {
        Some(caption_len @ 50..) => {
            sheet.award(15).check(
                Severity::Success,
                format!("Caption is descriptive ({caption_len} chars)"),
            );
        }
        Some(caption_len) => {
            sheet.award(10).check(
                Severity::Info,
                format!("Caption is a little short ({caption_len} chars)"),
            );
        }
        None => {
            sheet
                .recommend("Add a caption of at least 50 characters to describe the image")
                .check(Severity::Warning, "Consider adding a descriptive caption");
        }
    }
}

fn album(sheet: &mut ScoreSheet, asset: &MediaAsset) {
    match present(asset.album.as_ref()) {
        Some(album) => {
            sheet
                .award(10)
                .check(Severity::Success, format!("Filed under album \"{album}\""));
        }
        None => {
            sheet
                .recommend("File the image under an album to keep the library organised")
                .check(Severity::Warning, "Consider filing the image under an album");
        }
    }
}

fn dimensions(sheet: &mut ScoreSheet, asset: &MediaAsset) {
    // Partially known dimensions leave no checklist entry.
    let (Some(width), Some(height)) = (
        asset.width.filter(|w| *w > 0),
        asset.height.filter(|h| *h > 0),
    ) else {
        return;
    };

    if width <= 1920 && height <= 1200 {
        sheet.award(10).check(
            Severity::Success,
            format!("Dimensions are suitable ({width}×{height}px)"),
        );
    } else if width <= 2560 && height <= 1600 {
        sheet
            .award(7)
            .recommend("Resize the image to at most 1920px wide to speed up loading")
            .check(
                Severity::Info,
                format!("Image is slightly large ({width}×{height}px)"),
            );
    } else {
        sheet
            .award(3)
            .issue("Image dimensions are too large")
            .recommend(format!(
                "Resize the image to at most 1920×1200px (currently {width}×{height}px)"
            ))
            .check(
                Severity::Danger,
                format!("Image is too large ({width}×{height}px)"),
            );
    }
}

fn file_size(sheet: &mut ScoreSheet, asset: &MediaAsset) {
    let Some(size_mb) = asset.size_mb().filter(|mb| *mb > 0.0) else {
        return;
    };

    if size_mb <= 0.2 {
        sheet.award(10).check(
            Severity::Success,
            format!("File size is optimal ({size_mb:.2} MB)"),
        );
    } else if size_mb <= 0.5 {
        sheet
            .award(8)
            .check(Severity::Success, format!("File size is good ({size_mb:.2} MB)"));
    } else if size_mb <= 1.0 {
        sheet
            .award(5)
            .recommend(format!(
                "Compress the image below 0.5 MB (currently {size_mb:.2} MB)"
            ))
            .check(
                Severity::Info,
                format!("File size is acceptable ({size_mb:.2} MB)"),
            );
    } else if size_mb <= 2.0 {
        sheet
            .award(2)
            .issue("File is somewhat heavy")
            .recommend(format!(
                "Compress the image below 1 MB (currently {size_mb:.2} MB)"
            ))
            .check(
                Severity::Warning,
                format!("File is somewhat heavy ({size_mb:.2} MB)"),
            );
    } else {
        sheet
            .issue("File is too heavy")
            .recommend(format!(
                "Compress the image below 1 MB immediately (currently {size_mb:.2} MB)"
            ))
            .check(
                Severity::Danger,
                format!("File is too heavy ({size_mb:.2} MB)"),
            );
    }
}
