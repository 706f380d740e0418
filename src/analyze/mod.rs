pub mod blog;
pub mod grade;
pub mod keywords;
pub mod media;

use crate::types::config::SeoConfig;
use crate::types::scoring::{ChecklistEntry, Score, ScoreResult, Severity, MAX_SCORE};
use crate::types::snapshot::Snapshot;
use blog::{BlogScorer, ImageSeoLookup};
use grade::GradeTable;
use media::MediaScorer;

/// Accumulates points and findings while rules run, in rule order.
#[derive(Debug, Default)]
pub(crate) struct ScoreSheet {
    points: Score,
    issues: Vec<String>,
    recommendations: Vec<String>,
    checklist: Vec<ChecklistEntry>,
}

impl ScoreSheet {
    pub(crate) fn award(&mut self, points: Score) -> &mut Self {
        self.points += points;
        self
    }

    pub(crate) fn check(&mut self, severity: Severity, message: impl Into<String>) -> &mut Self {
        self.checklist.push(ChecklistEntry {
            severity,
            message: message.into(),
        });
        self
    }

    pub(crate) fn issue(&mut self, message: impl Into<String>) -> &mut Self {
        self.issues.push(message.into());
        self
    }

    pub(crate) fn recommend(&mut self, message: impl Into<String>) -> &mut Self {
        self.recommendations.push(message.into());
        self
    }

    pub(crate) fn finish(self, table: &GradeTable) -> ScoreResult {
        let score = self.points.min(MAX_SCORE);
        let grade = table.grade_for(score);
        ScoreResult {
            score,
            grade,
            grade_text: grade.label().to_string(),
            grade_class: grade.class(),
            issues: self.issues,
            recommendations: self.recommendations,
            checklist: self.checklist,
        }
    }
}

/// Both scorers, configured once and shared across entities.
#[derive(Debug, Clone)]
pub struct Scorers {
    pub media: MediaScorer,
    pub blog: BlogScorer,
}

impl Scorers {
    pub fn from_config(config: &SeoConfig) -> Self {
        Self {
            media: MediaScorer::new(config.taxonomy()),
            blog: BlogScorer::new(&config.site_hosts()),
        }
    }

    pub fn score(&self, snapshot: &Snapshot, images: &dyn ImageSeoLookup) -> ScoreResult {
        match snapshot {
            Snapshot::Media(asset) => self.media.score(asset),
            Snapshot::Blog(post) => self.blog.score(post, images),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::blog::NoImages;
    use crate::analyze::grade::MEDIA_GRADES;
    use crate::types::scoring::Grade;
    use crate::types::snapshot::{BlogPost, MediaAsset};

    #[test]
    fn score_sheet_keeps_rule_order_and_caps_total() {
        let mut sheet = ScoreSheet::default();
        sheet.award(70).check(Severity::Success, "first");
        sheet
            .award(50)
            .issue("problem")
            .recommend("fix it")
            .check(Severity::Danger, "second");

        let result = sheet.finish(&MEDIA_GRADES);
        assert_eq!(result.score, 100);
        assert_eq!(result.grade, Grade::APlus);
        assert_eq!(result.grade_text, "Excellent");
        assert_eq!(result.checklist[0].message, "first");
        assert_eq!(result.checklist[1].severity, Severity::Danger);
        assert_eq!(result.issues, vec!["problem"]);
        assert_eq!(result.recommendations, vec!["fix it"]);
    }

    #[test]
    fn scorers_dispatch_on_snapshot_kind() {
        let scorers = Scorers::from_config(&SeoConfig::default());
        let media = scorers.score(&Snapshot::Media(MediaAsset::default()), &NoImages);
        let blog = scorers.score(&Snapshot::Blog(BlogPost::default()), &NoImages);
        assert_eq!(media.score, 0);
        assert_eq!(blog.score, 0);
        assert!(media.issues.iter().any(|issue| issue == "Missing alt text"));
        assert!(blog.issues.iter().any(|issue| issue == "Missing title"));
    }
}
