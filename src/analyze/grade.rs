use crate::types::scoring::{Grade, Score};

/// Minimum score for each grade from A+ down to D; anything lower is F.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeTable {
    bands: [(Score, Grade); 6],
}

impl GradeTable {
    const fn new(minimums: [Score; 6]) -> Self {
        Self {
            bands: [
                (minimums[0], Grade::APlus),
                (minimums[1], Grade::A),
                (minimums[2], Grade::BPlus),
                (minimums[3], Grade::B),
                (minimums[4], Grade::C),
                (minimums[5], Grade::D),
            ],
        }
    }

    pub fn grade_for(&self, score: Score) -> Grade {
        self.bands
            .iter()
            .find(|(minimum, _)| score >= *minimum)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::F)
    }
}

pub const MEDIA_GRADES: GradeTable = GradeTable::new([90, 80, 70, 60, 50, 40]);
pub const BLOG_GRADES: GradeTable = GradeTable::new([90, 85, 75, 65, 55, 45]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::Severity;

    #[test]
    fn media_boundaries() {
        assert_eq!(MEDIA_GRADES.grade_for(100), Grade::APlus);
        assert_eq!(MEDIA_GRADES.grade_for(90), Grade::APlus);
        assert_eq!(MEDIA_GRADES.grade_for(89), Grade::A);
        assert_eq!(MEDIA_GRADES.grade_for(80), Grade::A);
        assert_eq!(MEDIA_GRADES.grade_for(70), Grade::BPlus);
        assert_eq!(MEDIA_GRADES.grade_for(60), Grade::B);
        assert_eq!(MEDIA_GRADES.grade_for(50), Grade::C);
        assert_eq!(MEDIA_GRADES.grade_for(40), Grade::D);
        assert_eq!(MEDIA_GRADES.grade_for(39), Grade::F);
        assert_eq!(MEDIA_GRADES.grade_for(0), Grade::F);
    }

    #[test]
    fn blog_boundaries() {
        assert_eq!(BLOG_GRADES.grade_for(90), Grade::APlus);
        assert_eq!(BLOG_GRADES.grade_for(85), Grade::A);
        assert_eq!(BLOG_GRADES.grade_for(84), Grade::BPlus);
        assert_eq!(BLOG_GRADES.grade_for(75), Grade::BPlus);
        assert_eq!(BLOG_GRADES.grade_for(65), Grade::B);
        assert_eq!(BLOG_GRADES.grade_for(55), Grade::C);
        assert_eq!(BLOG_GRADES.grade_for(45), Grade::D);
        assert_eq!(BLOG_GRADES.grade_for(44), Grade::F);
    }

    #[test]
    fn tables_stay_distinct() {
        assert_eq!(MEDIA_GRADES.grade_for(80), Grade::A);
        assert_eq!(BLOG_GRADES.grade_for(80), Grade::BPlus);
    }

    #[test]
    fn grade_classes() {
        assert_eq!(Grade::APlus.class(), Severity::Success);
        assert_eq!(Grade::B.class(), Severity::Info);
        assert_eq!(Grade::D.class(), Severity::Warning);
        assert_eq!(Grade::F.class(), Severity::Danger);
    }
}
