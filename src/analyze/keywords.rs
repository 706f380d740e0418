//! Keyword tiers used to grade alt text.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordTiers {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub brand: Vec<String>,
    pub general: Vec<String>,
}

impl Default for KeywordTiers {
    fn default() -> Self {
        Self {
            primary: vec!["máy lọc nước".to_string(), "máy nước nóng".to_string()],
            secondary: vec![
                "lọc nước".to_string(),
                "nước nóng".to_string(),
                "bình nóng lạnh".to_string(),
            ],
            brand: vec!["a.o smith".to_string(), "aosmith".to_string()],
            general: vec![
                "sản phẩm".to_string(),
                "thiết bị".to_string(),
                "dịch vụ".to_string(),
            ],
        }
    }
}

/// Points awarded for each tier outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierWeights {
    pub primary: u32,
    pub secondary_brand: u32,
    pub secondary: u32,
    pub brand: u32,
    pub general: u32,
}

impl TierWeights {
    /// Alt-text keyword share of the media total.
    pub const MAX_PRIMARY: u32 = 20;
}

impl Default for TierWeights {
    fn default() -> Self {
        Self {
            primary: 20,
            secondary_brand: 17,
            secondary: 12,
            brand: 8,
            general: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordMatch {
    Primary(String),
    SecondaryBrand,
    Secondary,
    Brand,
    General,
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTaxonomy {
    tiers: KeywordTiers,
    lowered: KeywordTiers,
    weights: TierWeights,
}

impl Default for KeywordTaxonomy {
    fn default() -> Self {
        Self::new(KeywordTiers::default(), TierWeights::default())
    }
}

impl KeywordTaxonomy {
    pub fn new(tiers: KeywordTiers, weights: TierWeights) -> Self {
        let lower = |terms: &[String]| {
            terms
                .iter()
                .map(|term| term.trim().to_lowercase())
                .filter(|term| !term.is_empty())
                .collect::<Vec<_>>()
        };
        let lowered = KeywordTiers {
            primary: lower(&tiers.primary),
            secondary: lower(&tiers.secondary),
            brand: lower(&tiers.brand),
            general: lower(&tiers.general),
        };
        Self {
            tiers,
            lowered,
            weights,
        }
    }

    /// Classifies `text` against the tiers, highest precedence first.
    pub fn classify(&self, text: &str) -> KeywordMatch {
        let lower = text.to_lowercase();
        let contains_any = |terms: &[String]| terms.iter().any(|term| lower.contains(term));

        if let Some(index) = self
            .lowered
            .primary
            .iter()
            .position(|term| lower.contains(term))
        {
            return KeywordMatch::Primary(self.lowered.primary[index].clone());
        }

        let has_secondary = contains_any(&self.lowered.secondary);
        let has_brand = contains_any(&self.lowered.brand);
        match (has_secondary, has_brand) {
            (true, true) => KeywordMatch::SecondaryBrand,
            (true, false) => KeywordMatch::Secondary,
            (false, true) => KeywordMatch::Brand,
            (false, false) if contains_any(&self.lowered.general) => KeywordMatch::General,
            (false, false) => KeywordMatch::Nothing,
        }
    }

    pub fn points(&self, matched: &KeywordMatch) -> u32 {
        match matched {
            KeywordMatch::Primary(_) => self.weights.primary,
            KeywordMatch::SecondaryBrand => self.weights.secondary_brand,
            KeywordMatch::Secondary => self.weights.secondary,
            KeywordMatch::Brand => self.weights.brand,
            KeywordMatch::General => self.weights.general,
            KeywordMatch::Nothing => 0,
        }
    }

    /// First two primary terms, as configured.
    pub fn suggestions(&self) -> Vec<&str> {
        self.tiers
            .primary
            .iter()
            .take(2)
            .map(String::as_str)
            .collect()
    }

    pub fn first_brand(&self) -> Option<&str> {
        self.tiers.brand.first().map(String::as_str)
    }
}
