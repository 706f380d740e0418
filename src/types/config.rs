use crate::analyze::keywords::{KeywordTaxonomy, KeywordTiers, TierWeights};
use crate::error::SeoError;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

pub const DEFAULT_CACHE_MAX_AGE_SECS: u64 = 3600;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeoConfig {
    pub keywords: Option<KeywordsConfig>,
    pub site: Option<SiteConfig>,
    pub cache: Option<CacheConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeywordsConfig {
    pub primary: Option<Vec<String>>,
    pub secondary: Option<Vec<String>>,
    pub brand: Option<Vec<String>>,
    pub general: Option<Vec<String>>,
    pub scores: Option<HashMap<String, u32>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub hosts: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    pub max_age_secs: Option<u64>,
}

impl SeoConfig {
    pub fn default_hosts() -> Vec<String> {
        vec!["aosmith.com.vn".to_string()]
    }

    pub fn tiers(&self) -> KeywordTiers {
        let defaults = KeywordTiers::default();
        match &self.keywords {
            Some(keywords) => KeywordTiers {
                primary: keywords.primary.clone().unwrap_or(defaults.primary),
                secondary: keywords.secondary.clone().unwrap_or(defaults.secondary),
                brand: keywords.brand.clone().unwrap_or(defaults.brand),
                general: keywords.general.clone().unwrap_or(defaults.general),
            },
            None => defaults,
        }
    }

    pub fn weights(&self) -> TierWeights {
        let defaults = TierWeights::default();
        match self
            .keywords
            .as_ref()
            .and_then(|keywords| keywords.scores.as_ref())
        {
            Some(scores) => TierWeights {
                primary: *scores.get("primary").unwrap_or(&defaults.primary),
                secondary_brand: *scores
                    .get("secondary_brand")
                    .unwrap_or(&defaults.secondary_brand),
                secondary: *scores.get("secondary").unwrap_or(&defaults.secondary),
                brand: *scores.get("brand").unwrap_or(&defaults.brand),
                general: *scores.get("general").unwrap_or(&defaults.general),
            },
            None => defaults,
        }
    }

    pub fn taxonomy(&self) -> KeywordTaxonomy {
        KeywordTaxonomy::new(self.tiers(), self.weights())
    }

    pub fn site_hosts(&self) -> Vec<String> {
        match &self.site {
            Some(site) if !site.hosts.is_empty() => site.hosts.clone(),
            _ => Self::default_hosts(),
        }
    }

    pub fn cache_max_age(&self) -> chrono::Duration {
        let secs = self
            .cache
            .as_ref()
            .and_then(|cache| cache.max_age_secs)
            .unwrap_or(DEFAULT_CACHE_MAX_AGE_SECS);
        let secs = i64::try_from(secs).unwrap_or(i64::MAX).min(i64::MAX / 1000);
        chrono::Duration::seconds(secs)
    }

    pub fn validate(&self) -> Result<(), SeoError> {
        if let Some(scores) = self
            .keywords
            .as_ref()
            .and_then(|keywords| keywords.scores.as_ref())
        {
            const ALLOWED_SCORE_KEYS: [&str; 5] =
                ["primary", "secondary_brand", "secondary", "brand", "general"];
            let mut unknown = scores
                .keys()
                .filter(|key| !ALLOWED_SCORE_KEYS.contains(&key.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                unknown.sort();
                return Err(SeoError::ConfigParse(format!(
                    "keywords.scores contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        let weights = self.weights();
        if weights.primary > TierWeights::MAX_PRIMARY {
            return Err(SeoError::ConfigParse(format!(
                "keywords.scores.primary must be at most {} (found {})",
                TierWeights::MAX_PRIMARY,
                weights.primary
            )));
        }
        for (tier, weight) in [
            ("secondary_brand", weights.secondary_brand),
            ("secondary", weights.secondary),
            ("brand", weights.brand),
            ("general", weights.general),
        ] {
            if weight > weights.primary {
                return Err(SeoError::ConfigParse(format!(
                    "keywords.scores.{tier} ({weight}) cannot exceed keywords.scores.primary ({})",
                    weights.primary
                )));
            }
        }

        let tiers = self.tiers();
        for (tier, terms) in [
            ("primary", &tiers.primary),
            ("secondary", &tiers.secondary),
            ("brand", &tiers.brand),
            ("general", &tiers.general),
        ] {
            validate_terms(&format!("keywords.{tier}"), terms)?;
        }

        if let Some(site) = &self.site {
            validate_terms("site.hosts", &site.hosts)?;
        }

        if let Some(max_age_secs) = self.cache.as_ref().and_then(|cache| cache.max_age_secs) {
            if max_age_secs == 0 {
                return Err(SeoError::ConfigParse(
                    "cache.max_age_secs must be greater than 0".to_string(),
                ));
            }
        }

        Ok(())
    }
}

fn validate_terms(field: &str, terms: &[String]) -> Result<(), SeoError> {
    let mut seen = HashSet::<String>::new();
    for term in terms {
        let normalized = term.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(SeoError::ConfigParse(format!(
                "{field} entries must be non-empty"
            )));
        }
        if !seen.insert(normalized.clone()) {
            return Err(SeoError::ConfigParse(format!(
                "{field} contains duplicate entry: {normalized}"
            )));
        }
    }
    Ok(())
}
