//! Car attribute taxonomies (brand, model, color, ...) from the 4Sale
//! integrations API
//!
//! Options are bilingual; model options are children of brand options via
//! `parent_id`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// Language
// ============================================================================

/// UI language. Arabic renders right-to-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Value for the document `dir` attribute
    pub fn dir(&self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }
}

// ============================================================================
// Taxonomy
// ============================================================================

/// The attribute groups the integrations API serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeGroup {
    Brand,
    Model,
    Color,
    Transmission,
    BodyType,
    Year,
}

/// A single taxonomy entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeOption {
    pub id: i64,
    #[serde(rename = "attrId")]
    pub attr_id: i64,
    #[serde(rename = "labelEn")]
    pub label_en: String,
    #[serde(rename = "labelAr")]
    pub label_ar: String,
    /// For model options: the id of the parent brand option
    #[serde(rename = "parentId")]
    pub parent_id: Option<i64>,
}

/// The full taxonomy payload returned by the integrations API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AttributeCatalog {
    pub brands: Vec<AttributeOption>,
    pub models: Vec<AttributeOption>,
    pub colors: Vec<AttributeOption>,
    pub transmissions: Vec<AttributeOption>,
    #[serde(rename = "bodyTypes")]
    pub body_types: Vec<AttributeOption>,
    pub years: Vec<AttributeOption>,
}

impl AttributeCatalog {
    pub fn group(&self, group: AttributeGroup) -> &[AttributeOption] {
        match group {
            AttributeGroup::Brand => &self.brands,
            AttributeGroup::Model => &self.models,
            AttributeGroup::Color => &self.colors,
            AttributeGroup::Transmission => &self.transmissions,
            AttributeGroup::BodyType => &self.body_types,
            AttributeGroup::Year => &self.years,
        }
    }
}

/// Year option label that sorts after every numeric year in descending order
pub const BEFORE_1980_LABEL: &str = "Before 1980";

/// Label in the requested language
pub fn option_label(option: &AttributeOption, lang: Language) -> &str {
    match lang {
        Language::Ar => &option.label_ar,
        Language::En => &option.label_en,
    }
}

/// Ascending comparator over localized labels: numeric labels compare
/// numerically, everything else case-insensitively.
///
/// Text comparison is plain code-point order after lowercasing, not
/// locale-aware collation. Good enough for the label sets this app sees
/// (Latin brand names and Arabic-script labels, each internally consistent).
pub fn compare_options_asc(a: &AttributeOption, b: &AttributeOption, lang: Language) -> Ordering {
    let la = option_label(a, lang);
    let lb = option_label(b, lang);
    match (la.trim().parse::<f64>(), lb.trim().parse::<f64>()) {
        (Ok(na), Ok(nb)) => na.partial_cmp(&nb).unwrap_or(Ordering::Equal),
        _ => la.to_lowercase().cmp(&lb.to_lowercase()),
    }
}

/// Sort ascending (brands, colors, ...)
pub fn sort_options_asc(options: &mut [AttributeOption], lang: Language) {
    options.sort_by(|a, b| compare_options_asc(a, b, lang));
}

/// Sort descending, for year pickers: newest years first, with the
/// "Before 1980" option always pinned last regardless of order.
pub fn sort_options_desc(options: &mut [AttributeOption], lang: Language) {
    options.sort_by(|a, b| {
        match (a.label_en == BEFORE_1980_LABEL, b.label_en == BEFORE_1980_LABEL) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => compare_options_asc(a, b, lang).reverse(),
        }
    });
}

/// Model options belonging to a brand. No brand selected means no models,
/// not an error.
pub fn models_for_brand(models: &[AttributeOption], brand_id: Option<i64>) -> Vec<AttributeOption> {
    match brand_id {
        Some(brand_id) => models
            .iter()
            .filter(|m| m.parent_id == Some(brand_id))
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(id: i64, label_en: &str, label_ar: &str, parent_id: Option<i64>) -> AttributeOption {
        AttributeOption {
            id,
            attr_id: 1,
            label_en: label_en.to_string(),
            label_ar: label_ar.to_string(),
            parent_id,
        }
    }

    #[test]
    fn test_catalog_group_lookup() {
        let catalog = AttributeCatalog {
            brands: vec![opt(1, "Toyota", "تويوتا", None)],
            years: vec![opt(2, "2005", "2005", None)],
            ..Default::default()
        };
        assert_eq!(catalog.group(AttributeGroup::Brand)[0].id, 1);
        assert_eq!(catalog.group(AttributeGroup::Year)[0].id, 2);
        assert!(catalog.group(AttributeGroup::Model).is_empty());
    }

    #[test]
    fn test_option_label_by_language() {
        let toyota = opt(1, "Toyota", "تويوتا", None);
        assert_eq!(option_label(&toyota, Language::En), "Toyota");
        assert_eq!(option_label(&toyota, Language::Ar), "تويوتا");
    }

    #[test]
    fn test_ascending_sort_mixes_numeric_and_text() {
        let mut options = vec![
            opt(1, "Nissan", "نيسان", None),
            opt(2, "bmw", "بي إم دبليو", None),
            opt(3, "Audi", "أودي", None),
        ];
        sort_options_asc(&mut options, Language::En);
        let labels: Vec<&str> = options.iter().map(|o| o.label_en.as_str()).collect();
        assert_eq!(labels, ["Audi", "bmw", "Nissan"]); // case-insensitive
    }

    #[test]
    fn test_numeric_labels_sort_numerically() {
        let mut options = vec![
            opt(1, "10", "10", None),
            opt(2, "2", "2", None),
            opt(3, "1", "1", None),
        ];
        sort_options_asc(&mut options, Language::En);
        let labels: Vec<&str> = options.iter().map(|o| o.label_en.as_str()).collect();
        assert_eq!(labels, ["1", "2", "10"]);
    }

    #[test]
    fn test_descending_years_pin_before_1980_last() {
        let mut years = vec![
            opt(1, "1999", "1999", None),
            opt(2, BEFORE_1980_LABEL, "قبل 1980", None),
            opt(3, "2005", "2005", None),
        ];
        sort_options_desc(&mut years, Language::En);
        let labels: Vec<&str> = years.iter().map(|o| o.label_en.as_str()).collect();
        assert_eq!(labels, ["2005", "1999", BEFORE_1980_LABEL]);
    }

    #[test]
    fn test_models_filter_by_brand() {
        let models = vec![
            opt(10, "Camry", "كامري", Some(1)),
            opt(11, "Corolla", "كورولا", Some(1)),
            opt(12, "Altima", "ألتيما", Some(2)),
        ];
        let toyota_models = models_for_brand(&models, Some(1));
        assert_eq!(toyota_models.len(), 2);
        assert!(toyota_models.iter().all(|m| m.parent_id == Some(1)));

        assert!(models_for_brand(&models, None).is_empty());
        assert!(models_for_brand(&models, Some(99)).is_empty());
    }
}
