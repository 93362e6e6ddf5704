//! Facet extraction: the distinct filterable values of one catalog snapshot.

use std::collections::HashSet;

use serde::Serialize;

use crate::store::Catalog;

/// Distinct values for each filterable dimension. Locations and treatments
/// keep first-seen catalog order; budget tiers are ascending. Recomputed per
/// snapshot; there is no incremental maintenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub locations: Vec<String>,
    pub treatments: Vec<String>,
    pub budgets: Vec<u8>,
}

/// Derive the facet options for a catalog snapshot.
#[must_use]
pub fn facets(catalog: &Catalog) -> FacetOptions {
    let mut locations = Vec::new();
    let mut seen_locations = HashSet::new();
    let mut treatments = Vec::new();
    let mut seen_treatments = HashSet::new();
    let mut budgets: Vec<u8> = Vec::new();

    for spa in catalog.spas() {
        if let Some(location) = spa.location.as_deref() {
            if !location.is_empty() && seen_locations.insert(location.to_string()) {
                locations.push(location.to_string());
            }
        }

        for treatment in &spa.treatments {
            if seen_treatments.insert(treatment.clone()) {
                treatments.push(treatment.clone());
            }
        }

        if let Some(budget) = spa.budget {
            if !budgets.contains(&budget) {
                budgets.push(budget);
            }
        }
    }

    budgets.sort_unstable();

    FacetOptions {
        locations,
        treatments,
        budgets,
    }
}

#[cfg(test)]
mod tests {
    use spaguide_core::SpaRecord;

    use super::*;

    fn spa(id: &str, location: Option<&str>, treatments: &[&str], budget: Option<u8>) -> SpaRecord {
        SpaRecord {
            id: id.to_string(),
            title: format!("Spa {id}"),
            location: location.map(ToString::to_string),
            address: None,
            phone: None,
            email: None,
            website: None,
            rating: None,
            budget,
            treatments: treatments.iter().map(ToString::to_string).collect(),
            opening_hour: None,
            closing_hour: None,
        }
    }

    #[test]
    fn facets_deduplicate_in_first_seen_order() {
        let catalog = Catalog::new(vec![
            spa("1", Some("Ubud"), &["Hot Stone", "Facial"], Some(3)),
            spa("2", Some("Seminyak"), &["Facial", "Body Scrub"], Some(1)),
            spa("3", Some("Ubud"), &["Hot Stone"], Some(3)),
        ]);
        let options = facets(&catalog);
        assert_eq!(options.locations, vec!["Ubud", "Seminyak"]);
        assert_eq!(options.treatments, vec!["Hot Stone", "Facial", "Body Scrub"]);
        assert_eq!(options.budgets, vec![1, 3]);
    }

    #[test]
    fn facets_exclude_missing_and_empty_values() {
        let catalog = Catalog::new(vec![
            spa("1", None, &[], None),
            spa("2", Some(""), &["Reflexology"], Some(2)),
        ]);
        let options = facets(&catalog);
        assert!(options.locations.is_empty());
        assert_eq!(options.treatments, vec!["Reflexology"]);
        assert_eq!(options.budgets, vec![2]);
    }

    #[test]
    fn budgets_are_sorted_ascending() {
        let catalog = Catalog::new(vec![
            spa("1", None, &[], Some(4)),
            spa("2", None, &[], Some(1)),
            spa("3", None, &[], Some(2)),
        ]);
        assert_eq!(facets(&catalog).budgets, vec![1, 2, 4]);
    }

    #[test]
    fn facets_of_empty_catalog_are_empty() {
        let options = facets(&Catalog::new(Vec::new()));
        assert!(options.locations.is_empty());
        assert!(options.treatments.is_empty());
        assert!(options.budgets.is_empty());
    }
}
