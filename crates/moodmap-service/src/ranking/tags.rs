use std::collections::HashMap;

use crate::utils::text::contains_any;

use super::keywords::WIFI_VALUES;

pub const CAFE: &str = "cafe";
pub const RESTAURANT: &str = "restaurant";
pub const FAST_FOOD: &str = "fast_food";
pub const FOOD_COURT: &str = "food_court";
pub const COWORKING_SPACE: &str = "coworking_space";

/// Read-only view over an OSM tag map with the normalisation the filter and
/// scorer rely on: values are trimmed, flags compared case-insensitively.
#[derive(Debug, Clone, Copy)]
pub struct PlaceTags<'a> {
    tags: &'a HashMap<String, String>,
}

impl<'a> PlaceTags<'a> {
    pub fn new(tags: &'a HashMap<String, String>) -> Self {
        Self { tags }
    }

    pub fn get(&self, key: &str) -> &'a str {
        self.tags.get(key).map(|v| v.trim()).unwrap_or_default()
    }

    pub fn lower(&self, key: &str) -> String {
        self.get(key).to_lowercase()
    }

    pub fn has(&self, key: &str) -> bool {
        !self.get(key).is_empty()
    }

    pub fn is_yes(&self, key: &str) -> bool {
        self.lower(key) == "yes"
    }

    pub fn amenity(&self) -> String {
        self.lower("amenity")
    }

    pub fn name(&self) -> String {
        self.lower("name")
    }

    pub fn name_matches(&self, keywords: &[&str]) -> bool {
        contains_any(&self.name(), keywords)
    }

    pub fn has_wifi(&self) -> bool {
        WIFI_VALUES.contains(&self.lower("internet_access").as_str())
    }

    pub fn is_coworking(&self) -> bool {
        self.amenity() == COWORKING_SPACE || self.lower("office") == "coworking"
    }

    pub fn has_website(&self) -> bool {
        self.has("website") || self.has("contact:website")
    }

    pub fn has_phone(&self) -> bool {
        self.has("phone") || self.has("contact:phone")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn trims_and_lowercases() {
        let raw = tags(&[("amenity", " Cafe "), ("internet_access", "WLAN")]);
        let view = PlaceTags::new(&raw);
        assert_eq!(view.amenity(), "cafe");
        assert!(view.has_wifi());
        assert!(!view.has("opening_hours"));
    }

    #[test]
    fn blank_values_count_as_absent() {
        let raw = tags(&[("website", "   "), ("contact:phone", "+91 20 1234")]);
        let view = PlaceTags::new(&raw);
        assert!(!view.has_website());
        assert!(view.has_phone());
    }

    #[test]
    fn coworking_via_office_tag() {
        let raw = tags(&[("office", "Coworking")]);
        assert!(PlaceTags::new(&raw).is_coworking());
    }
}
