/// Longest tag value returned to clients before truncation.
pub const MAX_TAG_VALUE_CHARS: usize = 340;

/// Lowercased containment check against a keyword bank.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    if text.is_empty() {
        return false;
    }
    let text = text.to_lowercase();
    keywords.iter().any(|k| text.contains(k))
}

/// "fast_food" -> "Fast Food"
pub fn title_case(value: &str) -> String {
    value
        .replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn clean_tag_value(value: Option<&str>) -> String {
    let value = value.unwrap_or_default().trim();
    if value.chars().count() > MAX_TAG_VALUE_CHARS {
        let mut truncated: String = value.chars().take(MAX_TAG_VALUE_CHARS).collect();
        truncated.push('…');
        truncated
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_amenity_values() {
        assert_eq!(title_case("fast_food"), "Fast Food");
        assert_eq!(title_case("cafe"), "Cafe");
        assert_eq!(title_case("coworking_space"), "Coworking Space");
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        assert!(contains_any("STARBUCKS Reserve", &["starbucks"]));
        assert!(!contains_any("", &["starbucks"]));
        assert!(!contains_any("Dominos", &["starbucks"]));
    }

    #[test]
    fn truncates_long_values() {
        let long = "x".repeat(400);
        let cleaned = clean_tag_value(Some(long.as_str()));
        assert_eq!(cleaned.chars().count(), MAX_TAG_VALUE_CHARS + 1);
        assert!(cleaned.ends_with('…'));
        assert_eq!(clean_tag_value(Some("  Mo-Su 08:00-22:00 ")), "Mo-Su 08:00-22:00");
        assert_eq!(clean_tag_value(None), "");
    }
}
