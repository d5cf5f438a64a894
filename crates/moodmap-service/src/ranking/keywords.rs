//! Keyword banks matched against lowercased place names.

pub const WORK_KEYWORDS: &[&str] = &[
    "starbucks",
    "ccd",
    "cafe coffee day",
    "third wave",
    "thirdwave",
    "book cafe",
    "book café",
    "roastery",
    "coffee",
    "coffee house",
    "cowork",
    "co-work",
    "workspace",
    "study",
    "library",
    "reading",
    "iraj",
    "irani",
];

pub const DATE_KEYWORDS: &[&str] = &[
    "bistro",
    "lounge",
    "rooftop",
    "terrace",
    "garden",
    "aesthetic",
    "cafe",
    "café",
    "coffee",
    "patisserie",
    "bakery",
    "brunch",
];

pub const DATE_BAD_KEYWORDS: &[&str] = &[
    "dhaba", "canteen", "mess", "misal", "vada pav", "vadapav", "tapri", "roll", "shawarma",
    "momos",
];

pub const BUDGET_KEYWORDS: &[&str] = &[
    "misal",
    "vadapav",
    "vada pav",
    "poha",
    "upma",
    "chai",
    "tea",
    "tapri",
    "momos",
    "roll",
    "shawarma",
    "sandwich",
    "bhurji",
    "omelette",
    "chinese",
    "noodles",
    "fried rice",
    "thali",
    "mess",
    "bhojanalay",
    "snacks",
    "juice",
    "cold coffee",
    "tiffin",
];

pub const EXPENSIVE_KEYWORDS: &[&str] = &["fine dine", "fine-dine", "luxury", "premium", "bar", "pub"];

/// Names that say nothing beyond the amenity type.
pub const GENERIC_NAMES: &[&str] = &["cafe", "restaurant", "fast food", "place"];

pub const WIFI_VALUES: &[&str] = &["yes", "wlan", "wifi"];
