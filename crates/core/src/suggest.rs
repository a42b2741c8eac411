//! Search-box suggestion lookup.
//!
//! A fixed, ordered keyword table scanned with case-insensitive substring
//! matching; the first matching keyword's phrase list is returned verbatim.
//! Deliberately a table scan, not a ranking problem.

/// Upper bound on returned phrases.
pub const MAX_SUGGESTIONS: usize = 4;

const TOPIC_SUGGESTIONS: &[(&str, &[&str])] = &[
    (
        "budget",
        &[
            "Budget-friendly destinations under ₹3000",
            "Affordable rural experiences",
            "Low-cost authentic stays",
        ],
    ),
    (
        "adventure",
        &[
            "Trekking and hiking destinations",
            "Water sports and rafting",
            "Rock climbing locations",
        ],
    ),
    (
        "culture",
        &[
            "Traditional craft workshops",
            "Folk performances and festivals",
            "Heritage village tours",
        ],
    ),
    (
        "nature",
        &[
            "Wildlife spotting locations",
            "Bird watching destinations",
            "Forest and mountain retreats",
        ],
    ),
    (
        "food",
        &[
            "Cooking class destinations",
            "Local cuisine experiences",
            "Farm-to-table locations",
        ],
    ),
    (
        "family",
        &[
            "Family-friendly destinations",
            "Safe and comfortable stays",
            "Educational experiences for kids",
        ],
    ),
    (
        "solo",
        &[
            "Solo traveler safe destinations",
            "Peaceful retreat locations",
            "Photography hotspots",
        ],
    ),
    (
        "group",
        &[
            "Group activity destinations",
            "Team building experiences",
            "Large accommodation options",
        ],
    ),
];

const FALLBACK_SUGGESTIONS: &[&str] = &[
    "Explore tribal cultures in Araku Valley",
    "Experience backwater life in Kerala",
    "Learn traditional crafts in Pochampally",
    "Discover coffee plantations in Coorg",
];

/// Map a free-text fragment to canned suggestion phrases. First matching
/// keyword wins; fragments matching no keyword get the generic fallback
/// list. Total over any input, including the empty string.
pub fn suggest(fragment: &str) -> &'static [&'static str] {
    let fragment = fragment.to_lowercase();
    for (keyword, phrases) in TOPIC_SUGGESTIONS.iter().copied() {
        if fragment.contains(keyword) {
            return phrases;
        }
    }
    FALLBACK_SUGGESTIONS
}
