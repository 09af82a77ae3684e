use crate::models::EventSelection;

pub const FEE_SPECIAL_TIER: i64 = 150;
pub const FEE_FLAT_FEMALE: i64 = 250;
pub const FEE_DEFAULT_WITH_SPORTS: i64 = 350;
pub const FEE_DEFAULT_CULTURALS_ONLY: i64 = 250;

/// Institutions on the discounted flat-fee tier. Matched case-insensitively,
/// substring in either direction, so "VFSTR, Guntur" and partial entries both
/// resolve.
pub const SPECIAL_TIER_COLLEGES: &[&str] = &[
    "vignan's foundation for science, technology and research",
    "vignan's foundation for science, technology & research",
    "vignan pharmacy college",
    "vignan's institute of information technology",
    "vignan's lara institute of technology and science",
    "vignan's nirula institute of technology and science for women",
];

/// Registration fee for one selection. Pure; the caller stamps the result on
/// every line item (the charge is per selection, not per event).
///
/// Rule order matters: parasports first, then the special college tier, then
/// the gender tiers.
pub fn compute_fee(selections: &[EventSelection], gender: &str, college: &str) -> i64 {
    let has_para = selections.iter().any(|s| is_type(s, "parasports"));
    if has_para {
        return 0;
    }

    let has_sports = selections.iter().any(|s| is_type(s, "sports"));
    let has_culturals = selections.iter().any(|s| is_type(s, "culturals"));
    let has_standard = has_sports || has_culturals;

    if is_special_tier(college) {
        return if has_standard { FEE_SPECIAL_TIER } else { 0 };
    }

    match gender.trim().to_lowercase().as_str() {
        "female" => {
            if has_standard {
                FEE_FLAT_FEMALE
            } else {
                0
            }
        }
        // "male" and every other value share one tier today. Splitting
        // unspecified genders out later only means adding an arm above.
        _ => default_tier(has_sports, has_culturals),
    }
}

fn default_tier(has_sports: bool, has_culturals: bool) -> i64 {
    match (has_sports, has_culturals) {
        (true, _) => FEE_DEFAULT_WITH_SPORTS,
        (false, true) => FEE_DEFAULT_CULTURALS_ONLY,
        (false, false) => 0,
    }
}

fn is_type(selection: &EventSelection, event_type: &str) -> bool {
    selection.event_type.trim().eq_ignore_ascii_case(event_type)
}

pub fn is_special_tier(college: &str) -> bool {
    let college = college.trim().to_lowercase();
    if college.is_empty() {
        return false;
    }
    SPECIAL_TIER_COLLEGES
        .iter()
        .any(|entry| college.contains(entry) || entry.contains(college.as_str()))
}

/// Strips gender qualifiers from a category label for storage/display.
/// Display normalization only; fee rules never look at categories.
pub fn normalize_category(raw: &str) -> String {
    // "Female" before "Male" so stripping never leaves a dangling "Fe".
    const QUALIFIERS: [&str; 4] = ["women's", "men's", "female", "male"];

    let mut out = raw.to_string();
    for qualifier in QUALIFIERS {
        loop {
            let lower = out.to_ascii_lowercase();
            let Some(pos) = lower.find(qualifier) else {
                break;
            };
            out.replace_range(pos..pos + qualifier.len(), " ");
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}
