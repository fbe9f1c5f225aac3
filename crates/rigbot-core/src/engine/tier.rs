//! Budget/category tier resolution.
//!
//! An ordered rule table evaluated top to bottom; the first matching
//! rule wins. Priority lives entirely in the table:
//!
//! 1. streaming gets its dedicated build only inside the 1400-2200 band
//! 2. workstation tiers by budget
//! 3. gaming tiers by budget, and doubles as the default for anything
//!    that isn't a workstation (a streaming request outside the band
//!    lands here too)
//!
//! The table is total — the final rule always matches — so resolution
//! always yields a tag. Whether that tag exists in the knowledge base
//! is the caller's problem.

use super::category::Categories;

/// One row of the resolution table.
struct TierRule {
    tag: &'static str,
    matches: fn(budget: u32, cats: Categories) -> bool,
}

static TIER_RULES: &[TierRule] = &[
    TierRule {
        tag: "streaming_build",
        matches: |b, c| c.streaming && (1400..=2200).contains(&b),
    },
    TierRule {
        tag: "workstation_entry",
        matches: |b, c| c.workstation && b < 800,
    },
    TierRule {
        tag: "workstation_mid",
        matches: |b, c| c.workstation && b < 1700,
    },
    TierRule {
        tag: "workstation_high",
        matches: |_, c| c.workstation,
    },
    TierRule {
        tag: "budget_entry_gaming",
        matches: |b, _| b < 800,
    },
    TierRule {
        tag: "budget_mid_gaming",
        matches: |b, _| b < 1400,
    },
    TierRule {
        tag: "budget_high_gaming",
        matches: |b, _| b < 2000,
    },
    TierRule {
        tag: "budget_enthusiast_gaming",
        matches: |_, _| true,
    },
];

/// Resolve a budget plus detected categories into an intent tag.
pub fn resolve(budget: u32, cats: Categories) -> &'static str {
    TIER_RULES
        .iter()
        .find(|rule| (rule.matches)(budget, cats))
        .map(|rule| rule.tag)
        .unwrap_or("budget_enthusiast_gaming")
}
