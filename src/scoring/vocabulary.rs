//! Fixed word lists for the bullet heuristics

/// Verbs that count as a strong opening for a description bullet
pub const ACTION_VERBS: &[&str] = &[
    "accelerated", "accomplished", "achieved", "acted", "adapted", "added", "addressed", "administered",
    "advised", "allocated", "analyzed", "appraised", "approved", "arbitrated", "architected", "arranged",
    "assembled", "assessed", "assigned", "assisted", "attained", "audited", "authored", "automated",
    "balanced", "benchmarked", "boosted", "broadened", "budgeted", "built", "calculated", "cataloged",
    "centralized", "chaired", "championed", "changed", "clarified", "classified", "coached", "coded",
    "collaborated", "collected", "communicated", "compiled", "completed", "composed", "computed", "conceived",
    "conceptualized", "concluded", "conducted", "configured", "consolidated", "constructed", "consulted", "containerized",
    "contracted", "contributed", "controlled", "converted", "convinced", "coordinated", "corresponded", "counseled",
    "crafted", "created", "critiqued", "cultivated", "curated", "customized", "cut", "debugged",
    "decreased", "defined", "delegated", "delivered", "demonstrated", "demystified", "deployed", "derived",
    "designed", "determined", "developed", "devised", "diagnosed", "directed", "discovered", "dispatched",
    "documented", "doubled", "drafted", "drove", "earned", "edited", "educated", "eliminated",
    "enabled", "encouraged", "energized", "enforced", "engineered", "enhanced", "enlisted", "ensured",
    "established", "evaluated", "evangelized", "examined", "exceeded", "executed", "expanded", "expedited",
    "explained", "extracted", "fabricated", "facilitated", "familiarized", "fashioned", "forecasted", "forged",
    "formed", "formulated", "fostered", "founded", "gained", "gathered", "generated", "grew",
    "guided", "halved", "handled", "headed", "hired", "hosted", "identified", "illustrated",
    "impacted", "implemented", "improved", "incorporated", "increased", "influenced", "informed", "initiated",
    "innovated", "inspected", "inspired", "installed", "instituted", "instructed", "instrumented", "integrated",
    "interpreted", "interviewed", "introduced", "invented", "investigated", "launched", "lectured", "led",
    "leveraged", "liaised", "localized", "lowered", "maintained", "managed", "marketed", "mastered",
    "maximized", "mediated", "mentored", "migrated", "minimized", "mobilized", "modeled", "moderated",
    "modernized", "monitored", "motivated", "navigated", "negotiated", "operated", "optimized", "orchestrated",
    "organized", "originated", "outperformed", "overhauled", "oversaw", "owned", "parallelized", "participated",
    "partnered", "performed", "persuaded", "piloted", "pioneered", "pitched", "planned", "predicted",
    "prepared", "presented", "prioritized", "processed", "produced", "profiled", "programmed", "projected",
    "promoted", "proposed", "prototyped", "proved", "provided", "provisioned", "publicized", "published",
    "purchased", "quantified", "raised", "rearchitected", "rebuilt", "recommended", "reconciled", "recorded",
    "recruited", "redesigned", "reduced", "refactored", "referred", "refined", "regulated", "rehabilitated",
    "reinforced", "released", "remediated", "remodeled", "reorganized", "repaired", "replaced", "reported",
    "represented", "researched", "resolved", "restructured", "retrieved", "revamped", "reviewed", "revised",
    "revitalized", "rewrote", "saved", "scaled", "scheduled", "screened", "scripted", "secured",
    "selected", "served", "set", "shaped", "shipped", "simplified", "sold", "solved",
    "sourced", "spearheaded", "specified", "spoke", "sponsored", "stabilized", "standardized", "steered",
    "stimulated", "strategized", "streamlined", "strengthened", "structured", "studied", "succeeded", "suggested",
    "summarized", "supervised", "supported", "surpassed", "surveyed", "synthesized", "systematized", "tabulated",
    "tailored", "taught", "tested", "trained", "transformed", "translated", "tripled", "troubleshot",
    "tuned", "uncovered", "unified", "updated", "upgraded", "utilized", "validated", "verbalized",
    "verified", "visualized", "won", "wrote",
];

/// Adverbs that may precede the action verb ("Successfully launched ...")
pub const COMMON_ADVERBS: &[&str] = &[
    "successfully", "effectively", "consistently", "significantly",
    "actively", "greatly", "strongly", "directly",
];

/// Hedging phrases that weaken a bullet
pub const FILLER_PHRASES: &[&str] = &[
    "responsible for", "duties included", "assisted with", "worked on", "involved in",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_action_verbs_are_unique_and_lowercase() {
        let unique: HashSet<_> = ACTION_VERBS.iter().collect();
        assert_eq!(unique.len(), ACTION_VERBS.len());
        assert!(ACTION_VERBS.len() >= 300);
        assert!(ACTION_VERBS
            .iter()
            .all(|v| v.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn test_common_verbs_present() {
        for verb in ["managed", "developed", "led", "spearheaded", "wrote"] {
            assert!(ACTION_VERBS.contains(&verb), "{} missing", verb);
        }
    }
}
