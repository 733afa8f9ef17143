//! Gamification Engine
//!
//! Experience/level arithmetic and skill inference. Inference is an ordered
//! rule table checked first-match-wins against the lowercased task title,
//! so the matching policy is data, not code.

use crate::models::Skill;

/// Experience per user level
pub const XP_PER_USER_LEVEL: u32 = 1_000;

/// Experience per skill level
pub const XP_PER_SKILL_LEVEL: u32 = 500;

/// Skill bucket when no rule matches
pub const DEFAULT_SKILL: &str = "General Engineering";

/// Ordered (keywords, skill) rules; the first rule with any keyword found
/// as a substring wins.
const SKILL_RULES: &[(&[&str], &str)] = &[
    (&["ui", "ux", "design"], "UI/UX Design"),
    (&["api", "backend", "server"], "Backend Dev"),
    (&["frontend", "react", "web"], "Frontend Dev"),
    (&["legal", "compliance"], "Legal & Compliance"),
    (&["marketing", "growth"], "Marketing"),
    (&["finance", "payment"], "Finance"),
];

/// Derived user level for a cumulative experience total.
pub fn user_level(xp: u32) -> u32 {
    xp / XP_PER_USER_LEVEL + 1
}

/// Derived skill level for a skill's accumulated experience.
pub fn skill_level(xp: u32) -> u32 {
    xp / XP_PER_SKILL_LEVEL + 1
}

/// Infer the skill bucket for a task title.
pub fn infer_skill(title: &str) -> &'static str {
    let title = title.to_lowercase();
    SKILL_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| title.contains(k)))
        .map(|(_, skill)| *skill)
        .unwrap_or(DEFAULT_SKILL)
}

/// Accumulate experience on a named skill, creating it at level 1 when the
/// user does not have it yet.
pub fn accumulate_skill(skills: &mut Vec<Skill>, name: &str, xp_gain: u32, id: String) {
    match skills.iter_mut().find(|s| s.name == name) {
        Some(skill) => {
            skill.xp += xp_gain;
            skill.level = skill_level(skill.xp);
        }
        None => skills.push(Skill {
            id,
            name: name.to_string(),
            level: 1,
            xp: xp_gain,
        }),
    }
}
