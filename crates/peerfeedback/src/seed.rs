//! Data every board starts with.

/// Peers on the roster at startup.
pub const ROSTER: [&str; 4] = [
    "Liau Ze Xi",
    "Fathima Nuha Nizar",
    "Dina Kamelia Binti Muhamad Husaini",
    "Lee Bi Ying",
];

/// Feedback present at startup, as `(target, comment)` in submission order.
pub const FEEDBACK: [(&str, &str); 4] = [
    (
        "Fathima Nuha Nizar",
        "She was excellent at organization and kept the project on track. Great leadership!",
    ),
    (
        "Fathima Nuha Nizar",
        "Needs to improve communication during code reviews; sometimes too brief.",
    ),
    (
        "Dina Kamelia Binti Muhamad Husaini",
        "He did a fantastic job on the design mockups. Very creative.",
    ),
    (
        "Lee Bi Ying",
        "Bi Ying struggled a bit with the backend integration, maybe needs more practice with APIs.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_targets_are_on_roster() {
        for (target, _) in FEEDBACK {
            assert!(ROSTER.contains(&target), "seed target {target} not on roster");
        }
    }

    #[test]
    fn test_roster_has_no_case_insensitive_duplicates() {
        let mut folded: Vec<String> = ROSTER.iter().map(|n| n.to_lowercase()).collect();
        folded.sort();
        folded.dedup();
        assert_eq!(folded.len(), ROSTER.len());
    }
}
