//! Random guest-name generator.
//!
//! Produces names in the format `AdjectiveNounNN` (e.g. `NeonOtter42`),
//! used as a suggested username when none is configured.

use rand::RngExt;

const ADJECTIVES: &[&str] = &[
    "Quiet", "Neon", "Lunar", "Solar", "Frost", "Storm", "Pixel", "Ghost", "Cosmic", "Iron",
    "Crimson", "Silent", "Mystic", "Rapid", "Nova", "Cobalt", "Azure", "Amber", "Wired", "Prism",
];

const NOUNS: &[&str] = &[
    "Fox", "Wolf", "Hawk", "Raven", "Lynx", "Falcon", "Tiger", "Owl", "Otter", "Crane", "Bison",
    "Crow", "Panther", "Moth", "Newt", "Reef", "Byte", "Node",
];

/// Generate a random guest name like `NeonOtter42`.
pub fn generate_guest_name() -> String {
    let mut rng = rand::rng();
    let adj = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    let num: u8 = rng.random_range(0..100);
    format!("{}{}{}", adj, noun, num)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_name_shape() {
        let name = generate_guest_name();
        assert!(!name.is_empty());
        assert!(name.chars().next().unwrap().is_ascii_uppercase());
        assert!(name.chars().rev().take_while(|c| c.is_ascii_digit()).count() >= 1);
    }
}
