// Scenario coverage for the mutation engine through the public API
use munge::modules::munge::{MungeLevel, Mutator};

/// Case-only mutations at level 1
mod basic_level {
    use super::*;

    #[test]
    fn test_cat_collapses_to_two_variants() {
        let variants = Mutator::mutate("cat", MungeLevel::Basic);
        assert_eq!(
            variants,
            vec!["CAT".to_string(), "cat".to_string()],
            "swapcase of the all-caps form is the seed again"
        );
    }

    #[test]
    fn test_mixed_case_seed_keeps_three_variants() {
        let variants = Mutator::mutate("CaT", MungeLevel::Basic);
        assert_eq!(
            variants,
            vec!["CAT".to_string(), "CaT".to_string(), "cat".to_string()]
        );
    }

    #[test]
    fn test_empty_seed_yields_single_empty_variant() {
        let variants = Mutator::mutate("", MungeLevel::Basic);
        assert_eq!(variants, vec!["".to_string()]);
    }

    #[test]
    fn test_non_alphabetic_passthrough() {
        let variants = Mutator::mutate("123!", MungeLevel::Basic);
        assert_eq!(variants, vec!["123!".to_string()]);
    }

    #[test]
    fn test_non_ascii_letters_survive_both_case_transforms() {
        // Uppercasing and swapcase are both ASCII-only, so the accent is
        // left alone instead of ending up half-folded.
        let variants = Mutator::mutate("café", MungeLevel::Basic);
        assert_eq!(variants, vec!["CAFé".to_string(), "café".to_string()]);
    }
}

/// Leetspeak expansion at levels 2 and 3
mod leet_levels {
    use super::*;

    #[test]
    fn test_password_level2_contains_cumulative_leet() {
        let variants = Mutator::mutate("password", MungeLevel::Advanced);

        // o fires before s, so the fully substituted form is p4$$w0rd.
        assert!(variants.contains(&"p4ssword".to_string()));
        assert!(variants.contains(&"p4ssw0rd".to_string()));
        assert!(variants.contains(&"p4$$w0rd".to_string()));
        assert!(variants.contains(&"p4$$w0rd123456".to_string()));
        assert!(variants.contains(&"p4$$w0rd69".to_string()));
    }

    #[test]
    fn test_level3_adds_extended_postfixes() {
        let advanced = Mutator::mutate("password", MungeLevel::Advanced);
        let expert = Mutator::mutate("password", MungeLevel::Expert);

        assert!(!advanced.contains(&"p4$$w0rd2011".to_string()));
        assert!(expert.contains(&"p4$$w0rd2011".to_string()));
        assert!(expert.contains(&"p4$$w0rd123456789".to_string()));
    }

    #[test]
    fn test_seed_without_leet_letters_still_gets_postfixes() {
        let variants = Mutator::mutate("xyz", MungeLevel::Advanced);
        assert!(variants.contains(&"xyz1".to_string()));
        assert!(variants.contains(&"xyz1234".to_string()));
    }
}

/// Contract properties: determinism, ordering, monotonicity, clamping
mod properties {
    use super::*;

    const SEEDS: &[&str] = &["admin", "Password", "s3cr3t!", "", "aeios"];

    #[test]
    fn test_determinism() {
        for seed in SEEDS {
            for level in [MungeLevel::Basic, MungeLevel::Advanced, MungeLevel::Expert] {
                assert_eq!(
                    Mutator::mutate(seed, level),
                    Mutator::mutate(seed, level),
                    "mutate must be deterministic for {:?} at {}",
                    seed,
                    level
                );
            }
        }
    }

    #[test]
    fn test_strictly_increasing_output() {
        for seed in SEEDS {
            let variants = Mutator::mutate(seed, MungeLevel::Expert);
            for pair in variants.windows(2) {
                assert!(
                    pair[0] < pair[1],
                    "duplicate or inversion for {:?}: {:?}",
                    seed,
                    pair
                );
            }
        }
    }

    #[test]
    fn test_levels_are_monotonic() {
        for seed in SEEDS {
            let basic = Mutator::mutate(seed, MungeLevel::Basic);
            let advanced = Mutator::mutate(seed, MungeLevel::Advanced);
            let expert = Mutator::mutate(seed, MungeLevel::Expert);

            assert!(basic.iter().all(|w| advanced.contains(w)));
            assert!(advanced.iter().all(|w| expert.contains(w)));
        }
    }

    #[test]
    fn test_raw_level_values_clamp() {
        assert_eq!(
            Mutator::mutate("admin", MungeLevel::from_raw(99)),
            Mutator::mutate("admin", MungeLevel::Expert),
            "levels above 3 behave as level 3"
        );
        assert_eq!(
            Mutator::mutate("admin", MungeLevel::from_raw(-5)),
            Mutator::mutate("admin", MungeLevel::Basic),
            "levels below 0 behave as the minimum level"
        );
        assert_eq!(
            Mutator::mutate("admin", MungeLevel::from_raw(0)),
            Mutator::mutate("admin", MungeLevel::Basic),
            "level 0 behaves as level 1"
        );
    }
}
