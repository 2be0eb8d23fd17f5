/// Word mutation engine
///
/// Pure string transforms: case variants, cumulative leetspeak
/// substitution, and common number/symbol postfixes. Deterministic by
/// construction - the leet map is a fixed ordered slice, and every result
/// list is sorted and deduplicated before it is returned.

/// Leetspeak substitutions, ordered by key so cumulative replacement is
/// reproducible across runs.
pub const LEET_MAP: &[(char, &str)] = &[
    ('a', "4"),
    ('e', "3"),
    ('i', "!"),
    ('o', "0"),
    ('s', "$"),
];

/// Postfixes appended at level 2 (most common passwords suffixes).
pub const LEVEL2_POSTFIX: &[&str] = &[
    "1", "123456", "12", "2", "123", "!", ".", "?", "_", "0", "01", "69", "21", "22", "23", "1234",
    "8", "9", "10", "11", "13", "3", "4", "5", "6", "7",
];

/// Additional postfixes appended at level 3 (years, repeats, keypad runs).
pub const LEVEL3_POSTFIX: &[&str] = &[
    "07", "08", "09", "14", "15", "16", "17", "18", "19", "24", "77", "88", "99", "12345",
    "123456789", "00", "02", "03", "04", "05", "06", "20", "25", "26", "27", "28", "007",
    "1234567", "12345678", "111111", "111", "777", "666", "101", "33", "44", "55", "66", "2008",
    "2009", "2010", "2011", "86", "87", "89", "90", "91", "92", "93", "94", "95", "98",
];

/// Munge intensity tier. Raw values clamp into the 1-3 range; level 0 is
/// treated as level 1 (the minimum mutation set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MungeLevel {
    Basic,
    Advanced,
    Expert,
}

impl MungeLevel {
    /// Default level when none is configured.
    pub const DEFAULT: MungeLevel = MungeLevel::Advanced;

    /// Clamp an arbitrary integer into a valid level.
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            i64::MIN..=1 => MungeLevel::Basic,
            2 => MungeLevel::Advanced,
            _ => MungeLevel::Expert,
        }
    }

    pub fn as_number(&self) -> u8 {
        match self {
            MungeLevel::Basic => 1,
            MungeLevel::Advanced => 2,
            MungeLevel::Expert => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MungeLevel::Basic => "basic",
            MungeLevel::Advanced => "advanced",
            MungeLevel::Expert => "expert",
        }
    }
}

impl std::fmt::Display for MungeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_number(), self.name())
    }
}

pub struct Mutator;

impl Mutator {
    /// Mutate a seed word at the given level. Output is sorted
    /// lexicographically and deduplicated; calling twice with the same
    /// arguments yields byte-identical results.
    pub fn mutate(seed: &str, level: MungeLevel) -> Vec<String> {
        let mut variants = match level {
            MungeLevel::Basic => Self::basic(seed),
            MungeLevel::Advanced => Self::advanced(seed),
            MungeLevel::Expert => Self::expert(seed),
        };

        variants.sort();
        variants.dedup();
        variants
    }

    /// Toggle the case of every ASCII letter; everything else passes
    /// through unchanged.
    pub fn swapcase(word: &str) -> String {
        word.chars()
            .map(|c| {
                if c.is_ascii_uppercase() {
                    c.to_ascii_lowercase()
                } else if c.is_ascii_lowercase() {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect()
    }

    /// Level 1: the seed itself, its all-caps form, and the case-swapped
    /// all-caps form.
    fn basic(word: &str) -> Vec<String> {
        // ASCII only, same regime as swapcase: non-ASCII letters pass
        // through both transforms unchanged.
        let caps = word.to_ascii_uppercase();
        let swapped = Self::swapcase(&caps);
        vec![word.to_string(), caps, swapped]
    }

    /// Level 2: level 1 plus leetspeak expansion with the common postfixes.
    fn advanced(word: &str) -> Vec<String> {
        let mut wordlist = Self::basic(word);
        wordlist.extend(Self::leet_expand(word, LEVEL2_POSTFIX));
        wordlist
    }

    /// Level 3: level 2 plus leetspeak expansion with the extended postfixes.
    fn expert(word: &str) -> Vec<String> {
        let mut wordlist = Self::advanced(word);
        wordlist.extend(Self::leet_expand(word, LEVEL3_POSTFIX));
        wordlist
    }

    /// Cumulative leetspeak expansion: each substitution is applied to the
    /// already-substituted accumulator, not to the original word. After
    /// every substitution the accumulator is emitted, followed by the
    /// accumulator with each postfix appended in list order.
    pub fn leet_expand(word: &str, postfixes: &[&str]) -> Vec<String> {
        let mut wordlist = Vec::with_capacity(LEET_MAP.len() * (1 + postfixes.len()));
        let mut current = word.to_string();

        for (letter, substitute) in LEET_MAP {
            current = current.replace(*letter, substitute);
            wordlist.push(current.clone());
            for postfix in postfixes {
                wordlist.push(format!("{}{}", current, postfix));
            }
        }

        wordlist
    }

    /// Raw (pre-dedup) variant count produced per seed at a level. Useful
    /// for estimating work before running the pipeline.
    pub fn raw_variant_count(level: MungeLevel) -> usize {
        let basic = 3;
        let advanced = basic + LEET_MAP.len() * (1 + LEVEL2_POSTFIX.len());
        let expert = advanced + LEET_MAP.len() * (1 + LEVEL3_POSTFIX.len());
        match level {
            MungeLevel::Basic => basic,
            MungeLevel::Advanced => advanced,
            MungeLevel::Expert => expert,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postfix_table_sizes() {
        assert_eq!(LEVEL2_POSTFIX.len(), 26);
        assert_eq!(LEVEL3_POSTFIX.len(), 52);
    }

    #[test]
    fn test_level_clamping() {
        assert_eq!(MungeLevel::from_raw(-5), MungeLevel::Basic);
        assert_eq!(MungeLevel::from_raw(0), MungeLevel::Basic);
        assert_eq!(MungeLevel::from_raw(1), MungeLevel::Basic);
        assert_eq!(MungeLevel::from_raw(2), MungeLevel::Advanced);
        assert_eq!(MungeLevel::from_raw(3), MungeLevel::Expert);
        assert_eq!(MungeLevel::from_raw(99), MungeLevel::Expert);
    }

    #[test]
    fn test_swapcase() {
        assert_eq!(Mutator::swapcase("CaT"), "cAt");
        assert_eq!(Mutator::swapcase("p4ss!"), "P4SS!");
        assert_eq!(Mutator::swapcase(""), "");
    }

    #[test]
    fn test_basic_cat() {
        // upper("cat") = "CAT", swapcase("CAT") = "cat" - dedup collapses
        // the set to exactly two entries.
        let variants = Mutator::mutate("cat", MungeLevel::Basic);
        assert_eq!(variants, vec!["CAT".to_string(), "cat".to_string()]);
    }

    #[test]
    fn test_empty_seed() {
        let variants = Mutator::mutate("", MungeLevel::Basic);
        assert_eq!(variants, vec!["".to_string()]);
    }

    #[test]
    fn test_cumulative_substitution() {
        // "sea": a->4 gives "se4", then e->3 gives "s34" (applied to the
        // accumulator, not the original), then s->$ gives "$34".
        let raw = Mutator::leet_expand("sea", &[]);
        assert_eq!(raw, vec!["se4", "s34", "s34", "s34", "$34"]);
    }

    #[test]
    fn test_leet_expand_postfix_order() {
        let raw = Mutator::leet_expand("o", &["1", "2"]);
        // Accumulator stays "o" until the o->0 pair fires.
        assert_eq!(
            raw,
            vec!["o", "o1", "o2", "o", "o1", "o2", "o", "o1", "o2", "0", "01", "02", "0", "01",
                 "02"]
        );
        assert_eq!(raw.len(), LEET_MAP.len() * 3);
    }

    #[test]
    fn test_output_sorted_and_unique() {
        let variants = Mutator::mutate("password", MungeLevel::Expert);
        for pair in variants.windows(2) {
            assert!(pair[0] < pair[1], "not strictly increasing: {:?}", pair);
        }
    }

    #[test]
    fn test_determinism() {
        let first = Mutator::mutate("secret", MungeLevel::Expert);
        let second = Mutator::mutate("secret", MungeLevel::Expert);
        assert_eq!(first, second);
    }

    #[test]
    fn test_monotonic_levels() {
        let basic = Mutator::mutate("admin", MungeLevel::Basic);
        let advanced = Mutator::mutate("admin", MungeLevel::Advanced);
        let expert = Mutator::mutate("admin", MungeLevel::Expert);

        for word in &basic {
            assert!(advanced.contains(word), "level 2 lost {:?}", word);
        }
        for word in &advanced {
            assert!(expert.contains(word), "level 3 lost {:?}", word);
        }
    }

    #[test]
    fn test_advanced_contains_leet_variants() {
        let variants = Mutator::mutate("sea", MungeLevel::Advanced);
        assert!(variants.contains(&"se4".to_string()));
        assert!(variants.contains(&"s34".to_string()));
        assert!(variants.contains(&"$34".to_string()));
        assert!(variants.contains(&"$34123456".to_string()));
        assert!(variants.contains(&"SEA".to_string()));
        assert!(variants.contains(&"sea".to_string()));
    }

    #[test]
    fn test_raw_variant_count() {
        assert_eq!(Mutator::raw_variant_count(MungeLevel::Basic), 3);
        assert_eq!(
            Mutator::raw_variant_count(MungeLevel::Advanced),
            3 + 5 * 27
        );
        assert_eq!(
            Mutator::raw_variant_count(MungeLevel::Expert),
            3 + 5 * 27 + 5 * 53
        );
    }
}
