use std::collections::BTreeSet;

use itertools::Itertools;

use crate::words::ALPHABET;

pub const REPEAT_OPS: [char; 3] = ['+', '*', '?'];

pub const MAX_TIER: usize = 5;

/// Bottom-up table of synthesized patterns, indexed by size class. A pattern
/// in tier `t` spends a budget of exactly `t` characters, so each tier is
/// finalized purely from strictly smaller tiers.
#[derive(Debug, Clone)]
pub struct PatternTable {
    pub tiers: Vec<BTreeSet<String>>,
}

impl PatternTable {
    pub fn build(max_tier: usize) -> PatternTable {
        let mut tiers: Vec<BTreeSet<String>> = vec![
            BTreeSet::from([String::new()]),
            ALPHABET.iter().map(|c| c.to_string()).collect(),
        ];

        for t in 2..=max_tier {
            let mut tier = BTreeSet::new();

            for e in &tiers[t - 2] {
                tier.insert(format!("({})", e));
            }

            // Stacking a second repeat operator (a**, a+? ...) is rejected
            // by the engine, so only extend patterns that end in a literal
            // or a closing paren.
            for a in &tiers[t - 1] {
                if !a.ends_with(&REPEAT_OPS[..]) {
                    for op in REPEAT_OPS {
                        tier.insert(format!("{}{}", a, op));
                    }
                }
            }

            for j in 1..t {
                for (a, b) in tiers[t - j].iter().cartesian_product(tiers[j].iter()) {
                    tier.insert(format!("{}{}", a, b));
                }
            }

            // The separator itself costs one character of the budget.
            for j in 1..t - 1 {
                for (a, b) in tiers[t - j - 1].iter().cartesian_product(tiers[j].iter()) {
                    tier.insert(format!("{}|{}", a, b));
                }
            }

            tiers.push(tier);
        }

        PatternTable { tiers }
    }

    /// All synthesized patterns, smallest size class first.
    pub fn patterns(&self) -> Vec<String> {
        self.tiers.iter().flatten().cloned().collect_vec()
    }
}

#[test]
fn base_tiers() {
    let table = PatternTable::build(2);
    assert_eq!(table.tiers[0], BTreeSet::from([String::new()]));
    assert_eq!(
        table.tiers[1],
        BTreeSet::from(["a".to_string(), "b".to_string(), "c".to_string()])
    );
    assert!(table.tiers[2].contains("()"));
    assert!(table.tiers[2].contains("a+"));
    assert!(table.tiers[2].contains("b?"));
    assert!(table.tiers[2].contains("cc"));
    assert_eq!(table.tiers[2].len(), 19);
}

#[test]
fn tier_cardinalities() {
    use pretty_assertions::assert_eq;

    let table = PatternTable::build(MAX_TIER);
    let sizes = table.tiers.iter().map(|tier| tier.len()).collect_vec();
    assert_eq!(sizes, vec![1, 3, 19, 102, 629, 3778]);
    assert_eq!(table.patterns().len(), 4532);
}

#[test]
fn pattern_length_equals_its_tier() {
    let table = PatternTable::build(MAX_TIER);
    for (t, tier) in table.tiers.iter().enumerate() {
        for pattern in tier {
            assert_eq!(pattern.len(), t, "{}", pattern);
        }
    }
}

#[test]
fn no_pattern_stacks_repeat_operators() {
    for pattern in PatternTable::build(MAX_TIER).patterns() {
        for (a, b) in pattern.chars().tuple_windows() {
            assert!(
                !(REPEAT_OPS.contains(&a) && REPEAT_OPS.contains(&b)),
                "{}",
                pattern
            );
        }
    }
}

#[test]
fn alternation_keeps_both_sides_nonempty() {
    for pattern in PatternTable::build(MAX_TIER).patterns() {
        assert!(!pattern.starts_with('|'), "{}", pattern);
        assert!(!pattern.ends_with('|'), "{}", pattern);
        assert!(!pattern.contains("(|") && !pattern.contains("||"), "{}", pattern);
    }
}
