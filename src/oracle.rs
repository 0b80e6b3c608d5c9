use std::io::Write;

use regex::Regex;

use crate::exprs::{PatternTable, MAX_TIER};
use crate::words::{enumerate_words, MAX_WORD_LEN};

/// Non-matches are only reported when pattern and word are both shorter
/// than this; matches are always reported.
pub const SHOW_LIMIT: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("pattern `{pattern}` rejected by the engine: {source}")]
    BadPattern {
        pattern: String,
        source: regex::Error,
    },
    #[error("writing a result line failed: {0}")]
    Io(#[from] std::io::Error),
}

/// One compiled pattern, judging whole words only.
#[derive(Debug)]
pub struct Matcher {
    pattern: String,
    anchored: Regex,
}

impl Matcher {
    pub fn compile(pattern: &str) -> Result<Matcher, Error> {
        // Anchor both ends so a substring hit does not count.
        let anchored = Regex::new(&format!("^(?:{})$", pattern)).map_err(|source| {
            Error::BadPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(Matcher {
            pattern: pattern.to_string(),
            anchored,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn full_match(&self, word: &str) -> bool {
        self.anchored.is_match(word)
    }
}

pub fn reportable(hit: bool, pattern: &str, word: &str) -> bool {
    hit || pattern.len() < SHOW_LIMIT && word.len() < SHOW_LIMIT
}

/// Cross every synthesized pattern with every candidate word and write one
/// `{0|1} {pattern} {word}` line per reportable pair.
pub fn run<W: Write>(out: &mut W) -> Result<(), Error> {
    let patterns = PatternTable::build(MAX_TIER).patterns();
    let words = enumerate_words(MAX_WORD_LEN);
    log::debug!("{} patterns x {} words", patterns.len(), words.len());

    for pattern in &patterns {
        let matcher = Matcher::compile(pattern)?;
        for word in &words {
            let hit = matcher.full_match(word);
            if reportable(hit, pattern, word) {
                writeln!(out, "{} {} {}", hit as u8, pattern, word)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
use itertools::Itertools;

#[test]
fn full_match_judges_the_whole_word() {
    let m = Matcher::compile("a").unwrap();
    assert_eq!(m.pattern(), "a");
    assert!(m.full_match("a"));
    assert!(!m.full_match(""));
    assert!(!m.full_match("aa"));

    // substring and prefix hits must not count
    let m = Matcher::compile("b").unwrap();
    assert!(!m.full_match("ab"));
    assert!(!m.full_match("ba"));

    assert!(Matcher::compile("").unwrap().full_match(""));
    assert!(!Matcher::compile("").unwrap().full_match("a"));
    assert!(Matcher::compile("a*").unwrap().full_match(""));
    assert!(Matcher::compile("a*").unwrap().full_match("aaaa"));
    assert!(!Matcher::compile("a|b").unwrap().full_match("c"));
    assert!(Matcher::compile("(a|b)+").unwrap().full_match("aabba"));
    assert!(!Matcher::compile("(a|b)+").unwrap().full_match("aacba"));
}

#[test]
fn stacked_repeat_is_a_compile_error() {
    let err = Matcher::compile("a**").unwrap_err();
    match &err {
        Error::BadPattern { pattern, .. } => assert_eq!(pattern, "a**"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("a**"));
}

#[test]
fn every_synthesized_pattern_compiles() {
    for pattern in PatternTable::build(MAX_TIER).patterns() {
        Matcher::compile(&pattern).unwrap();
    }
}

#[test]
fn non_matches_are_reported_only_when_both_sides_are_short() {
    assert!(reportable(true, "abcde", "aabba"));
    assert!(reportable(false, "a|b", "c"));
    assert!(reportable(false, "", ""));
    assert!(!reportable(false, "abcde", "c"));
    assert!(!reportable(false, "a|b", "aabba"));
}

#[test]
fn corpus_run_matches_the_reference_totals() {
    use pretty_assertions::assert_eq;

    let mut out = Vec::new();
    run(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    // the empty pattern against the empty word comes first
    assert!(text.starts_with("1  \n"));
    assert!(text.contains("\n1 a a\n"));
    assert!(text.contains("\n0 a \n"));
    assert!(text.contains("\n1 a* \n"));
    assert!(text.contains("\n0 a|b c\n"));

    let lines = text.lines().collect_vec();
    assert_eq!(lines.len(), 109238);
    let hits = lines.iter().filter(|line| line.starts_with('1')).count();
    assert_eq!(hits, 20048);

    for line in &lines {
        let fields = line.splitn(3, ' ').collect_vec();
        assert_eq!(fields.len(), 3);
        assert!(fields[0] == "0" || fields[0] == "1", "{}", line);
        if fields[0] == "0" {
            assert!(
                fields[1].len() < SHOW_LIMIT && fields[2].len() < SHOW_LIMIT,
                "{}",
                line
            );
        }
    }
}

#[test]
fn corpus_run_is_reproducible() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    run(&mut first).unwrap();
    run(&mut second).unwrap();
    assert_eq!(first, second);
}
