//! Term matcher service - finds work-in-progress terms in text
//!
//! This module contains pure matching logic with no I/O dependencies.
//!
//! Terms are matched literally and case-insensitively. A term that contains
//! at least one ASCII word character (`[A-Za-z0-9_]`) only matches when it is
//! not glued to other word characters, so `wip` does not match inside
//! `whippet`. A term made only of non-word characters, such as `🚧`, is
//! matched anywhere: a word-boundary rule would never let a standalone emoji
//! match at all.
//!
//! Case folding is Unicode simple folding, so non-ASCII letters that fold to
//! ASCII count as equal: `ſquash!` matches the term `squash!` and the Kelvin
//! sign (U+212A) matches `k`. Word boundaries stay ASCII-only.

use regex::{Regex, RegexBuilder};

use crate::core::models::{Location, Section, TermMatch};

/// A compiled, ordered set of terms
#[derive(Debug, Clone)]
pub struct TermMatcher {
    /// Alternation of every term, used to jump to candidate positions
    any: Option<Regex>,
    /// Terms in declaration order
    terms: Vec<CompiledTerm>,
}

#[derive(Debug, Clone)]
struct CompiledTerm {
    /// The term anchored at the start of the haystack
    anchored: Regex,
    /// Whether the term must sit between non-word characters
    bounded: bool,
}

impl TermMatcher {
    /// Compile a term list. Empty terms are ignored.
    ///
    /// Terms are escaped, so compilation only fails when the combined pattern
    /// exceeds the regex size limit.
    pub fn new<S: AsRef<str>>(terms: &[S]) -> Result<Self, regex::Error> {
        let literals: Vec<&str> =
            terms.iter().map(AsRef::as_ref).filter(|t| !t.is_empty()).collect();

        if literals.is_empty() {
            return Ok(Self {
                any: None,
                terms: Vec::new(),
            });
        }

        let alternation =
            literals.iter().map(|t| regex::escape(t)).collect::<Vec<_>>().join("|");
        let any = RegexBuilder::new(&alternation).case_insensitive(true).build()?;

        let terms = literals
            .iter()
            .map(|t| {
                let anchored = RegexBuilder::new(&format!(r"\A(?:{})", regex::escape(t)))
                    .case_insensitive(true)
                    .build()?;
                Ok(CompiledTerm {
                    anchored,
                    bounded: t.chars().any(is_word_char),
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self {
            any: Some(any),
            terms,
        })
    }

    /// Find the first term occurring in `text`
    ///
    /// The earliest position wins. When several terms start at the same
    /// position, the first declared term that satisfies its boundary rule
    /// wins. Returns the matched slice of `text`.
    #[must_use]
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        let any = self.any.as_ref()?;
        let mut pos = 0;

        while pos <= text.len() {
            let candidate = any.find_at(text, pos)?;
            let start = candidate.start();
            if let Some(found) = self.match_at(text, start) {
                return Some(found);
            }
            // Retry from the next character: a shorter or longer term may
            // still satisfy its boundary further on.
            pos = start + text[start..].chars().next().map_or(1, char::len_utf8);
        }

        None
    }

    fn match_at<'t>(&self, text: &'t str, start: usize) -> Option<&'t str> {
        let open_before = text[..start].chars().next_back().is_none_or(|c| !is_word_char(c));
        let rest = &text[start..];

        self.terms.iter().find_map(|term| {
            let end = start + term.anchored.find(rest)?.end();
            if term.bounded {
                let open_after = text[end..].chars().next().is_none_or(|c| !is_word_char(c));
                if !(open_before && open_after) {
                    return None;
                }
            }
            Some(&text[start..end])
        })
    }
}

/// A section's terms compiled once and bound to its locations
#[derive(Debug, Clone)]
pub struct SectionMatcher {
    locations: Vec<Location>,
    matcher: TermMatcher,
}

impl SectionMatcher {
    /// Compile the terms of a section
    pub fn new(section: &Section) -> Result<Self, regex::Error> {
        Ok(Self {
            locations: section.locations.clone(),
            matcher: TermMatcher::new(&section.terms)?,
        })
    }

    /// Whether the section searches `location`
    #[must_use]
    pub fn covers(&self, location: Location) -> bool {
        self.locations.contains(&location)
    }

    /// Probe the candidate texts of one location, in order
    ///
    /// Returns `None` without running any regex when the section does not
    /// search `location`.
    #[must_use]
    pub fn probe<S: AsRef<str>>(&self, location: Location, candidates: &[S]) -> Option<TermMatch> {
        if !self.covers(location) {
            return None;
        }

        candidates.iter().map(AsRef::as_ref).find_map(|text| {
            self.matcher.find(text).map(|term| TermMatch {
                location,
                text: text.to_string(),
                term: term.to_string(),
            })
        })
    }
}

/// Find the first of `terms` in `text`
///
/// Convenience wrapper compiling a [`TermMatcher`] for a single lookup.
/// Returns `None` when the term list cannot be compiled.
#[must_use]
pub fn match_terms<S: AsRef<str>>(terms: &[S], text: &str) -> Option<String> {
    TermMatcher::new(terms).ok()?.find(text).map(ToString::to_string)
}

/// Probe a single text against a section
#[must_use]
pub fn probe(section: &Section, location: Location, text: &str) -> Option<TermMatch> {
    if !section.covers(location) {
        return None;
    }
    SectionMatcher::new(section).ok()?.probe(location, &[text])
}

/// ASCII word character, as in `[A-Za-z0-9_]`
const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
