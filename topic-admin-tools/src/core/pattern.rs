// Copyright 2024 The Topic Admin Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Case-insensitive wildcard matching for topic paths
//!
//! `*` matches any run of characters (including none) and `?` matches
//! exactly one character. A pattern without either is an exact,
//! case-insensitive comparison; there is no substring matching.

/// Characters that turn a pattern into a wildcard expression
pub const WILDCARD_CHARS: [char; 2] = ['*', '?'];

/// Returns true when `pattern` contains `*` or `?`
#[inline]
pub fn has_wildcards(pattern: &str) -> bool {
    pattern.contains(WILDCARD_CHARS)
}

/// One-shot match of `name` against `pattern`
#[inline]
pub fn matches(pattern: &str, name: &str) -> bool {
    WildcardPattern::new(pattern).is_match(name)
}

/// A parsed wildcard pattern.
///
/// Characters are compared one at a time by their lowercase form, so a
/// character whose lowercase form is several characters long still counts
/// as one for `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardPattern {
    source: String,
    chars: Vec<char>,
}

impl WildcardPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        let source = pattern.into();
        let chars = source.chars().collect();
        Self { source, chars }
    }

    /// The pattern as the operator wrote it
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn has_wildcards(&self) -> bool {
        has_wildcards(&self.source)
    }

    pub fn is_match(&self, name: &str) -> bool {
        let candidate: Vec<char> = name.chars().collect();
        if !self.has_wildcards() {
            return self.chars.len() == candidate.len()
                && self.chars.iter().zip(&candidate).all(|(&a, &b)| same_char(a, b));
        }
        glob_match(&self.chars, &candidate)
    }
}

impl std::fmt::Display for WildcardPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.source)
    }
}

#[inline]
fn same_char(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Iterative matcher that backtracks only to the most recent `*`.
fn glob_match(pattern: &[char], name: &[char]) -> bool {
    let mut p = 0;
    let mut n = 0;
    let mut star: Option<usize> = None;
    let mut resume = 0;

    while n < name.len() {
        match pattern.get(p) {
            Some('*') => {
                star = Some(p);
                p += 1;
                resume = n;
            }
            Some(&c) if c == '?' || same_char(c, name[n]) => {
                p += 1;
                n += 1;
            }
            _ => match star {
                Some(star_at) => {
                    p = star_at + 1;
                    resume += 1;
                    n = resume;
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_pattern_is_exact_and_case_insensitive() {
        assert!(matches("orders", "orders"));
        assert!(matches("orders", "ORDERS"));
        assert!(matches("Orders-2024", "orders-2024"));
        assert!(!matches("orders", "orders-2024"));
        assert!(!matches("orders", "my-orders"));
        assert!(!matches("orders", "order"));
    }

    #[test]
    fn star_matches_any_run() {
        assert!(matches("orders-*", "Orders-2024"));
        assert!(matches("orders-*", "orders-archive"));
        assert!(matches("orders-*", "orders-"));
        assert!(!matches("orders-*", "orders"));
        assert!(matches("*", "anything"));
        assert!(matches("*", ""));
        assert!(matches("*-dlq", "payments-dlq"));
        assert!(matches("a*b*c", "aXXbYYc"));
        assert!(!matches("a*b*c", "aXXbYY"));
    }

    #[test]
    fn question_mark_matches_exactly_one() {
        assert!(matches("topic-?", "topic-1"));
        assert!(matches("topic-?", "TOPIC-A"));
        assert!(!matches("topic-?", "topic-"));
        assert!(!matches("topic-?", "topic-12"));
        assert!(matches("??", "ab"));
    }

    #[test]
    fn question_mark_counts_characters_not_their_lowercase_expansion() {
        // 'İ' lowercases to two characters
        assert!(matches("?", "İ"));
        assert!(!matches("??", "İ"));
        assert!(matches("topic-?", "TOPIC-İ"));
        assert!(matches("İzmir-*", "İZMIR-orders"));
    }

    #[test]
    fn star_backtracks() {
        assert!(matches("*ab", "aaab"));
        assert!(matches("a*a*a", "aaaaa"));
        assert!(!matches("*x*y", "xxxx"));
    }

    #[test]
    fn brackets_are_literal() {
        assert!(matches("[orders]", "[ORDERS]"));
        assert!(!matches("[o]rders", "orders"));
    }

    #[test]
    fn has_wildcards_detects_both_forms() {
        assert!(has_wildcards("a*"));
        assert!(has_wildcards("a?"));
        assert!(!has_wildcards("plain-name"));

        let pattern = WildcardPattern::new("Orders-*");
        assert!(pattern.has_wildcards());
        assert_eq!(pattern.as_str(), "Orders-*");
        assert_eq!(pattern.to_string(), "Orders-*");
    }
}
