// Copyright 2025 Fernando Borretti
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

//! Approximate string comparison used to grade typed answers.

/// Similarity scores strictly above this are accepted as correct.
pub const ACCEPT_THRESHOLD: f64 = 75.0;

/// Lowercase ASCII letters, leaving everything else untouched.
pub fn normalize(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Levenshtein distance between two strings, counted in characters.
///
/// Insertion, deletion and substitution each cost one. Comparison is
/// case-sensitive.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // table[i][j] is the distance between the first i chars of `a` and the
    // first j chars of `b`.
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + cost);
        }
    }

    table[a.len()][b.len()]
}

/// Similarity as a percentage in `[0, 100]`, derived from the edit distance
/// relative to the longer string.
///
/// Two empty strings are identical, so they score 100.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 100.0;
    }
    let distance = levenshtein_distance(a, b);
    100.0 - (distance as f64 / max_len as f64 * 100.0)
}

/// Whether a typed answer is close enough to the expected one.
///
/// Both sides are normalized first, so case never counts as an edit.
pub fn is_accepted(typed: &str, expected: &str) -> bool {
    similarity(&normalize(typed), &normalize(expected)) > ACCEPT_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Hello, World!"), "hello, world!");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("123 #Intro"), "123 #intro");
        // Non-ASCII passes through unchanged.
        assert_eq!(normalize("ÉCOLE"), "École");
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("saturday", "sunday"), 3);
        assert_eq!(levenshtein_distance("Paris", "paris"), 1);
    }

    #[test]
    fn test_similarity_identity() {
        for s in ["a", "Paris", "The quick brown fox", "ünïcödé"] {
            assert_eq!(similarity(s, s), 100.0);
        }
    }

    #[test]
    fn test_similarity_both_empty() {
        assert_eq!(similarity("", ""), 100.0);
    }

    #[test]
    fn test_similarity_one_empty() {
        assert_eq!(similarity("", "abc"), 0.0);
        assert_eq!(similarity("abc", ""), 0.0);
    }

    #[test]
    fn test_similarity_symmetry() {
        let pairs = [
            ("kitten", "sitting"),
            ("pariss", "paris"),
            ("", "x"),
            ("abc", "xyz"),
            ("London", "Londres"),
        ];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }

    #[test]
    fn test_similarity_bounds() {
        let pairs = [("abc", "xyz"), ("a", "bcdefgh"), ("kitten", "sitting")];
        for (a, b) in pairs {
            let score = similarity(a, b);
            assert!((0.0..=100.0).contains(&score));
        }
        assert_eq!(similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_similarity_decreases_with_edits() {
        let base = "abcdefgh";
        let one = similarity(base, "xbcdefgh");
        let two = similarity(base, "xycdefgh");
        let three = similarity(base, "xyzdefgh");
        assert!(100.0 > one);
        assert!(one > two);
        assert!(two > three);
    }

    #[test]
    fn test_similarity_is_case_sensitive() {
        assert!(similarity("Paris", "paris") < 100.0);
    }

    #[test]
    fn test_accept_typo() {
        // One extra letter out of six: 83.3%.
        assert!(is_accepted("pariss", "Paris"));
        assert!(is_accepted("Paris", "Paris"));
        assert!(is_accepted("PARIS", "paris"));
    }

    #[test]
    fn test_reject_at_threshold() {
        // One substitution out of four is exactly 75%, which is not enough.
        assert_eq!(similarity("abcd", "abce"), 75.0);
        assert!(!is_accepted("abcd", "abce"));
    }

    #[test]
    fn test_reject_wrong_answer() {
        assert!(!is_accepted("London", "Paris"));
        assert!(!is_accepted("", "Paris"));
    }
}
