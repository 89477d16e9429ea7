//! String similarity scores on a 0-100 scale.
//!
//! Similarity between two strings is the normalized indel similarity:
//! `100 * 2 * LCS / (len_a + len_b)`, with lengths and the longest common
//! subsequence measured in chars. [`partial_ratio`] slides the shorter
//! string along the longer one and keeps the best window.

/// Similarity of two whole strings, 0-100. Both empty scores 0.
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

/// Best similarity between the shorter string and any window of the longer.
///
/// Windows start at every char of the longer string and take the shorter
/// string's length, truncated where they run past the end. A window never
/// starts before the first char, so a token whose opening chars are absent
/// from the title cannot match on its tail alone. A substring of the other
/// string scores 100. An empty input scores 0.
///
/// # Arguments
/// * `a`, `b` - Strings to compare, in either order
///
/// # Returns
/// The best window score, 0-100
///
/// ```
/// use matcher::fuzzy::partial_ratio;
///
/// assert_eq!(partial_ratio("incep", "inception"), 100);
/// assert!(partial_ratio("xyz", "inception") < 70);
/// ```
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return 0;
    }

    let n = short.len();
    let mut best = 0;

    for start in 0..long.len() {
        let end = (start + n).min(long.len());
        best = best.max(ratio_chars(&short, &long[start..end]));
        if best == 100 {
            break;
        }
    }

    best
}

fn ratio_chars(a: &[char], b: &[char]) -> u8 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0;
    }
    let lcs = lcs_len(a, b);
    (200.0 * lcs as f64 / total as f64).round() as u8
}

/// Length of the longest common subsequence, two-row DP.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
