//! ### English
//! Fuzzy subsequence scoring for command palettes and file pickers.
//!
//! Scoring rules:
//! - ASCII spaces are skipped in both strings.
//! - ASCII letters compare case-insensitively; everything else compares exactly.
//! - A match adds `run * 10` (run = consecutive matches before it), minus 1 if the case differs.
//! - A mismatch costs 10 and resets the run.
//! - Code points left in the candidate after the pattern is used up cost 1 each.
//!
//! ### 中文
//! 供命令面板与文件选择器使用的模糊子序列打分。
//!
//! 打分规则：
//! - 两个字符串中的 ASCII 空格都会被跳过。
//! - ASCII 字母忽略大小写比较，其它码点精确比较。
//! - 匹配时加 `run * 10`（run 为之前连续匹配的次数），若大小写不同再减 1。
//! - 不匹配扣 10 分并重置 run。
//! - pattern 用完后，candidate 剩余的每个码点扣 1 分。

use super::utf8::{decode_lenient, length_in_codepoints};

/// ### English
/// Scores `candidate` against `pattern`.
///
/// Returns `None` when the pattern is not a (space-insensitive, ASCII case-insensitive)
/// subsequence of the candidate. A very negative score is still a match.
///
/// ### 中文
/// 计算 `candidate` 相对 `pattern` 的得分。
///
/// 若 pattern 不是 candidate 的子序列（忽略空格与 ASCII 大小写）则返回 `None`。
/// 即使分数非常低，也仍然算作匹配。
pub fn fuzzy_match(candidate: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>) -> Option<i32> {
    let mut candidate = candidate.as_ref();
    let mut pattern = pattern.as_ref();
    let mut score: i32 = 0;
    let mut run: i32 = 0;

    while !candidate.is_empty() && !pattern.is_empty() {
        candidate = skip_spaces(candidate);
        pattern = skip_spaces(pattern);
        if candidate.is_empty() || pattern.is_empty() {
            break;
        }

        let (candidate_cp, candidate_len) = decode_lenient(candidate);
        let (pattern_cp, pattern_len) = decode_lenient(pattern);

        if fold_ascii(candidate_cp) == fold_ascii(pattern_cp) {
            let case_penalty = i32::from(candidate_cp != pattern_cp);
            score = score.saturating_add(run.saturating_mul(10) - case_penalty);
            run = run.saturating_add(1);
            pattern = &pattern[pattern_len..];
        } else {
            score = score.saturating_sub(10);
            run = 0;
        }
        candidate = &candidate[candidate_len..];
    }

    if !skip_spaces(pattern).is_empty() {
        return None;
    }

    let remaining = i32::try_from(length_in_codepoints(candidate)).unwrap_or(i32::MAX);
    Some(score.saturating_sub(remaining))
}

/// ### English
/// One ranked candidate.
///
/// ### 中文
/// 一个已排序的候选项。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ranked<'a> {
    pub candidate: &'a str,
    pub score: i32,
}

/// ### English
/// Scores every candidate and returns the matches, best first.
/// Candidates with equal scores keep their input order.
///
/// ### 中文
/// 为每个候选项打分并返回匹配项，分数高者在前。
/// 分数相同的候选项保持输入顺序。
pub fn rank<'a, I>(candidates: I, pattern: &str) -> Vec<Ranked<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut ranked: Vec<Ranked<'a>> = candidates
        .into_iter()
        .filter_map(|candidate| {
            fuzzy_match(candidate, pattern).map(|score| Ranked { candidate, score })
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

#[inline]
fn skip_spaces(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != b' ').unwrap_or(bytes.len());
    &bytes[start..]
}

#[inline]
fn fold_ascii(codepoint: u32) -> u32 {
    if codepoint <= 0x7F {
        u32::from((codepoint as u8).to_ascii_lowercase())
    } else {
        codepoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsequence_matches() {
        assert!(fuzzy_match("hello world", "hw").is_some());
        // h(0) e l l o -40, space skipped, w(0), 4 left over.
        assert_eq!(fuzzy_match("hello world", "hw"), Some(-44));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(fuzzy_match("hello", "xyz"), None);
        assert_eq!(fuzzy_match("ab", "ba"), None);
        assert_eq!(fuzzy_match("", "a"), None);
    }

    #[test]
    fn test_case_exact_bonus() {
        let folded = fuzzy_match("Hello", "hello");
        let exact = fuzzy_match("Hello", "Hello");
        assert_eq!(exact, Some(100));
        assert_eq!(folded, Some(99));
        assert!(folded < exact);
    }

    #[test]
    fn test_contiguous_beats_scattered() {
        let contiguous = fuzzy_match("abcxyz", "abc").unwrap();
        let scattered = fuzzy_match("axbycz", "abc").unwrap();
        assert!(contiguous > scattered);
    }

    #[test]
    fn test_empty_pattern_scores_negative_length() {
        assert_eq!(fuzzy_match("hello", ""), Some(-5));
        assert_eq!(fuzzy_match("héllo", ""), Some(-5));
        assert_eq!(fuzzy_match("", ""), Some(0));
    }

    #[test]
    fn test_spaces_are_skipped() {
        assert_eq!(fuzzy_match("a b", "ab"), fuzzy_match("ab", "ab"));
        assert_eq!(fuzzy_match("ab", "a b"), fuzzy_match("ab", "ab"));
        assert_eq!(fuzzy_match("ab", "ab  "), Some(10));
        assert_eq!(fuzzy_match("ab  ", "a"), Some(-3));
    }

    #[test]
    fn test_non_ascii_compares_exactly() {
        assert_eq!(fuzzy_match("ÉCOLE", "école"), None);
        assert_eq!(fuzzy_match("école", "école"), Some(100));
        assert_eq!(fuzzy_match("日本語", "本"), Some(-11));
    }

    #[test]
    fn test_malformed_bytes_fall_back_to_single_bytes() {
        assert_eq!(fuzzy_match(b"a\xFFb", b"ab"), Some(-10));
        assert_eq!(fuzzy_match(b"\xFF", b"\xFF"), Some(0));
    }

    #[test]
    fn test_rank_orders_best_first() {
        let ranked = rank(["core/docview.lua", "core/doc.lua", "plugins/tabularize.lua"], "doc");
        let names: Vec<&str> = ranked.iter().map(|r| r.candidate).collect();
        assert_eq!(names, vec!["core/doc.lua", "core/docview.lua"]);
        assert!(ranked[0].score > ranked[1].score);
    }
}
