//! ### English
//! Fuzzy matching and UTF-8 helpers for the scripting layer.
//!
//! ### 中文
//! 供脚本层使用的模糊匹配与 UTF-8 工具。

use crate::engine::text::{encode, fuzzy_match, is_valid, length_in_codepoints};

use super::bytes_from_raw;

#[unsafe(no_mangle)]
/// ### English
/// Scores `candidate` against `pattern`.
///
/// Returns `false` when the pattern does not match (or a required pointer is NULL);
/// `*out_score` is written only on `true`.
///
/// #### Parameters
/// - `candidate` / `candidate_len`: Candidate bytes.
/// - `pattern` / `pattern_len`: Pattern bytes.
/// - `out_score`: Output score (required).
///
/// ### 中文
/// 计算 `candidate` 相对 `pattern` 的得分。
///
/// pattern 不匹配（或必需的指针为 NULL）时返回 `false`；仅在返回 `true` 时写入 `*out_score`。
///
/// #### 参数
/// - `candidate` / `candidate_len`：候选字节串。
/// - `pattern` / `pattern_len`：pattern 字节串。
/// - `out_score`：输出分数（必填）。
pub unsafe extern "C" fn aki_fuzzy_match(
    candidate: *const u8,
    candidate_len: usize,
    pattern: *const u8,
    pattern_len: usize,
    out_score: *mut i32,
) -> bool {
    if out_score.is_null() {
        return false;
    }
    let (Some(candidate), Some(pattern)) = (unsafe {
        (
            bytes_from_raw(candidate, candidate_len),
            bytes_from_raw(pattern, pattern_len),
        )
    }) else {
        return false;
    };
    let Some(score) = fuzzy_match(candidate, pattern) else {
        return false;
    };
    unsafe { out_score.write(score) };
    true
}

#[unsafe(no_mangle)]
/// ### English
/// Returns whether the bytes form a complete sequence of well-formed code points.
/// The empty string is valid; a NULL pointer with a non-zero length is not.
///
/// ### 中文
/// 返回字节串是否由完整、格式正确的码点组成。空串合法；NULL 指针且长度非 0 时不合法。
pub unsafe extern "C" fn aki_utf8_is_valid(bytes: *const u8, len: usize) -> bool {
    unsafe { bytes_from_raw(bytes, len) }.is_some_and(is_valid)
}

#[unsafe(no_mangle)]
/// ### English
/// Counts code points; malformed lead bytes count as one each.
///
/// ### 中文
/// 统计码点数；格式错误的首字节各计为一个。
pub unsafe extern "C" fn aki_utf8_length(bytes: *const u8, len: usize) -> usize {
    unsafe { bytes_from_raw(bytes, len) }.map_or(0, length_in_codepoints)
}

#[unsafe(no_mangle)]
/// ### English
/// Encodes `codepoint` into `out_bytes` and returns the byte count (0 if out of range).
///
/// #### Parameters
/// - `codepoint`: Code point to encode.
/// - `out_bytes`: Buffer of at least 4 bytes.
///
/// ### 中文
/// 将 `codepoint` 编码到 `out_bytes`，返回字节数（超出范围时为 0）。
///
/// #### 参数
/// - `codepoint`：要编码的码点。
/// - `out_bytes`：至少 4 字节的缓冲区。
pub unsafe extern "C" fn aki_utf8_encode(codepoint: u32, out_bytes: *mut u8) -> u32 {
    if out_bytes.is_null() {
        return 0;
    }
    let encoded = encode(codepoint);
    let bytes = encoded.as_bytes();
    unsafe { std::ptr::copy_nonoverlapping(bytes.as_ptr(), out_bytes, bytes.len()) };
    bytes.len() as u32
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;

    #[test]
    fn test_fuzzy_match_writes_score() {
        let candidate = b"hello world";
        let mut score = 0;
        let matched = unsafe {
            aki_fuzzy_match(candidate.as_ptr(), candidate.len(), b"hw".as_ptr(), 2, &mut score)
        };
        assert!(matched);
        assert_eq!(score, -44);
    }

    #[test]
    fn test_fuzzy_no_match_leaves_score() {
        let mut score = 7;
        let matched = unsafe { aki_fuzzy_match(b"ab".as_ptr(), 2, b"ba".as_ptr(), 2, &mut score) };
        assert!(!matched);
        assert_eq!(score, 7);
        assert!(!unsafe { aki_fuzzy_match(b"ab".as_ptr(), 2, b"a".as_ptr(), 1, ptr::null_mut()) });
    }

    #[test]
    fn test_empty_pattern_via_null() {
        let mut score = 0;
        assert!(unsafe { aki_fuzzy_match(b"abc".as_ptr(), 3, ptr::null(), 0, &mut score) });
        assert_eq!(score, -3);
    }

    #[test]
    fn test_utf8_exports() {
        let text = "héllo".as_bytes();
        unsafe {
            assert!(aki_utf8_is_valid(text.as_ptr(), text.len()));
            assert!(aki_utf8_is_valid(ptr::null(), 0));
            assert!(!aki_utf8_is_valid(ptr::null(), 1));
            assert!(!aki_utf8_is_valid(b"\xC3".as_ptr(), 1));
            assert_eq!(aki_utf8_length(text.as_ptr(), text.len()), 5);
            assert_eq!(aki_utf8_length(ptr::null(), 9), 0);
        }

        let mut buffer = [0u8; 4];
        assert_eq!(unsafe { aki_utf8_encode(0x20AC, buffer.as_mut_ptr()) }, 3);
        assert_eq!(&buffer[..3], "€".as_bytes());
        assert_eq!(unsafe { aki_utf8_encode(0x110000, buffer.as_mut_ptr()) }, 0);
        assert_eq!(unsafe { aki_utf8_encode(0x41, ptr::null_mut()) }, 0);
    }
}
