//! ### English
//! UTF-8 encode/decode helpers working on raw bytes.
//!
//! Decoding only checks the lead-byte pattern and that continuation bytes look like
//! `10xxxxxx`. Overlong forms and surrogate code points are accepted on purpose: text coming
//! from files may be slightly malformed and the editor must keep working on it.
//!
//! ### 中文
//! 基于原始字节的 UTF-8 编码/解码工具。
//!
//! 解码只检查首字节模式以及后续字节是否形如 `10xxxxxx`。超长编码（overlong）和代理区码点
//! 会被刻意接受：来自文件的文本可能略有损坏，编辑器必须能继续处理。

use std::fmt;

/// ### English
/// Largest Unicode scalar value accepted by `encode`.
///
/// ### 中文
/// `encode` 接受的最大 Unicode 码点。
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// ### English
/// One encoded code point (1–4 bytes, inline). Zero length means the encode failed.
///
/// ### 中文
/// 一个已编码码点（1–4 字节，内联存储）。长度为 0 表示编码失败。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EncodedChar {
    bytes: [u8; 4],
    len: u8,
}

impl EncodedChar {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// ### English
    /// Returns the bytes as `&str`, or `None` for sequences Rust strings reject (surrogates).
    ///
    /// ### 中文
    /// 以 `&str` 返回字节；对于 Rust 字符串不接受的序列（代理区）返回 `None`。
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }
}

/// ### English
/// Why a byte sequence failed to decode.
///
/// ### 中文
/// 字节序列解码失败的原因。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// ### English
    /// No bytes to decode.
    ///
    /// ### 中文
    /// 没有可解码的字节。
    Empty,
    /// ### English
    /// The first byte matches none of the lead-byte patterns.
    ///
    /// ### 中文
    /// 首字节不匹配任何首字节模式。
    InvalidLeadByte(u8),
    /// ### English
    /// A continuation byte is not of the form `10xxxxxx`.
    ///
    /// ### 中文
    /// 后续字节不是 `10xxxxxx` 形式。
    InvalidContinuation { offset: usize, byte: u8 },
    /// ### English
    /// The input ended in the middle of a sequence.
    ///
    /// ### 中文
    /// 输入在序列中途结束。
    Truncated { expected: usize, available: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Empty => f.write_str("empty input"),
            DecodeError::InvalidLeadByte(byte) => write!(f, "invalid UTF-8 lead byte {byte:#04x}"),
            DecodeError::InvalidContinuation { offset, byte } => {
                write!(f, "invalid UTF-8 continuation byte {byte:#04x} at offset {offset}")
            }
            DecodeError::Truncated {
                expected,
                available,
            } => write!(
                f,
                "truncated UTF-8 sequence: expected {expected} bytes, found {available}"
            ),
        }
    }
}

impl std::error::Error for DecodeError {}

/// ### English
/// Encodes one code point. Returns an empty `EncodedChar` if `codepoint > 0x10FFFF`.
///
/// ### 中文
/// 编码一个码点。若 `codepoint > 0x10FFFF` 则返回空的 `EncodedChar`。
pub fn encode(codepoint: u32) -> EncodedChar {
    let mut bytes = [0u8; 4];
    let len = if codepoint <= 0x7F {
        bytes[0] = codepoint as u8;
        1
    } else if codepoint <= 0x7FF {
        bytes[0] = (0xC0 | (codepoint >> 6)) as u8;
        bytes[1] = (0x80 | (codepoint & 0x3F)) as u8;
        2
    } else if codepoint <= 0xFFFF {
        bytes[0] = (0xE0 | (codepoint >> 12)) as u8;
        bytes[1] = (0x80 | ((codepoint >> 6) & 0x3F)) as u8;
        bytes[2] = (0x80 | (codepoint & 0x3F)) as u8;
        3
    } else if codepoint <= MAX_CODEPOINT {
        bytes[0] = (0xF0 | (codepoint >> 18)) as u8;
        bytes[1] = (0x80 | ((codepoint >> 12) & 0x3F)) as u8;
        bytes[2] = (0x80 | ((codepoint >> 6) & 0x3F)) as u8;
        bytes[3] = (0x80 | (codepoint & 0x3F)) as u8;
        4
    } else {
        0
    };
    EncodedChar { bytes, len }
}

/// ### English
/// Decodes the code point at the start of `bytes`.
///
/// Returns `(codepoint, bytes_consumed)`.
///
/// ### 中文
/// 解码 `bytes` 开头的码点。
///
/// 返回 `(码点, 消耗的字节数)`。
pub fn decode(bytes: &[u8]) -> Result<(u32, usize), DecodeError> {
    let Some(&lead) = bytes.first() else {
        return Err(DecodeError::Empty);
    };

    let (len, initial) = if lead <= 0x7F {
        return Ok((u32::from(lead), 1));
    } else if lead & 0xE0 == 0xC0 {
        (2, u32::from(lead & 0x1F))
    } else if lead & 0xF0 == 0xE0 {
        (3, u32::from(lead & 0x0F))
    } else if lead & 0xF8 == 0xF0 {
        (4, u32::from(lead & 0x07))
    } else {
        return Err(DecodeError::InvalidLeadByte(lead));
    };

    let mut codepoint = initial;
    for offset in 1..len {
        let Some(&byte) = bytes.get(offset) else {
            return Err(DecodeError::Truncated {
                expected: len,
                available: bytes.len(),
            });
        };
        if byte & 0xC0 != 0x80 {
            return Err(DecodeError::InvalidContinuation { offset, byte });
        }
        codepoint = (codepoint << 6) | u32::from(byte & 0x3F);
    }
    Ok((codepoint, len))
}

/// ### English
/// Lenient decode step: on failure the first byte counts as one code point (its byte value).
///
/// `bytes` must not be empty.
///
/// ### 中文
/// 宽松解码一步：失败时把首字节当作一个码点（取其字节值）。
///
/// `bytes` 不能为空。
#[inline]
pub fn decode_lenient(bytes: &[u8]) -> (u32, usize) {
    match decode(bytes) {
        Ok(decoded) => decoded,
        Err(_) => (bytes.first().map_or(0, |&b| u32::from(b)), 1),
    }
}

/// ### English
/// Strict validation: `false` on the first sequence that fails to decode.
///
/// ### 中文
/// 严格校验：遇到第一个无法解码的序列即返回 `false`。
pub fn is_valid(bytes: &[u8]) -> bool {
    let mut rest = bytes;
    while !rest.is_empty() {
        match decode(rest) {
            Ok((_, consumed)) => rest = &rest[consumed..],
            Err(_) => return false,
        }
    }
    true
}

/// ### English
/// Counts code points, counting each undecodable byte as one (display-length estimation).
///
/// ### 中文
/// 统计码点数量；每个无法解码的字节计为一个（用于显示长度估算）。
pub fn length_in_codepoints(bytes: &[u8]) -> usize {
    code_points(bytes).count()
}

/// ### English
/// Iterates code points with the lenient decode step.
///
/// ### 中文
/// 使用宽松解码逐个迭代码点。
pub fn code_points(bytes: &[u8]) -> CodePoints<'_> {
    CodePoints { rest: bytes }
}

/// ### English
/// Iterator returned by [`code_points`].
///
/// ### 中文
/// [`code_points`] 返回的迭代器。
#[derive(Clone, Debug)]
pub struct CodePoints<'a> {
    rest: &'a [u8],
}

impl<'a> CodePoints<'a> {
    /// ### English
    /// Bytes not yet consumed.
    ///
    /// ### 中文
    /// 尚未消耗的字节。
    pub fn as_bytes(&self) -> &'a [u8] {
        self.rest
    }
}

impl Iterator for CodePoints<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.rest.is_empty() {
            return None;
        }
        let (codepoint, consumed) = decode_lenient(self.rest);
        self.rest = &self.rest[consumed..];
        Some(codepoint)
    }
}
