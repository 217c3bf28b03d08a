//! ### English
//! Text helpers shared by the event pipeline and the scripting layer: the UTF-8 codec and
//! the fuzzy matcher.
//!
//! ### 中文
//! 事件管线与脚本层共用的文本工具：UTF-8 编解码与模糊匹配。
pub mod fuzzy;
pub mod utf8;

pub use fuzzy::{Ranked, fuzzy_match, rank};
pub use utf8::{
    CodePoints, DecodeError, EncodedChar, MAX_CODEPOINT, code_points, decode, decode_lenient,
    encode, is_valid, length_in_codepoints,
};
