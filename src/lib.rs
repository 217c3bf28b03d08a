//! ### English
//! `aki_input` crate root.
//!
//! Translates raw windowing-backend notifications into the editor's semantic event
//! vocabulary, and provides the UTF-8 and fuzzy-matching helpers the scripting layer uses.
//! Exposes a C ABI via `ffi`; the Rust API lives under `engine`.
//!
//! ### 中文
//! `aki_input` 的 crate 根。
//!
//! 将窗口后端的原始通知转换为编辑器的语义事件词汇，并提供脚本层使用的 UTF-8 与模糊匹配工具。
//! 通过 `ffi` 导出 C ABI；Rust API 位于 `engine` 模块。
pub mod engine;
mod ffi;

pub use engine::host::{Clock, ManualClock, MonotonicClock, SharedWindowSize, SizeSource};
pub use engine::input::{EVENT_QUEUE_CAPACITY, EventQueue, EventReceiver};
pub use engine::input_types::{AkiRawEvent, RawEvent};
pub use engine::normalizer::{EventNormalizer, NormalizerConfig};
pub use engine::semantic::SemanticEvent;
pub use ffi::{AkiInput, AkiSemanticEvent};
