//! ### English
//! Engine internals: raw event types, the bounded queue, the normalizer state machine,
//! the host boundary and the text helpers.
//!
//! ### 中文
//! 引擎内部模块：原始事件类型、有界队列、normalizer 状态机、宿主边界与文本工具。
pub mod flags;
pub mod host;
pub mod input;
pub mod input_types;
pub mod normalizer;
pub mod semantic;
pub mod text;
