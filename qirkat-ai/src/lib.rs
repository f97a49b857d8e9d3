//! Qirkat AI 引擎
//!
//! 包含:
//! - 子力评估函数
//! - 固定深度 Minimax + Alpha-Beta 搜索

mod evaluate;
mod search;

pub use evaluate::Evaluator;
pub use search::{AiConfig, AiEngine, Difficulty, SearchResult, INFINITY, MAX_DEPTH};
