//! Qirkat 规则引擎
//!
//! 包含:
//! - 棋盘几何（米字连线、跳吃落点）
//! - 棋子颜色、格子、走法定义
//! - 走法记号与布局字符串
//! - 强制吃子、最长连跳链的走法生成和验证
//! - 走法执行、静默执行与撤销，回头锁
//! - 变化通知与只读快照

mod board;
mod constants;
mod error;
mod events;
pub mod geometry;
mod layout;
mod movegen;
mod moves;
mod notation;
mod piece;
mod view;


pub use board::{Board, Lock};
pub use constants::*;
pub use error::{QirkatError, Result};
pub use events::{BoardEvent, Listener, ListenerId};
pub use geometry::Direction;
pub use layout::{Layout, INITIAL_LAYOUT};
pub use movegen::MoveGenerator;
pub use moves::{Leg, Move};
pub use notation::Notation;
pub use piece::{PieceColor, Square};
pub use view::BoardSnapshot;
