//! 只读棋盘快照

use std::ops::Deref;

use crate::board::Board;

/// 棋盘的只读快照
///
/// 持有一份独立拷贝，通过 `Deref` 提供棋盘的全部只读访问，
/// 不提供任何修改方法。原棋盘之后的变化不会反映到快照上。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot(Board);

impl BoardSnapshot {
    pub(crate) fn new(board: Board) -> Self {
        Self(board)
    }

    /// 取出一份可修改的拷贝（与快照互不影响）
    pub fn to_board(&self) -> Board {
        self.0.clone()
    }
}

impl Deref for BoardSnapshot {
    type Target = Board;

    fn deref(&self) -> &Board {
        &self.0
    }
}
