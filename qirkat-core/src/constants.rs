//! 棋盘常量定义

/// 棋盘边长（行数 = 列数）
pub const BOARD_SIZE: usize = 5;

/// 格子总数
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 最大格子索引
pub const MAX_INDEX: usize = SQUARE_COUNT - 1;

/// 列字母范围
pub const FIRST_COL: char = 'a';
pub const LAST_COL: char = 'e';

/// 行号范围
pub const FIRST_ROW: char = '1';
pub const LAST_ROW: char = '5';

/// 弃权走法的记号
pub const PASS_TOKEN: &str = "-";
