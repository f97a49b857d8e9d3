//! 棋子颜色与格子定义

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, FIRST_COL, FIRST_ROW, SQUARE_COUNT};

/// 格子内容：空、白子或黑子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PieceColor {
    /// 空格
    #[default]
    Empty,
    /// 白方（先手，在下方）
    White,
    /// 黑方（后手，在上方）
    Black,
}

impl PieceColor {
    /// 获取对方颜色
    ///
    /// 对空格调用属于前置条件错误，直接 panic。
    pub fn opposite(&self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
            PieceColor::Empty => panic!("opposite() called on an empty square"),
        }
    }

    /// 是否为棋子（非空格）
    pub fn is_piece(&self) -> bool {
        !matches!(self, PieceColor::Empty)
    }

    /// 棋盘显示用的单字符
    pub fn short_name(&self) -> char {
        match self {
            PieceColor::White => 'w',
            PieceColor::Black => 'b',
            PieceColor::Empty => '-',
        }
    }

    /// 从布局字符解析（只接受 `w`、`b`、`-`）
    pub fn from_short_name(c: char) -> Option<PieceColor> {
        match c {
            'w' => Some(PieceColor::White),
            'b' => Some(PieceColor::Black),
            '-' => Some(PieceColor::Empty),
            _ => None,
        }
    }
}

impl std::fmt::Display for PieceColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceColor::White => "White",
            PieceColor::Black => "Black",
            PieceColor::Empty => "Empty",
        };
        f.write_str(name)
    }
}

/// 棋盘格子，线性索引 0..24
///
/// 行 = index / 5（0 为最下一行），列 = index % 5。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl Square {
    /// 创建新格子
    pub fn new(index: usize) -> Option<Self> {
        if index < SQUARE_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// 创建新格子（越界直接 panic，内部使用）
    pub const fn new_unchecked(index: usize) -> Self {
        assert!(index < SQUARE_COUNT, "square index out of range");
        Self(index as u8)
    }

    /// 由行列坐标创建
    pub fn from_coords(col: usize, row: usize) -> Option<Self> {
        if col < BOARD_SIZE && row < BOARD_SIZE {
            Some(Self((row * BOARD_SIZE + col) as u8))
        } else {
            None
        }
    }

    /// 由记号字符创建，列 'a'..'e'，行 '1'..'5'
    pub fn from_chars(col: char, row: char) -> Option<Self> {
        if !col.is_ascii_lowercase() || !row.is_ascii_digit() {
            return None;
        }
        let c = (col as u8).checked_sub(FIRST_COL as u8)? as usize;
        let r = (row as u8).checked_sub(FIRST_ROW as u8)? as usize;
        Self::from_coords(c, r)
    }

    /// 线性索引
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn row(&self) -> usize {
        self.index() / BOARD_SIZE
    }

    pub fn col(&self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// 列字母
    pub fn col_char(&self) -> char {
        (FIRST_COL as u8 + self.col() as u8) as char
    }

    /// 行号字符
    pub fn row_char(&self) -> char {
        (FIRST_ROW as u8 + self.row() as u8) as char
    }

    /// 所有格子，按索引升序
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT).map(Square::new_unchecked)
    }
}

impl TryFrom<u8> for Square {
    type Error = String;

    fn try_from(index: u8) -> std::result::Result<Self, Self::Error> {
        Square::new(index as usize).ok_or_else(|| format!("square index {} out of range", index))
    }
}

impl From<Square> for u8 {
    fn from(sq: Square) -> u8 {
        sq.0
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.col_char(), self.row_char())
    }
}
