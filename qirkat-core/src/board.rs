//! 棋盘状态

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::{BOARD_SIZE, SQUARE_COUNT};
use crate::error::{QirkatError, Result};
use crate::events::{BoardEvent, Listener, ListenerId, Listeners};
use crate::geometry::Direction;
use crate::layout::Layout;
use crate::moves::{Leg, Move};
use crate::movegen::MoveGenerator;
use crate::piece::{PieceColor, Square};
use crate::view::BoardSnapshot;

/// 单格的回头锁：禁止棋子沿刚走过的水平方向立即走回去
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Lock {
    #[default]
    None,
    /// 禁止向左
    BlockedLeft,
    /// 禁止向右
    BlockedRight,
}

impl Lock {
    /// 是否禁止沿该方向水平移动
    pub fn blocks(&self, dir: Direction) -> bool {
        matches!(
            (self, dir),
            (Lock::BlockedLeft, Direction::Left) | (Lock::BlockedRight, Direction::Right)
        )
    }

    /// 走完一段后落点应有的锁
    fn after(leg: &Leg) -> Lock {
        if !leg.is_horizontal_step() {
            return Lock::None;
        }
        match leg.direction() {
            Some(Direction::Right) => Lock::BlockedLeft,
            Some(Direction::Left) => Lock::BlockedRight,
            _ => Lock::None,
        }
    }
}

/// 棋盘
///
/// 持有 25 格内容、走子方、回头锁和游戏结束标志。
/// 克隆得到的是完全独立的副本，不会带走订阅者。
#[derive(Debug)]
pub struct Board {
    /// 索引为 row * 5 + col
    squares: [PieceColor; SQUARE_COUNT],
    /// 每格的回头锁
    locks: [Lock; SQUARE_COUNT],
    /// 当前走子方（只会是白或黑）
    turn: PieceColor,
    /// 当前走子方无棋可走
    game_over: bool,
    /// 撤销栈：每走一段记录落点原来的锁
    history: Vec<Lock>,
    listeners: Listeners,
}

impl Board {
    /// 创建初始棋盘，白方先走
    pub fn new() -> Self {
        let mut board = Self {
            squares: Layout::initial(),
            locks: [Lock::None; SQUARE_COUNT],
            turn: PieceColor::White,
            game_over: false,
            history: Vec::new(),
            listeners: Listeners::default(),
        };
        board.refresh_game_over();
        board
    }

    /// 由布局字符串创建棋盘
    pub fn from_layout(layout: &str, turn: PieceColor) -> Result<Self> {
        let mut board = Self::new();
        board.set_pieces(layout, turn)?;
        Ok(board)
    }

    /// 恢复到初始局面
    pub fn clear(&mut self) {
        self.squares = Layout::initial();
        self.locks = [Lock::None; SQUARE_COUNT];
        self.turn = PieceColor::White;
        self.history.clear();
        self.refresh_game_over();
        debug!("board reset to initial position");
        self.listeners.notify(&BoardEvent::Loaded);
    }

    /// 批量载入布局
    ///
    /// 拒绝时棋盘保持不变。所有回头锁被清除。
    pub fn set_pieces(&mut self, layout: &str, turn: PieceColor) -> Result<()> {
        if !turn.is_piece() {
            return Err(QirkatError::InvalidTurn);
        }
        let squares = Layout::parse(layout)?;

        self.squares = squares;
        self.locks = [Lock::None; SQUARE_COUNT];
        self.turn = turn;
        self.history.clear();
        self.refresh_game_over();

        debug!(
            layout = %Layout::to_string(&self.squares),
            turn = %self.turn,
            "board loaded"
        );
        self.listeners.notify(&BoardEvent::Loaded);
        Ok(())
    }

    /// 获取格子内容
    pub fn get(&self, sq: Square) -> PieceColor {
        self.squares[sq.index()]
    }

    /// 按线性索引获取（越界 panic）
    pub fn get_index(&self, index: usize) -> PieceColor {
        self.get(Square::new_unchecked(index))
    }

    /// 按记号坐标获取，如 `get_at('c', '3')`
    pub fn get_at(&self, col: char, row: char) -> Option<PieceColor> {
        Square::from_chars(col, row).map(|sq| self.get(sq))
    }

    /// 全部格子
    pub fn squares(&self) -> &[PieceColor; SQUARE_COUNT] {
        &self.squares
    }

    /// 某格的回头锁
    pub fn lock(&self, sq: Square) -> Lock {
        self.locks[sq.index()]
    }

    /// 当前走子方
    pub fn turn(&self) -> PieceColor {
        self.turn
    }

    /// 当前走子方是否已无棋可走
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// 胜方（游戏结束时为无法行棋一方的对手）
    pub fn winner(&self) -> Option<PieceColor> {
        self.game_over.then(|| self.turn.opposite())
    }

    /// 统计某种颜色的格子数
    pub fn count(&self, color: PieceColor) -> usize {
        self.squares.iter().filter(|c| **c == color).count()
    }

    /// 切换走子方
    pub fn switch_turn(&mut self) {
        self.turn = self.turn.opposite();
    }

    /// 当前走子方的所有合法走法
    pub fn legal_moves(&self) -> Vec<Move> {
        MoveGenerator::generate(self)
    }

    /// 走法是否为完整的合法走法
    pub fn is_legal(&self, mv: &Move) -> bool {
        MoveGenerator::validate(self, mv, false)
    }

    /// 检查走法；`allow_partial` 时接受连跳链的前缀
    pub fn check_move(&self, mv: &Move, allow_partial: bool) -> bool {
        MoveGenerator::validate(self, mv, allow_partial)
    }

    /// 当前走子方是否有吃子
    pub fn has_capture(&self) -> bool {
        MoveGenerator::has_capture(self)
    }

    /// 该格棋子是否可以吃子（不论是否轮到它）
    pub fn has_capture_from(&self, sq: Square) -> bool {
        MoveGenerator::has_capture_from(self, sq)
    }

    /// 该格棋子的所有最长连跳链
    pub fn captures_from(&self, sq: Square) -> Vec<Move> {
        MoveGenerator::captures_from(self, sq)
    }

    /// 当前走子方从该格出发的合法走法
    pub fn legal_moves_from(&self, sq: Square) -> Vec<Move> {
        MoveGenerator::generate_from(self, sq)
    }

    /// 执行一个完整回合
    ///
    /// 校验合法性，逐段执行，切换走子方并通知订阅者。
    /// 完成的回合不可撤销，撤销栈随之清空。
    pub fn apply(&mut self, mv: &Move) -> Result<()> {
        if self.game_over {
            return Err(QirkatError::GameOver);
        }
        if !self.is_legal(mv) {
            warn!(mv = %mv, turn = %self.turn, "rejected illegal move");
            return Err(QirkatError::IllegalMove {
                notation: mv.to_string(),
            });
        }

        self.apply_quiet(mv);
        self.history.clear();
        self.switch_turn();
        self.refresh_game_over();

        debug!(mv = %mv, next = %self.turn, game_over = self.game_over, "move applied");
        self.listeners.notify(&BoardEvent::MoveApplied(mv.clone()));
        Ok(())
    }

    /// 执行走法的全部段，不校验、不切换走子方、不通知
    pub fn apply_quiet(&mut self, mv: &Move) {
        for leg in mv.legs() {
            self.apply_leg(leg);
        }
    }

    /// 执行一段
    pub(crate) fn apply_leg(&mut self, leg: &Leg) {
        let (from, to) = (leg.from.index(), leg.to.index());
        self.squares[to] = self.squares[from];
        self.squares[from] = PieceColor::Empty;
        if let Some(captured) = leg.captured {
            self.squares[captured.index()] = PieceColor::Empty;
        }
        self.history.push(self.locks[to]);
        self.locks[to] = Lock::after(leg);
    }

    /// 撤销一段：棋子回到起点，被吃的棋子以走子方的对方颜色恢复
    ///
    /// 必须按执行的逆序调用。不切换走子方。
    pub fn undo_leg(&mut self, leg: &Leg) {
        let (from, to) = (leg.from.index(), leg.to.index());
        let piece = self.squares[to];
        self.squares[from] = piece;
        self.squares[to] = PieceColor::Empty;
        if let Some(captured) = leg.captured {
            self.squares[captured.index()] = piece.opposite();
        }
        self.locks[to] = self.history.pop().unwrap_or_default();
    }

    /// 撤销整个走法（逆序撤销每一段）
    ///
    /// 与 [`Board::apply_quiet`] 配对使用。
    pub fn undo(&mut self, mv: &Move) {
        for leg in mv.legs().iter().rev() {
            self.undo_leg(leg);
        }
    }

    /// 订阅变化通知
    pub fn subscribe(&mut self, listener: Listener) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    /// 取消订阅
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// 当前订阅者数量
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// 只读快照
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(self.clone())
    }

    /// 5×5 文本棋盘，最上一行在前
    pub fn render(&self) -> String {
        (0..BOARD_SIZE)
            .rev()
            .map(|row| {
                let cells: Vec<String> = (0..BOARD_SIZE)
                    .map(|col| self.squares[row * BOARD_SIZE + col].short_name().to_string())
                    .collect();
                format!("  {}", cells.join(" "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 带行号和列标的文本棋盘
    pub fn render_with_legend(&self) -> String {
        let mut lines: Vec<String> = self
            .render()
            .lines()
            .zip((1..=BOARD_SIZE).rev())
            .map(|(line, row)| format!("{}{}", row, &line[1..]))
            .collect();
        lines.push("   a b c d e".to_string());
        lines.join("\n")
    }

    fn refresh_game_over(&mut self) {
        self.game_over = !MoveGenerator::has_legal_move(self);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Board {
    fn clone(&self) -> Self {
        Self {
            squares: self.squares,
            locks: self.locks,
            turn: self.turn,
            game_over: self.game_over,
            history: self.history.clone(),
            listeners: Listeners::default(),
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
            && self.locks == other.locks
            && self.turn == other.turn
            && self.game_over == other.game_over
    }
}

impl Eq for Board {}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
