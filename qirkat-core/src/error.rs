//! 错误类型定义

use thiserror::Error;

/// Qirkat 规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QirkatError {
    /// 无效的棋盘布局字符串
    #[error("Invalid board layout: {reason}")]
    InvalidLayout { reason: String },

    /// 走子方必须是白方或黑方
    #[error("Invalid side to move: must be white or black")]
    InvalidTurn,

    /// 无法解析的走法记号
    #[error("Invalid move notation '{token}': {reason}")]
    InvalidNotation { token: String, reason: String },

    /// 不合法的走法
    #[error("Illegal move: {notation}")]
    IllegalMove { notation: String },

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,
}

impl QirkatError {
    pub(crate) fn layout(reason: impl Into<String>) -> Self {
        QirkatError::InvalidLayout {
            reason: reason.into(),
        }
    }

    pub(crate) fn notation(token: &str, reason: impl Into<String>) -> Self {
        QirkatError::InvalidNotation {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, QirkatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = QirkatError::layout("expected 25 squares, got 3");
        assert_eq!(
            err.to_string(),
            "Invalid board layout: expected 25 squares, got 3"
        );

        let err = QirkatError::notation("f9", "column out of range");
        assert_eq!(
            err.to_string(),
            "Invalid move notation 'f9': column out of range"
        );

        assert_eq!(
            QirkatError::IllegalMove { notation: "c2-c3".into() }.to_string(),
            "Illegal move: c2-c3"
        );
    }
}
