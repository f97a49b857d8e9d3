//! 棋盘变化通知

use crate::moves::Move;

/// 棋盘变化事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// 整盘重新载入（初始化或批量布局）
    Loaded,
    /// 完成了一个完整回合的走法
    MoveApplied(Move),
}

/// 订阅句柄，用于取消订阅
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// 事件回调
pub type Listener = Box<dyn FnMut(&BoardEvent) + Send>;

/// 订阅者列表，由棋盘持有
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    pub fn subscribe(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// 取消订阅，返回该订阅是否存在
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// 按订阅顺序通知所有订阅者
    pub fn notify(&mut self, event: &BoardEvent) {
        for (_, listener) in self.entries.iter_mut() {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
