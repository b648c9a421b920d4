//! 最新请求守卫
//!
//! 同一种动作被连续触发时（比如快速双击"获取商品"），
//! 各次请求的响应到达顺序没有保证。守卫给每次触发发一张
//! 带代数的票，响应回来后只有仍持有最新代数的那一次允许
//! 写面板，过期的结果直接丢弃

use crate::workflow::action::{ActionKind, ACTION_KIND_COUNT};
use std::sync::atomic::{AtomicU64, Ordering};

/// 一次动作触发的票据
#[derive(Debug, Clone, Copy)]
pub struct ActionTicket {
    kind: ActionKind,
    generation: u64,
}

impl ActionTicket {
    /// 票据对应的动作类型
    pub fn kind(&self) -> ActionKind {
        self.kind
    }
}

/// 最新请求守卫
///
/// 每种动作一个单调递增的代数计数器
#[derive(Debug, Default)]
pub struct LatestGuard {
    generations: [AtomicU64; ACTION_KIND_COUNT],
}

impl LatestGuard {
    /// 创建新的守卫
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一次新触发
    ///
    /// # 返回
    /// 返回本次触发的票据，之前同类动作的票据随即过期
    pub fn begin(&self, kind: ActionKind) -> ActionTicket {
        let generation = self.generations[kind.index()].fetch_add(1, Ordering::SeqCst) + 1;
        ActionTicket { kind, generation }
    }

    /// 票据是否仍是该动作的最新一次触发
    pub fn is_current(&self, ticket: &ActionTicket) -> bool {
        self.generations[ticket.kind.index()].load(Ordering::SeqCst) == ticket.generation
    }
}
