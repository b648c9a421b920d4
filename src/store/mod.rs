//! 面板的进程级状态
//!
//! 两块共享状态的归属地：持久化的访问令牌和商品全量缓存。
//! 都由编排层注入持有，不做全局变量

pub mod product_cache;
pub mod session_store;

pub use product_cache::ProductCache;
pub use session_store::{SessionStore, TOKEN_KEY};
