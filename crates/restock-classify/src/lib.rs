//! # Restock Classification
//!
//! 上游分類器：營收柏拉圖的 ABC 分層、需求變異的 XYZ 分層。
//! 兩者都是純函數，I/O（彙總查詢）留在呼叫端。

pub mod abc;
pub mod xyz;

// Re-export 主要類型
pub use abc::{AbcClassifier, AbcCuts, AbcItem};
pub use xyz::{XyzClassifier, XyzCuts};
