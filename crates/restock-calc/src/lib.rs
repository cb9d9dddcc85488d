//! # Restock Calculation Engine
//!
//! 補貨決策核心管線：季節性 → 趨勢 → 安全庫存 → 需求調整與目標 →
//! 殭屍壓制與批量進位 → 優先分數 → 診斷與封鎖。
//!
//! 每個 SKU 的管線都是（快照 × 唯讀配置）的純函數，無跨 SKU 狀態，
//! 批次計算可無鎖並行。

pub mod calculator;
pub mod diagnosis;
pub mod lot_rounding;
pub mod safety_stock;
pub mod scoring;
pub mod seasonality;
pub mod targets;
pub mod trend;

// Re-export 主要類型
pub use calculator::ReplenishmentCalculator;
pub use diagnosis::{BlockingOutcome, DiagnosisCalculator};
pub use lot_rounding::{LotRounding, LotRoundingCalculator, Requirement};
pub use safety_stock::{SafetyStock, SafetyStockCalculator};
pub use scoring::PriorityScorer;
pub use seasonality::SeasonalityCalculator;
pub use targets::{DemandAdjustment, TargetCalculator, Targets};
pub use trend::TrendCalculator;
