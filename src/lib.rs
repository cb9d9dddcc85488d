//! # Restock
//!
//! 補貨決策引擎的統一入口：把一個 SKU 的需求歷史、分類與庫存狀態，
//! 轉成安全庫存、再訂購點、目標庫存、整批化的採購建議、優先分數，
//! 以及可封鎖/覆寫建議的診斷。
//!
//! ```
//! use chrono::NaiveDate;
//! use restock::{ReplenishmentCalculator, RunConfig, SkuSnapshot};
//!
//! let config = RunConfig::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
//! let calculator = ReplenishmentCalculator::new(config);
//!
//! let snapshot = SkuSnapshot::new("SKU-001", NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
//!     .with_demand(4.0, 1.5)
//!     .with_lead_time_days(14.0)
//!     .with_lot_size(12)
//!     .with_days_since_last_sale(2);
//!
//! let result = calculator.compute(&snapshot).unwrap();
//! assert!(result.target_stock > 0);
//! ```

pub use restock_calc::{
    DiagnosisCalculator, LotRoundingCalculator, PriorityScorer, ReplenishmentCalculator,
    SafetyStockCalculator, SeasonalityCalculator, TargetCalculator, TrendCalculator,
};
pub use restock_classify::{AbcClassifier, AbcCuts, AbcItem, XyzClassifier, XyzCuts};
pub use restock_core::{
    AbcClass, CustomerProfile, CustomerTrend, DemandTrend, Diagnosis, RejectedSku,
    ReplenishmentResult, ReplenishmentRun, RestockError, Result, RunConfig, SkuSnapshot,
    SkuStatus, XyzClass, ZFactors,
};
