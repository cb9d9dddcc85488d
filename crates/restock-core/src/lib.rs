//! # Restock Core
//!
//! 補貨決策引擎的核心資料模型與類型定義

pub mod config;
pub mod result;
pub mod snapshot;

// Re-export 主要類型
pub use config::{RunConfig, ZFactors};
pub use result::{
    CustomerProfile, CustomerTrend, DemandTrend, Diagnosis, RejectedSku, ReplenishmentResult,
    ReplenishmentRun, SkuStatus,
};
pub use snapshot::{AbcClass, SkuSnapshot, XyzClass, MAX_DAILY_DEMAND, MAX_LEAD_TIME_DAYS};

/// 補貨引擎錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum RestockError {
    #[error("無效的 SKU 快照 {sku_id}: {reason}")]
    InvalidSnapshot { sku_id: String, reason: String },

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("計算錯誤: {0}")]
    CalculationError(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RestockError>;
