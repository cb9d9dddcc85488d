//! 批次運行配置模型
//!
//! 每次批次計算傳入一份明確的配置值，取代程序級單例。
//! 所有預設值都是保守的安全回退參數。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::snapshot::XyzClass;

/// XYZ 分類對應的服務水準 Z 因子
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZFactors {
    /// 穩定需求（X）
    pub x: f64,
    /// 波動需求（Y）
    pub y: f64,
    /// 不規則需求（Z）
    pub z: f64,
}

impl Default for ZFactors {
    fn default() -> Self {
        Self {
            x: 1.65,
            y: 1.28,
            z: 0.84,
        }
    }
}

impl ZFactors {
    /// 查表取得 Z 因子
    pub fn for_class(&self, xyz: XyzClass) -> f64 {
        match xyz {
            XyzClass::X => self.x,
            XyzClass::Y => self.y,
            XyzClass::Z => self.z,
        }
    }
}

/// 批次運行配置
///
/// 共享、唯讀，每次調用一份。引擎各階段只讀取，不修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// 計算基準日（取代對系統時鐘的隱式讀取，確保批次可重現）
    pub reference_date: NaiveDate,

    /// 目標庫存的覆蓋月數
    pub coverage_months: f64,

    /// 新品判定門檻（建檔天數）
    pub new_item_age_days: i64,

    /// XYZ → Z 因子對照
    pub z_factors: ZFactors,

    /// 前置期缺漏時的替代值（天）
    pub default_lead_time_days: f64,

    /// 超量警報門檻（虛擬覆蓋月數）
    pub excess_coverage_months: f64,

    /// 最低日周轉門檻（件/日）
    pub min_daily_turnover: f64,

    /// 經濟批量進位的翻轉比例（0~1）
    pub lot_tipping_fraction: f64,

    /// 殭屍品項門檻（距離最後銷售天數）
    ///
    /// 預設 180 天，可依品類周轉特性調整
    pub zombie_days: i64,

    /// 12 個月季節性指數（基準平均 ≈ 1.0）。
    /// 缺席或長度不是 12 時，季節因子一律 1.0（fail-open）
    pub seasonal_indices: Option<Vec<f64>>,
}

impl RunConfig {
    /// 創建新的運行配置（其餘參數取安全預設值）
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            coverage_months: 1.0,
            new_item_age_days: 180,
            z_factors: ZFactors::default(),
            default_lead_time_days: 7.0,
            excess_coverage_months: 6.0,
            min_daily_turnover: 0.05,
            lot_tipping_fraction: 0.3,
            zombie_days: 180,
            seasonal_indices: None,
        }
    }

    /// 建構器模式：設置覆蓋月數
    pub fn with_coverage_months(mut self, months: f64) -> Self {
        self.coverage_months = months;
        self
    }

    /// 建構器模式：設置新品門檻
    pub fn with_new_item_age_days(mut self, days: i64) -> Self {
        self.new_item_age_days = days;
        self
    }

    /// 建構器模式：設置 Z 因子
    pub fn with_z_factors(mut self, z_factors: ZFactors) -> Self {
        self.z_factors = z_factors;
        self
    }

    /// 建構器模式：設置預設前置期
    pub fn with_default_lead_time_days(mut self, days: f64) -> Self {
        self.default_lead_time_days = days.max(0.0);
        self
    }

    /// 建構器模式：設置超量門檻
    pub fn with_excess_coverage_months(mut self, months: f64) -> Self {
        self.excess_coverage_months = months;
        self
    }

    /// 建構器模式：設置最低日周轉
    pub fn with_min_daily_turnover(mut self, turnover: f64) -> Self {
        self.min_daily_turnover = turnover;
        self
    }

    /// 建構器模式：設置批量翻轉比例（超出 [0,1] 會被截斷）
    pub fn with_lot_tipping_fraction(mut self, fraction: f64) -> Self {
        self.lot_tipping_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// 建構器模式：設置殭屍門檻
    pub fn with_zombie_days(mut self, days: i64) -> Self {
        self.zombie_days = days;
        self
    }

    /// 建構器模式：設置季節性指數
    pub fn with_seasonal_indices(mut self, indices: Vec<f64>) -> Self {
        self.seasonal_indices = Some(indices);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_default_fallback_values() {
        let config = RunConfig::new(reference());
        assert_eq!(config.z_factors.x, 1.65);
        assert_eq!(config.z_factors.y, 1.28);
        assert_eq!(config.z_factors.z, 0.84);
        assert_eq!(config.excess_coverage_months, 6.0);
        assert_eq!(config.min_daily_turnover, 0.05);
        assert_eq!(config.default_lead_time_days, 7.0);
        assert_eq!(config.zombie_days, 180);
        assert!(config.seasonal_indices.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = RunConfig::new(reference())
            .with_coverage_months(2.0)
            .with_zombie_days(365)
            .with_lot_tipping_fraction(0.5);

        assert_eq!(config.coverage_months, 2.0);
        assert_eq!(config.zombie_days, 365);
        assert_eq!(config.lot_tipping_fraction, 0.5);
    }

    #[test]
    fn test_tipping_fraction_clamped() {
        let config = RunConfig::new(reference()).with_lot_tipping_fraction(1.7);
        assert_eq!(config.lot_tipping_fraction, 1.0);

        let config = RunConfig::new(reference()).with_lot_tipping_fraction(-0.2);
        assert_eq!(config.lot_tipping_fraction, 0.0);
    }

    #[test]
    fn test_z_factor_lookup() {
        let factors = ZFactors::default();
        assert_eq!(factors.for_class(XyzClass::X), 1.65);
        assert_eq!(factors.for_class(XyzClass::Y), 1.28);
        assert_eq!(factors.for_class(XyzClass::Z), 0.84);
    }
}
