//! 安全庫存計算
//!
//! 以 XYZ 變異層級查 Z 因子，對前置期內的需求波動做緩衝：
//! `safety_stock = Z(xyz) × σ日需求 × √前置期天數`。

use restock_core::{RunConfig, XyzClass};

/// 安全庫存計算結果（Z 因子一併保留供稽核）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafetyStock {
    /// 套用的 Z 因子
    pub z_factor: f64,
    /// 安全庫存量
    pub quantity: f64,
}

/// 安全庫存計算器
pub struct SafetyStockCalculator;

impl SafetyStockCalculator {
    /// 計算安全庫存
    ///
    /// 前置期缺漏只在本階段以配置預設值替代；開根號前保證非負。
    pub fn calculate(
        xyz: XyzClass,
        daily_demand_std_dev: f64,
        lead_time_days: Option<f64>,
        config: &RunConfig,
    ) -> SafetyStock {
        let z_factor = config.z_factors.for_class(xyz);
        let lead = lead_time_days
            .unwrap_or(config.default_lead_time_days)
            .max(0.0);

        SafetyStock {
            z_factor,
            quantity: z_factor * daily_demand_std_dev * lead.sqrt(),
        }
    }
}
