//! 殭屍壓制與經濟批量進位
//!
//! 毛需求 = 目標庫存 − 現有庫存 − 在途量；長期無動銷的品項（殭屍）
//! 直接歸 0，不靠公式補貨。淨需求再以翻轉比例進位到整數批。

use restock_core::{RunConfig, SkuSnapshot};
use rust_decimal::Decimal;

/// 需求量計算結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    /// 是否被殭屍規則壓制
    pub zombie_suppressed: bool,
    /// 毛需求（可為負）
    pub raw: i64,
    /// 淨需求（下限 0）
    pub net: i64,
}

/// 批量進位結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LotRounding {
    /// 整批數
    pub lot_count: i64,
    /// 建議量（批數 × 經濟批量）
    pub suggestion: i64,
    /// 金額小計
    pub subtotal: Decimal,
}

/// 殭屍壓制與批量計算器
pub struct LotRoundingCalculator;

impl LotRoundingCalculator {
    /// 計算毛需求與淨需求
    ///
    /// 在途量只在扣減時截到 ≥ 0，快照上的原值保留供顯示。
    pub fn requirement(snapshot: &SkuSnapshot, config: &RunConfig, target_stock: i64) -> Requirement {
        let zombie_suppressed = matches!(
            snapshot.days_since_last_sale,
            Some(days) if i64::from(days) > config.zombie_days
        );

        let raw = if zombie_suppressed {
            0
        } else {
            target_stock - snapshot.on_hand - snapshot.on_order.max(0)
        };

        Requirement {
            zombie_suppressed,
            raw,
            net: raw.max(0),
        }
    }

    /// 以翻轉比例把淨需求進位到整數批
    ///
    /// 餘數小於「批量 × 翻轉比例」時視為雜訊捨去（向下取整批），
    /// 否則補足一整批（向上取整批）。
    ///
    /// 前置條件：`lot_size >= 1`（引擎入口已驗證）。
    pub fn round_to_lots(
        net_requirement: i64,
        lot_size: i64,
        tipping_fraction: f64,
        unit_cost: Decimal,
    ) -> LotRounding {
        let remainder = net_requirement % lot_size;
        let threshold = lot_size as f64 * tipping_fraction;

        let lot_count = if (remainder as f64) < threshold {
            net_requirement / lot_size
        } else {
            // 整數上取整；餘數為 0 時兩種方向一致
            // （等價於 div_ceil；該方法對有號整數在此工具鏈尚未穩定）
            net_requirement / lot_size + i64::from(net_requirement % lot_size > 0)
        };

        // 目標庫存飽和在 i64 上限時，乘回批量不可回繞成負數
        let suggestion = lot_count.saturating_mul(lot_size);

        LotRounding {
            lot_count,
            suggestion,
            subtotal: Decimal::from(suggestion) * unit_cost,
        }
    }
}
