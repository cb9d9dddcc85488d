//! 需求調整與補貨目標
//!
//! 先套用反缺貨 boost，再算再訂購點與目標庫存。

use restock_core::{AbcClass, RunConfig, SkuSnapshot};

/// 需求調整結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemandAdjustment {
    /// 套用的 boost 乘數（未觸發時為 1.0）
    pub boost_multiplier: f64,
    /// 進入目標計算的需求
    pub demand_calc: f64,
}

/// 補貨目標
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Targets {
    /// 再訂購點
    pub reorder_point: i64,
    /// 目標庫存
    pub target_stock: i64,
}

/// 需求調整與目標計算器
pub struct TargetCalculator;

impl TargetCalculator {
    /// 反缺貨 boost 乘數
    ///
    /// 只在「現貨歸零 × 主力品項（A/B）× 非新品」同時成立時觸發——新品
    /// 沒有銷售屬於預期，老品斷貨才是可疑訊號。
    ///
    /// 乘數區間必須從最嚴格的條件開始比對：先判 >90 再判 >30。
    /// 反過來寫會讓 >30 吃掉所有長期斷貨品項，把 1.50 悄悄壓成 1.20
    /// （歷史回歸，見 targets 的排序測試）。
    pub fn boost_multiplier(snapshot: &SkuSnapshot, config: &RunConfig) -> f64 {
        let is_new_item = snapshot.age_days(config.reference_date) <= config.new_item_age_days;
        let applies = snapshot.on_hand == 0
            && matches!(snapshot.abc, AbcClass::A | AbcClass::B)
            && !is_new_item;

        if !applies {
            return 1.0;
        }

        match snapshot.days_since_last_sale {
            Some(days) if days > 90 => 1.50,
            Some(days) if days > 30 => 1.20,
            // 30 天內才斷的貨：動銷明明還在，給最強的補償
            _ => 2.00,
        }
    }

    /// 套用 boost，得到進入目標計算的需求
    pub fn adjust_demand(
        snapshot: &SkuSnapshot,
        config: &RunConfig,
        adjusted_demand: f64,
    ) -> DemandAdjustment {
        let boost_multiplier = Self::boost_multiplier(snapshot, config);
        DemandAdjustment {
            boost_multiplier,
            demand_calc: adjusted_demand * boost_multiplier,
        }
    }

    /// 計算再訂購點與目標庫存
    ///
    /// `reorder_point = round(需求 × 前置期 + 安全庫存)`
    /// `target_stock  = round(需求 × 30 × 覆蓋月數 + 安全庫存)`
    pub fn targets(
        demand_calc: f64,
        lead_time_days: f64,
        safety_stock: f64,
        coverage_months: f64,
    ) -> Targets {
        Targets {
            reorder_point: (demand_calc * lead_time_days + safety_stock).round() as i64,
            target_stock: (demand_calc * 30.0 * coverage_months + safety_stock).round() as i64,
        }
    }
}
