//! 優先分數
//!
//! 缺貨風險、分類層級、趨勢與財務周轉的加總分數，各項彼此獨立、
//! 與計算順序無關。

use restock_core::{AbcClass, DemandTrend, SkuSnapshot};
use rust_decimal::prelude::ToPrimitive;

/// 缺貨加分
const STOCKOUT_POINTS: i64 = 5000;

/// 前置期內見底（即將缺貨）加分
const IMMINENT_RISK_POINTS: i64 = 2500;

/// 銷售上升趨勢加分
const RISING_TREND_POINTS: i64 = 500;

/// 優先分數計算器
pub struct PriorityScorer;

impl PriorityScorer {
    /// 計算封鎖前的優先分數
    pub fn score(
        snapshot: &SkuSnapshot,
        demand_calc: f64,
        lead_time_days: f64,
        demand_trend: DemandTrend,
    ) -> i64 {
        let mut score = 0i64;

        if snapshot.on_hand <= 0 {
            score += STOCKOUT_POINTS;
        }

        // 與缺貨旗標獨立計分：現貨撐不過前置期就算風險
        if (snapshot.on_hand as f64) <= demand_calc * lead_time_days {
            score += IMMINENT_RISK_POINTS;
        }

        score += match snapshot.abc {
            AbcClass::A => 1000,
            AbcClass::B => 500,
            AbcClass::C => 100,
        };

        if demand_trend == DemandTrend::Rising {
            score += RISING_TREND_POINTS;
        }

        // 財務周轉貢獻，不設上限
        let unit_cost = snapshot.unit_cost.to_f64().unwrap_or(0.0);
        score += (demand_calc * unit_cost).floor() as i64;

        score
    }
}
