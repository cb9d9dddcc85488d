//! 診斷與封鎖狀態機
//!
//! 先以階梯規則判定品項健康（先命中先贏），再套用封鎖/覆寫規則：
//! 警報或停用會把建議量歸零，新品導入改成固定一批的試市採購，
//! 分數與狀態標籤在封鎖後重算。

use restock_core::{Diagnosis, RunConfig, SkuSnapshot, SkuStatus};
use rust_decimal::Decimal;

/// 覆蓋無法定義時的哨兵值（月）
pub const COVERAGE_SENTINEL_MONTHS: f64 = 99.0;

/// 狀態標籤 EXCESS 的覆蓋門檻（月），與診斷用的警報門檻無關
const EXCESS_STATUS_COVERAGE_MONTHS: f64 = 12.0;

/// 新品導入的分數哨兵：強制排到審查最前面
const ONBOARDING_SCORE_SENTINEL: i64 = 9999;

/// 封鎖階段的完整產出
#[derive(Debug, Clone, PartialEq)]
pub struct BlockingOutcome {
    /// 是否被封鎖
    pub blocked: bool,
    /// 封鎖原因
    pub block_reason: Option<String>,
    /// 稽核旗標：算得出建議量、卻被規則壓掉
    pub computed_but_blocked: bool,
    /// 最終建議量
    pub final_suggestion: i64,
    /// 最終分數
    pub final_score: i64,
    /// 以最終建議量重算的小計
    pub subtotal: Decimal,
    /// 最終狀態標籤
    pub status: SkuStatus,
}

/// 診斷計算器
pub struct DiagnosisCalculator;

impl DiagnosisCalculator {
    /// 虛擬覆蓋月數：（現有 + 在途）÷ 月需求
    ///
    /// 分母為零或結果非有限時一律回哨兵值，NaN/∞ 絕不外流。
    pub fn virtual_coverage(on_hand: i64, on_order: i64, demand_calc: f64) -> f64 {
        let monthly_demand = demand_calc * 30.0;
        if monthly_demand == 0.0 {
            return COVERAGE_SENTINEL_MONTHS;
        }

        let coverage = (on_hand + on_order) as f64 / monthly_demand;
        if coverage.is_finite() {
            coverage
        } else {
            COVERAGE_SENTINEL_MONTHS
        }
    }

    /// 階梯診斷，先命中先贏
    pub fn diagnose(
        snapshot: &SkuSnapshot,
        config: &RunConfig,
        demand_calc: f64,
        virtual_coverage_months: f64,
        precalc_suggestion: i64,
    ) -> Diagnosis {
        // 規則 1：完全無動靜（無現貨、無在途、無需求）
        if snapshot.on_hand == 0 && snapshot.on_order == 0 && demand_calc == 0.0 {
            return if snapshot.age_days(config.reference_date) <= config.new_item_age_days {
                Diagnosis::NewItemNoMovement
            } else {
                Diagnosis::StaleInactive
            };
        }

        // 規則 2：覆蓋超量
        if virtual_coverage_months > config.excess_coverage_months {
            return Diagnosis::Excess {
                threshold_months: config.excess_coverage_months,
            };
        }

        // 規則 3：周轉太低卻產生建議量
        if demand_calc < config.min_daily_turnover && precalc_suggestion > 0 {
            return Diagnosis::NoRecentSales;
        }

        Diagnosis::Coherent
    }

    /// 封鎖與覆寫
    ///
    /// 停用品項與警報型診斷直接歸零；新品導入不算封鎖，改成固定
    /// 一個經濟批量的試市採購並把分數推到哨兵最大值。
    pub fn apply_blocking(
        snapshot: &SkuSnapshot,
        diagnosis: &Diagnosis,
        precalc_suggestion: i64,
        precalc_score: i64,
        virtual_coverage_months: f64,
    ) -> BlockingOutcome {
        let is_onboarding =
            snapshot.active && matches!(diagnosis, Diagnosis::NewItemNoMovement);

        let (blocked, block_reason, final_suggestion) = if !snapshot.active {
            (true, Some("Inactive product".to_string()), 0)
        } else if diagnosis.is_alert() {
            (true, Some(diagnosis.to_string()), 0)
        } else if is_onboarding {
            (false, None, snapshot.lot_size)
        } else {
            (false, None, precalc_suggestion)
        };

        let computed_but_blocked =
            precalc_suggestion > 0 && (!snapshot.active || diagnosis.is_alert());

        let final_score = if is_onboarding {
            ONBOARDING_SCORE_SENTINEL
        } else if final_suggestion == 0 {
            0
        } else {
            precalc_score
        };

        let status = if !snapshot.active {
            SkuStatus::Inactive
        } else if diagnosis.is_alert() {
            SkuStatus::Blocked
        } else if is_onboarding {
            SkuStatus::Onboarding
        } else if snapshot.on_hand == 0 {
            SkuStatus::Stockout
        } else if final_suggestion > 0 {
            SkuStatus::Buy
        } else if virtual_coverage_months > EXCESS_STATUS_COVERAGE_MONTHS {
            SkuStatus::Excess
        } else {
            SkuStatus::Ok
        };

        BlockingOutcome {
            blocked,
            block_reason,
            computed_but_blocked,
            final_suggestion,
            final_score,
            subtotal: Decimal::from(final_suggestion) * snapshot.unit_cost,
            status,
        }
    }
}
