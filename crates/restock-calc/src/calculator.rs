//! 補貨主計算器
//!
//! 單一邏輯操作：`compute(快照) → 結果`，以及無順序耦合的批次包裝。
//! 管線各階段都是純函數，批次以 rayon 無鎖並行。

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Datelike;
use rayon::prelude::*;
use restock_core::{
    RejectedSku, ReplenishmentResult, ReplenishmentRun, Result, RunConfig, SkuSnapshot,
};

use crate::diagnosis::DiagnosisCalculator;
use crate::lot_rounding::LotRoundingCalculator;
use crate::safety_stock::SafetyStockCalculator;
use crate::scoring::PriorityScorer;
use crate::seasonality::SeasonalityCalculator;
use crate::targets::TargetCalculator;
use crate::trend::TrendCalculator;

/// 補貨計算器
pub struct ReplenishmentCalculator {
    /// 批次運行配置（共享、唯讀）
    config: RunConfig,
}

impl ReplenishmentCalculator {
    /// 創建新的計算器
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// 獲取配置引用
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// 單一 SKU 計算
    ///
    /// 入口先做邊界契約檢查（快照違約立即拒絕），之後依
    /// 季節性 → 趨勢 → 安全庫存 → 需求調整 → 目標 → 批量 → 分數 →
    /// 診斷/封鎖 的順序推進，所有中間值都進結果記錄。
    pub fn compute(&self, snapshot: &SkuSnapshot) -> Result<ReplenishmentResult> {
        snapshot.validate()?;

        let config = &self.config;
        let current_month = config.reference_date.month();

        // 4.1 季節性
        let seasonal_factor = SeasonalityCalculator::projected_factor(
            config.seasonal_indices.as_deref(),
            snapshot.lead_time_days,
            current_month,
            config.default_lead_time_days,
        );
        let adjusted_demand = snapshot.daily_demand * seasonal_factor;

        // 4.2 趨勢
        let (demand_trend, customer_trend, customer_profile) = TrendCalculator::classify(snapshot);

        // 4.3 安全庫存
        let safety = SafetyStockCalculator::calculate(
            snapshot.xyz,
            snapshot.daily_demand_std_dev,
            snapshot.lead_time_days,
            config,
        );

        // 4.4 需求調整與目標
        let adjustment = TargetCalculator::adjust_demand(snapshot, config, adjusted_demand);
        let lead_time_days = snapshot
            .lead_time_days
            .unwrap_or(config.default_lead_time_days)
            .max(0.0);
        let targets = TargetCalculator::targets(
            adjustment.demand_calc,
            lead_time_days,
            safety.quantity,
            config.coverage_months,
        );

        // 4.5 殭屍壓制與批量進位
        let requirement = LotRoundingCalculator::requirement(snapshot, config, targets.target_stock);
        let rounding = LotRoundingCalculator::round_to_lots(
            requirement.net,
            snapshot.lot_size,
            config.lot_tipping_fraction,
            snapshot.unit_cost,
        );

        // 4.6 優先分數
        let precalc_score =
            PriorityScorer::score(snapshot, adjustment.demand_calc, lead_time_days, demand_trend);

        // 4.7 診斷與封鎖
        let virtual_coverage_months = DiagnosisCalculator::virtual_coverage(
            snapshot.on_hand,
            snapshot.on_order,
            adjustment.demand_calc,
        );
        let diagnosis = DiagnosisCalculator::diagnose(
            snapshot,
            config,
            adjustment.demand_calc,
            virtual_coverage_months,
            rounding.suggestion,
        );
        let outcome = DiagnosisCalculator::apply_blocking(
            snapshot,
            &diagnosis,
            rounding.suggestion,
            precalc_score,
            virtual_coverage_months,
        );

        Ok(ReplenishmentResult {
            sku_id: snapshot.sku_id.clone(),
            seasonal_factor,
            adjusted_demand,
            boost_multiplier: adjustment.boost_multiplier,
            demand_calc: adjustment.demand_calc,
            z_factor: safety.z_factor,
            safety_stock: safety.quantity,
            reorder_point: targets.reorder_point,
            target_stock: targets.target_stock,
            zombie_suppressed: requirement.zombie_suppressed,
            raw_requirement: requirement.raw,
            net_requirement: requirement.net,
            lot_count: rounding.lot_count,
            precalc_suggestion: rounding.suggestion,
            precalc_subtotal: rounding.subtotal,
            precalc_score,
            virtual_coverage_months,
            diagnosis,
            blocked: outcome.blocked,
            block_reason: outcome.block_reason,
            computed_but_blocked: outcome.computed_but_blocked,
            final_suggestion: outcome.final_suggestion,
            final_score: outcome.final_score,
            subtotal: outcome.subtotal,
            status: outcome.status,
            demand_trend,
            customer_trend,
            customer_profile,
        })
    }

    /// 批次計算（rayon 並行）
    ///
    /// 違約快照逐筆隔離進 `rejected`，不中斷其餘 SKU；
    /// 合法快照的結果保持輸入相對順序。
    pub fn compute_all(&self, snapshots: &[SkuSnapshot]) -> ReplenishmentRun {
        tracing::info!("開始補貨批次計算：{} 個 SKU", snapshots.len());
        let start_time = std::time::Instant::now();

        let computed: Vec<Result<ReplenishmentResult>> = snapshots
            .par_iter()
            .map(|snapshot| self.compute(snapshot))
            .collect();

        let run = self.collect_run(computed, start_time);

        tracing::info!(
            "批次計算完成：{} 筆結果，{} 筆拒絕，耗時 {:?}",
            run.results.len(),
            run.rejected.len(),
            start_time.elapsed()
        );

        run
    }

    /// 批次計算（循序，帶合作式取消點）
    ///
    /// 互動情境用：每個 SKU 之間檢查一次取消旗標，已完成的結果保留。
    pub fn compute_all_cancellable(
        &self,
        snapshots: &[SkuSnapshot],
        cancel: &AtomicBool,
    ) -> ReplenishmentRun {
        let start_time = std::time::Instant::now();

        let mut computed = Vec::with_capacity(snapshots.len());
        for snapshot in snapshots {
            if cancel.load(Ordering::Relaxed) {
                tracing::info!("批次計算在 {} 筆後被取消", computed.len());
                break;
            }
            computed.push(self.compute(snapshot));
        }

        self.collect_run(computed, start_time)
    }

    fn collect_run(
        &self,
        computed: Vec<Result<ReplenishmentResult>>,
        start_time: std::time::Instant,
    ) -> ReplenishmentRun {
        let mut run = ReplenishmentRun::empty();

        for (index, outcome) in computed.into_iter().enumerate() {
            match outcome {
                Ok(result) => run.results.push(result),
                Err(error) => {
                    tracing::warn!(index, %error, "快照違反邊界契約，逐筆隔離");
                    run.rejected.push(RejectedSku {
                        index,
                        sku_id: match &error {
                            restock_core::RestockError::InvalidSnapshot { sku_id, .. } => {
                                sku_id.clone()
                            }
                            _ => String::new(),
                        },
                        reason: error.to_string(),
                    });
                }
            }
        }

        run.elapsed_ms = Some(start_time.elapsed().as_millis());
        run
    }
}
