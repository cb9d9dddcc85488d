//! 季節性投射
//!
//! 以「貨到之後的銷售窗口」為基準計算季節因子：從前置期換算的月份偏移
//! 開始，向前取 1.5 個月的窗口，每 0.5 個月取樣一次月份指數後平均。

/// 窗口長度（月）：假設一批到貨約覆蓋 1.5 個月的銷售
const WINDOW_MONTHS: f64 = 1.5;

/// 取樣間隔（月）
const SAMPLE_STEP_MONTHS: f64 = 0.5;

/// 因子下限/上限，避免極端指數放大誤差
const FACTOR_MIN: f64 = 0.5;
const FACTOR_MAX: f64 = 2.5;

/// 季節性計算器
pub struct SeasonalityCalculator;

impl SeasonalityCalculator {
    /// 計算投射季節因子
    ///
    /// 指數缺席或長度不是 12 時一律回傳 1.0（fail-open，不視為錯誤）。
    /// `current_month` 為 1~12 的日曆月。
    pub fn projected_factor(
        indices: Option<&[f64]>,
        lead_time_days: Option<f64>,
        current_month: u32,
        default_lead_time_days: f64,
    ) -> f64 {
        let indices = match indices {
            Some(list) if list.len() == 12 => list,
            _ => return 1.0,
        };

        let lead = lead_time_days.unwrap_or(default_lead_time_days).max(0.0);
        let wait_months = lead / 30.0;

        // 窗口固定長度，取樣次數編譯期可知；以整數計數迭代，
        // 浮點游標在極大偏移下步進會失效（step < ulp）
        let sample_count = (WINDOW_MONTHS / SAMPLE_STEP_MONTHS) as u32;

        let mut sum = 0.0;
        for sample in 0..sample_count {
            let offset = wait_months + f64::from(sample) * SAMPLE_STEP_MONTHS;
            // 絕對月份 = 當月 + 偏移的整數部分，1-indexed 繞 12 個月循環
            let absolute_month = (current_month as i64).saturating_add(offset.trunc() as i64);
            let index = ((absolute_month - 1) % 12) as usize;
            sum += indices[index];
        }

        (sum / f64::from(sample_count)).clamp(FACTOR_MIN, FACTOR_MAX)
    }

    /// 由 12 個月的銷量總和推導季節性指數（月總量 ÷ 月平均量）
    ///
    /// 全年無銷量時回傳 None（無法定義基準）。
    pub fn indices_from_monthly_totals(totals: &[f64; 12]) -> Option<Vec<f64>> {
        let mean = totals.iter().sum::<f64>() / 12.0;
        if mean <= 0.0 || !mean.is_finite() {
            return None;
        }
        Some(totals.iter().map(|total| total / mean).collect())
    }
}
