//! 補貨批次計算示例
//!
//! 走一遍完整流程：分類 → 快照 → 批次計算 → 結果輸出

use anyhow::Result;
use chrono::NaiveDate;
use restock::*;
use rust_decimal::Decimal;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== 補貨批次計算示例 ===\n");

    let reference_date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    // 1. 上游分類（通常由彙總查詢供應，這裡直接示範分類器）
    let abc_items = vec![
        AbcItem::new("SKU-001", 9_500.0),
        AbcItem::new("SKU-002", 1_200.0),
        AbcItem::new("SKU-003", 300.0),
    ];
    let classified = AbcClassifier::classify(&abc_items, AbcCuts::default());

    println!("ABC 分類:");
    for (item, class) in &classified {
        println!("  - {}: {:?}（銷售額 {}）", item.sku_id, class, item.total_value);
    }

    // 2. 批次配置（含季節性指數）
    let mut indices = vec![1.0; 12];
    indices[10] = 1.5; // 11 月旺季
    indices[11] = 1.8; // 12 月旺季

    let config = RunConfig::new(reference_date)
        .with_coverage_months(1.5)
        .with_seasonal_indices(indices);

    // 3. SKU 快照
    let old_date = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap();
    let snapshots = vec![
        SkuSnapshot::new("SKU-001", old_date)
            .with_stock(0, 0)
            .with_demand(12.0, 3.0)
            .with_lead_time_days(10.0)
            .with_lot_size(24)
            .with_unit_cost(Decimal::new(3550, 2))
            .with_classes(AbcClass::A, XyzClass::X)
            .with_days_since_last_sale(4)
            .with_trend_stats(1_300.0, 1_000.0, 18, 15)
            .with_customers_12m(42),
        SkuSnapshot::new("SKU-002", old_date)
            .with_stock(80, 20)
            .with_demand(2.5, 1.2)
            .with_lead_time_days(7.0)
            .with_lot_size(12)
            .with_unit_cost(Decimal::new(1280, 2))
            .with_classes(AbcClass::B, XyzClass::Y)
            .with_days_since_last_sale(2)
            .with_customers_12m(7),
        SkuSnapshot::new("SKU-003", NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .with_lot_size(6)
            .with_unit_cost(Decimal::new(899, 2)),
    ];

    // 4. 批次計算
    let calculator = ReplenishmentCalculator::new(config);
    let run = calculator.compute_all(&snapshots);

    println!("\n批次 {}（耗時 {:?} ms）:", run.run_id, run.elapsed_ms);
    for result in &run.results {
        println!(
            "  - {} [{}] 診斷: {} | 建議 {} 件（分數 {}，小計 {}）",
            result.sku_id,
            result.status,
            result.diagnosis,
            result.final_suggestion,
            result.final_score,
            result.subtotal,
        );
    }

    println!("\n採購品項數: {}，建議總金額: {}", run.buy_count(), run.total_value());

    // 5. 結果可直接序列化給匯出端
    let json = serde_json::to_string_pretty(&run.results[0])?;
    println!("\n第一筆結果（JSON）:\n{json}");

    Ok(())
}
