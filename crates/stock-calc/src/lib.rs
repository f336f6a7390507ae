//! # Stock Calculation Engine
//!
//! 最優解與使用者方案的比較、建議與報表

pub mod calculator;
pub mod metrics;
pub mod recommendation;
pub mod report;

// Re-export 主要類型
pub use calculator::{solve_and_report, StockOptimizer};
pub use metrics::{MetricsCalculator, ProfitProjection};
pub use recommendation::{Recommendation, RecommendationClassifier};
pub use report::{ReportLabels, ReportRenderer};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單一方案的數量、成本與利潤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionSummary {
    /// 庫存量
    pub stock: Decimal,

    /// 訂購量
    pub order: Decimal,

    /// 總成本
    pub total_cost: Decimal,

    /// 利潤預估
    pub profit: ProfitProjection,
}

impl SolutionSummary {
    /// 依單位利潤計算方案的利潤預估
    pub fn evaluate(
        stock: Decimal,
        order: Decimal,
        total_cost: Decimal,
        profit_per_unit: Decimal,
    ) -> Self {
        let weekly = MetricsCalculator::weekly_profit(stock, order, total_cost, profit_per_unit);
        Self {
            stock,
            order,
            total_cost,
            profit: ProfitProjection::from_weekly(weekly),
        }
    }
}

/// 比較報表（最終輸出）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// 最優方案
    pub optimal: SolutionSummary,

    /// 使用者方案
    pub user: SolutionSummary,

    /// 使用者週利潤距最優週利潤的百分比
    pub profit_gap_percentage: Decimal,

    /// 建議
    pub recommendation: Recommendation,
}
