//! 成本與利潤指標

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stock_core::{ResolvedInputs, WEEKS_PER_MONTH, WEEKS_PER_YEAR};

/// 週/月/年利潤預估
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitProjection {
    pub weekly: Decimal,
    pub monthly: Decimal,
    pub yearly: Decimal,
}

impl ProfitProjection {
    /// 由週利潤推算（月 = 週 × 4，年 = 週 × 52）
    pub fn from_weekly(weekly: Decimal) -> Self {
        Self {
            weekly,
            monthly: weekly * Decimal::from(WEEKS_PER_MONTH),
            yearly: weekly * Decimal::from(WEEKS_PER_YEAR),
        }
    }
}

/// 指標計算器
pub struct MetricsCalculator;

impl MetricsCalculator {
    /// 總成本 = 庫存 × 倉儲成本 + 訂購 × 訂購成本
    pub fn total_cost(inputs: &ResolvedInputs, stock: Decimal, order: Decimal) -> Decimal {
        stock * inputs.storage_cost + order * inputs.order_cost
    }

    /// 週利潤 = (庫存 + 訂購) × 單位利潤 - 總成本
    pub fn weekly_profit(
        stock: Decimal,
        order: Decimal,
        total_cost: Decimal,
        profit_per_unit: Decimal,
    ) -> Decimal {
        (stock + order) * profit_per_unit - total_cost
    }

    /// 使用者週利潤與最優週利潤的差距百分比
    ///
    /// 最優週利潤不為正時比例無意義，固定回傳 0。
    /// 超出 `Decimal` 表示範圍時飽和為 `Decimal::MAX`。
    pub fn profit_gap_percentage(optimal_weekly: Decimal, user_weekly: Decimal) -> Decimal {
        if optimal_weekly <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        (optimal_weekly - user_weekly)
            .abs()
            .checked_div(optimal_weekly)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::MAX)
    }
}
