//! 庫存決策輸入模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Result, StockError};

/// 輸入欄位名稱（依呼叫端欄位順序）
pub const FIELD_NAMES: [&str; 7] = [
    "storage_cost",
    "order_cost",
    "demand",
    "capacity",
    "user_stock",
    "user_order",
    "profit_per_unit",
];

/// 單一輸入值允許的最大絕對值
///
/// 乘積（數量 × 單價 × 52 週）必須落在 `Decimal` 的表示範圍內。
pub const MAX_MAGNITUDE: f64 = 1e12;

/// 呼叫端提供的七個數值欄位
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InventoryInputs {
    /// 每單位每週倉儲成本
    pub storage_cost: f64,

    /// 每單位每週訂購成本
    pub order_cost: f64,

    /// 每週需求量
    pub demand: f64,

    /// 最大倉儲容量
    pub capacity: f64,

    /// 使用者自選的庫存量
    pub user_stock: f64,

    /// 使用者自選的訂購量
    pub user_order: f64,

    /// 每單位利潤（可為負，經濟上無意義但仍接受）
    pub profit_per_unit: f64,
}

impl InventoryInputs {
    /// 創建新的輸入，使用者選擇與單位利潤預設為 0
    pub fn new(storage_cost: f64, order_cost: f64, demand: f64, capacity: f64) -> Self {
        Self {
            storage_cost,
            order_cost,
            demand,
            capacity,
            user_stock: 0.0,
            user_order: 0.0,
            profit_per_unit: 0.0,
        }
    }

    /// 建構器模式：設置使用者自選的庫存量與訂購量
    pub fn with_user_choice(mut self, user_stock: f64, user_order: f64) -> Self {
        self.user_stock = user_stock;
        self.user_order = user_order;
        self
    }

    /// 建構器模式：設置每單位利潤
    pub fn with_profit_per_unit(mut self, profit_per_unit: f64) -> Self {
        self.profit_per_unit = profit_per_unit;
        self
    }

    /// 由原始文字欄位解析（順序同 [`FIELD_NAMES`]）
    ///
    /// 缺少欄位或無法解析為數字時回傳 [`StockError::Validation`]。
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self> {
        if fields.len() != FIELD_NAMES.len() {
            return Err(StockError::validation(
                "fields",
                format!("需要 {} 個欄位，實際 {} 個", FIELD_NAMES.len(), fields.len()),
            ));
        }

        let mut values = [0.0_f64; 7];
        for ((value, raw), name) in values.iter_mut().zip(fields).zip(FIELD_NAMES) {
            let raw = raw.as_ref().trim();
            if raw.is_empty() {
                return Err(StockError::validation(name, "缺少欄位"));
            }
            *value = raw
                .parse::<f64>()
                .map_err(|_| StockError::validation(name, format!("無法解析為數字: '{}'", raw)))?;
        }

        let [storage_cost, order_cost, demand, capacity, user_stock, user_order, profit_per_unit] =
            values;
        Ok(Self {
            storage_cost,
            order_cost,
            demand,
            capacity,
            user_stock,
            user_order,
            profit_per_unit,
        })
    }

    /// 驗證並轉換為高精度數值
    ///
    /// 除 `profit_per_unit` 外的欄位皆不可為負。
    pub fn resolve(&self) -> Result<ResolvedInputs> {
        Ok(ResolvedInputs {
            storage_cost: to_decimal("storage_cost", self.storage_cost, true)?,
            order_cost: to_decimal("order_cost", self.order_cost, true)?,
            demand: to_decimal("demand", self.demand, true)?,
            capacity: to_decimal("capacity", self.capacity, true)?,
            user_stock: to_decimal("user_stock", self.user_stock, true)?,
            user_order: to_decimal("user_order", self.user_order, true)?,
            profit_per_unit: to_decimal("profit_per_unit", self.profit_per_unit, false)?,
        })
    }
}

/// 已驗證的輸入（所有欄位皆為有限值）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedInputs {
    pub storage_cost: Decimal,
    pub order_cost: Decimal,
    pub demand: Decimal,
    pub capacity: Decimal,
    pub user_stock: Decimal,
    pub user_order: Decimal,
    pub profit_per_unit: Decimal,
}

impl ResolvedInputs {
    /// 需求是否超過倉儲容量
    pub fn demand_exceeds_capacity(&self) -> bool {
        self.demand > self.capacity
    }

    /// 容量缺口（需求 - 容量，不足時為 0）
    pub fn capacity_shortfall(&self) -> Decimal {
        if self.demand_exceeds_capacity() {
            self.demand - self.capacity
        } else {
            Decimal::ZERO
        }
    }
}

fn to_decimal(field: &str, value: f64, non_negative: bool) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(StockError::validation(field, "不是有限實數"));
    }
    if value.abs() > MAX_MAGNITUDE {
        return Err(StockError::validation(
            field,
            format!("超出允許範圍 (±{:e})", MAX_MAGNITUDE),
        ));
    }
    if non_negative && value < 0.0 {
        return Err(StockError::validation(field, "不可為負數"));
    }
    // -0.0 一律視為 0
    if value == 0.0 {
        return Ok(Decimal::ZERO);
    }

    Decimal::try_from(value)
        .map_err(|e| StockError::validation(field, format!("無法轉換為十進位數: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> InventoryInputs {
        InventoryInputs::new(2.0, 5.0, 100.0, 150.0)
            .with_user_choice(100.0, 0.0)
            .with_profit_per_unit(10.0)
    }

    #[test]
    fn test_create_inputs() {
        let inputs = InventoryInputs::new(2.0, 5.0, 100.0, 150.0);

        assert_eq!(inputs.demand, 100.0);
        assert_eq!(inputs.user_stock, 0.0);
        assert_eq!(inputs.profit_per_unit, 0.0);
    }

    #[test]
    fn test_resolve() {
        let resolved = sample().resolve().unwrap();

        assert_eq!(resolved.storage_cost, Decimal::from(2));
        assert_eq!(resolved.capacity, Decimal::from(150));
        assert_eq!(resolved.user_stock, Decimal::from(100));
        assert_eq!(resolved.profit_per_unit, Decimal::from(10));
        assert!(!resolved.demand_exceeds_capacity());
        assert_eq!(resolved.capacity_shortfall(), Decimal::ZERO);
    }

    #[test]
    fn test_resolve_keeps_decimal_fractions() {
        let resolved = InventoryInputs::new(0.1, 0.2, 10.5, 20.0).resolve().unwrap();

        assert_eq!(resolved.storage_cost, Decimal::new(1, 1));
        assert_eq!(resolved.demand, Decimal::new(105, 1));
    }

    #[test]
    fn test_negative_profit_is_accepted() {
        let resolved = sample().with_profit_per_unit(-3.0).resolve().unwrap();
        assert_eq!(resolved.profit_per_unit, Decimal::from(-3));
    }

    #[test]
    fn test_capacity_shortfall() {
        let resolved = InventoryInputs::new(1.0, 1.0, 200.0, 150.0).resolve().unwrap();

        assert!(resolved.demand_exceeds_capacity());
        assert_eq!(resolved.capacity_shortfall(), Decimal::from(50));
    }

    #[rstest]
    #[case::nan_demand(InventoryInputs::new(1.0, 1.0, f64::NAN, 10.0), "demand")]
    #[case::infinite_cost(InventoryInputs::new(f64::INFINITY, 1.0, 1.0, 10.0), "storage_cost")]
    #[case::negative_capacity(InventoryInputs::new(1.0, 1.0, 1.0, -10.0), "capacity")]
    #[case::negative_order_cost(InventoryInputs::new(1.0, -0.5, 1.0, 10.0), "order_cost")]
    #[case::huge_demand(InventoryInputs::new(1.0, 1.0, 1e20, 10.0), "demand")]
    #[case::negative_user_order(
        InventoryInputs::new(1.0, 1.0, 1.0, 10.0).with_user_choice(0.0, -1.0),
        "user_order"
    )]
    #[case::nan_profit(
        InventoryInputs::new(1.0, 1.0, 1.0, 10.0).with_profit_per_unit(f64::NAN),
        "profit_per_unit"
    )]
    fn test_resolve_rejects(#[case] inputs: InventoryInputs, #[case] expected_field: &str) {
        match inputs.resolve() {
            Err(StockError::Validation { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("預期驗證錯誤，實際: {:?}", other),
        }
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let resolved = InventoryInputs::new(-0.0, 1.0, 1.0, 1.0).resolve().unwrap();
        assert_eq!(resolved.storage_cost, Decimal::ZERO);
        assert!(resolved.storage_cost.is_sign_positive());
    }

    #[test]
    fn test_from_fields() {
        let inputs =
            InventoryInputs::from_fields(&["2", " 5 ", "100", "150", "100", "0", "10.5"][..]).unwrap();

        assert_eq!(inputs.order_cost, 5.0);
        assert_eq!(inputs.user_stock, 100.0);
        assert_eq!(inputs.profit_per_unit, 10.5);
    }

    #[rstest]
    #[case::missing(&["2", "5", "", "150", "100", "0", "10"], "demand")]
    #[case::not_a_number(&["2", "5", "100", "lots", "100", "0", "10"], "capacity")]
    #[case::too_few(&["2", "5", "100"], "fields")]
    fn test_from_fields_rejects(#[case] fields: &[&str], #[case] expected_field: &str) {
        match InventoryInputs::from_fields(fields) {
            Err(StockError::Validation { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("預期驗證錯誤，實際: {:?}", other),
        }
    }
}
