//! 線性規劃模型與模型建構器

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stock_core::ResolvedInputs;

/// 庫存量變數索引
pub const STOCK: usize = 0;

/// 訂購量變數索引
pub const ORDER: usize = 1;

/// 約束關係
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    /// 小於等於
    LessOrEqual,
    /// 大於等於
    GreaterOrEqual,
    /// 等於
    Equal,
}

/// 線性約束：`coefficients · x (relation) rhs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearConstraint {
    pub coefficients: Vec<Decimal>,
    pub relation: Relation,
    pub rhs: Decimal,
}

impl LinearConstraint {
    pub fn new(coefficients: Vec<Decimal>, relation: Relation, rhs: Decimal) -> Self {
        Self {
            coefficients,
            relation,
            rhs,
        }
    }

    /// 左側值
    pub fn lhs(&self, point: &[Decimal]) -> Decimal {
        self.coefficients
            .iter()
            .zip(point)
            .map(|(a, x)| *a * *x)
            .sum()
    }

    /// 檢查點是否滿足約束（容許誤差 `tolerance`）
    pub fn is_satisfied(&self, point: &[Decimal], tolerance: Decimal) -> bool {
        let lhs = self.lhs(point);
        match self.relation {
            Relation::LessOrEqual => lhs <= self.rhs + tolerance,
            Relation::GreaterOrEqual => lhs >= self.rhs - tolerance,
            Relation::Equal => (lhs - self.rhs).abs() <= tolerance,
        }
    }
}

/// 最小化線性規劃，所有變數隱含非負約束
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearProgram {
    variables: Vec<String>,
    objective: Vec<Decimal>,
    constraints: Vec<LinearConstraint>,
}

impl LinearProgram {
    /// 創建新的線性規劃（目標：最小化 `objective · x`）
    pub fn new(variables: Vec<String>, objective: Vec<Decimal>) -> Self {
        Self {
            variables,
            objective,
            constraints: Vec::new(),
        }
    }

    /// 建構器模式：加入約束
    pub fn with_constraint(mut self, constraint: LinearConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn objective(&self) -> &[Decimal] {
        &self.objective
    }

    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    /// 目標函數值
    pub fn objective_value(&self, point: &[Decimal]) -> Decimal {
        self.objective
            .iter()
            .zip(point)
            .map(|(c, x)| *c * *x)
            .sum()
    }

    /// 檢查點是否可行（非負且滿足所有約束）
    pub fn is_feasible(&self, point: &[Decimal], tolerance: Decimal) -> bool {
        point.len() == self.variable_count()
            && point.iter().all(|x| *x >= -tolerance)
            && self
                .constraints
                .iter()
                .all(|c| c.is_satisfied(point, tolerance))
    }
}

/// 模型建構器
pub struct ModelBuilder;

impl ModelBuilder {
    /// 由已驗證的輸入建立庫存線性規劃
    ///
    /// - 目標：最小化 `storage_cost·stock + order_cost·order`
    /// - `stock + order ≥ demand`
    /// - `stock ≤ capacity`
    ///
    /// 係數直接複製，不做縮放。
    pub fn build(inputs: &ResolvedInputs) -> LinearProgram {
        LinearProgram::new(
            vec!["stock".to_string(), "order".to_string()],
            vec![inputs.storage_cost, inputs.order_cost],
        )
        .with_constraint(LinearConstraint::new(
            vec![Decimal::ONE, Decimal::ONE],
            Relation::GreaterOrEqual,
            inputs.demand,
        ))
        .with_constraint(LinearConstraint::new(
            vec![Decimal::ONE, Decimal::ZERO],
            Relation::LessOrEqual,
            inputs.capacity,
        ))
    }
}
