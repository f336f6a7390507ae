//! # Stock Optimizer
//!
//! 線性規劃建模與求解

pub mod program;
pub mod solver;
pub mod vertex;

// Re-export 主要類型
pub use program::{LinearConstraint, LinearProgram, ModelBuilder, Relation};
pub use solver::{LpSolution, LpSolver};
pub use vertex::VertexEnumerationSolver;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stock_core::StockError;

/// 庫存最優解
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimalSolution {
    /// 最優庫存量
    pub stock: Decimal,

    /// 最優訂購量
    pub order: Decimal,

    /// 最優總成本
    pub total_cost: Decimal,
}

impl OptimalSolution {
    /// 由線性規劃解取出庫存與訂購量
    pub fn from_lp_solution(solution: &LpSolution) -> stock_core::Result<Self> {
        match solution.values.as_slice() {
            [stock, order] => Ok(Self {
                stock: *stock,
                order: *order,
                total_cost: solution.objective_value,
            }),
            values => Err(StockError::UnsupportedProgram(format!(
                "預期 2 個變數值，實際 {} 個",
                values.len()
            ))),
        }
    }
}

/// 建模並求解庫存問題
pub fn optimize<S: LpSolver + ?Sized>(
    solver: &S,
    inputs: &stock_core::ResolvedInputs,
) -> stock_core::Result<OptimalSolution> {
    let program = ModelBuilder::build(inputs);
    let solution = solver.solve(&program)?;
    OptimalSolution::from_lp_solution(&solution)
}
