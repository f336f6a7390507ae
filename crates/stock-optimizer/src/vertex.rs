//! 二維頂點枚舉求解器

use rust_decimal::Decimal;
use stock_core::StockError;

use crate::program::LinearProgram;
use crate::solver::{LpSolution, LpSolver};

/// 邊界直線 `a·x + b·y = c`
#[derive(Debug, Clone, Copy)]
struct BoundaryLine {
    a: Decimal,
    b: Decimal,
    c: Decimal,
}

/// 頂點枚舉求解器（僅支援兩個變數）
///
/// 對所有約束邊界與兩軸兩兩求交點，保留可行者並取目標值最小者。
/// 目標值相同時取枚舉順序中第一個（約束在前、座標軸在後），結果對相同輸入固定。
///
/// 非負成本係數加上非負約束時目標值有下界，且可行域不含直線，
/// 因此可行時最優解必定落在頂點上，不會出現無界情形。
#[derive(Debug, Clone)]
pub struct VertexEnumerationSolver {
    tolerance: Decimal,
}

impl Default for VertexEnumerationSolver {
    fn default() -> Self {
        Self {
            tolerance: Decimal::new(1, 9),
        }
    }
}

impl VertexEnumerationSolver {
    /// 創建新的求解器
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置可行性容許誤差
    pub fn with_tolerance(mut self, tolerance: Decimal) -> Self {
        self.tolerance = tolerance.abs();
        self
    }

    pub fn tolerance(&self) -> Decimal {
        self.tolerance
    }

    fn boundary_lines(program: &LinearProgram) -> stock_core::Result<Vec<BoundaryLine>> {
        let mut lines = Vec::with_capacity(program.constraints().len() + 2);

        for (index, constraint) in program.constraints().iter().enumerate() {
            if constraint.coefficients.len() != 2 {
                return Err(StockError::UnsupportedProgram(format!(
                    "約束 {} 有 {} 個係數，需要 2 個",
                    index,
                    constraint.coefficients.len()
                )));
            }
            lines.push(BoundaryLine {
                a: constraint.coefficients[0],
                b: constraint.coefficients[1],
                c: constraint.rhs,
            });
        }

        // 非負約束的邊界：x = 0, y = 0
        lines.push(BoundaryLine {
            a: Decimal::ONE,
            b: Decimal::ZERO,
            c: Decimal::ZERO,
        });
        lines.push(BoundaryLine {
            a: Decimal::ZERO,
            b: Decimal::ONE,
            c: Decimal::ZERO,
        });

        Ok(lines)
    }

    /// 兩直線交點（平行時為 None）
    fn intersect(first: &BoundaryLine, second: &BoundaryLine) -> Option<[Decimal; 2]> {
        let det = first.a * second.b - second.a * first.b;
        if det.is_zero() {
            return None;
        }

        let x = (first.c * second.b - second.c * first.b).checked_div(det)?;
        let y = (first.a * second.c - second.a * first.c).checked_div(det)?;
        Some([normalize(x), normalize(y)])
    }
}

impl LpSolver for VertexEnumerationSolver {
    fn solve(&self, program: &LinearProgram) -> stock_core::Result<LpSolution> {
        if program.variable_count() != 2 || program.objective().len() != 2 {
            return Err(StockError::UnsupportedProgram(format!(
                "頂點枚舉需要 2 個變數，實際 {} 個",
                program.variable_count()
            )));
        }

        let lines = Self::boundary_lines(program)?;
        let mut best: Option<LpSolution> = None;
        let mut candidates = 0usize;

        for (i, first) in lines.iter().enumerate() {
            for second in &lines[i + 1..] {
                let Some(point) = Self::intersect(first, second) else {
                    continue;
                };
                if !program.is_feasible(&point, self.tolerance) {
                    continue;
                }
                candidates += 1;

                let value = normalize(program.objective_value(&point));
                let improves = best
                    .as_ref()
                    .map_or(true, |current| value < current.objective_value);
                if improves {
                    best = Some(LpSolution {
                        values: point.to_vec(),
                        objective_value: value,
                    });
                }
            }
        }

        tracing::debug!("可行頂點數量: {}", candidates);

        best.ok_or_else(|| StockError::Infeasible("約束系統沒有非負可行頂點".to_string()))
    }
}

/// 消除負零
fn normalize(value: Decimal) -> Decimal {
    if value.is_zero() {
        Decimal::ZERO
    } else {
        value
    }
}
