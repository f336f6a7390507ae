//! 報表輸出
//!
//! 區段順序固定：最優方案、使用者方案、利潤差距、建議。數值一律保留兩位小數。

use rust_decimal::{Decimal, RoundingStrategy};
use stock_core::{Locale, ReportConfig};

use crate::{ComparisonReport, Recommendation, SolutionSummary};

/// 報表文字標籤
///
/// 模板中的 `{amount}`、`{unit}`、`{stock}`、`{order}` 於輸出時替換。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLabels {
    pub optimal_heading: &'static str,
    pub user_heading: &'static str,
    pub stock: &'static str,
    pub order: &'static str,
    pub total_cost: &'static str,
    pub weekly_profit: &'static str,
    pub monthly_profit: &'static str,
    pub yearly_profit: &'static str,
    pub profit_gap: &'static str,
    pub recommendation_heading: &'static str,
    pub shortfall_intro: &'static str,
    pub shortfall_capacity: &'static str,
    pub shortfall_order: &'static str,
    pub adjust: &'static str,
}

impl ReportLabels {
    pub fn turkish() -> Self {
        Self {
            optimal_heading: "Optimal Çözüm:",
            user_heading: "Kullanıcı Çözümü:",
            stock: "Depo miktarı",
            order: "Sipariş miktarı",
            total_cost: "Toplam maliyet",
            weekly_profit: "Haftalık kazanç",
            monthly_profit: "Aylık kazanç",
            yearly_profit: "Yıllık kazanç",
            profit_gap: "Optimal kazanca uzaklık",
            recommendation_heading: "Tavsiye:",
            shortfall_intro: "Talep depo kapasitesinden büyük! Optimal çözüm için şunları yapabilirsiniz:",
            shortfall_capacity: "- Depo kapasitesini en az {amount} {unit} artırın.",
            shortfall_order: "- Sipariş miktarını değiştirerek talebi karşılayın.",
            adjust: "Optimal çözüme ulaşmak için depo miktarınızı {stock} ve sipariş miktarınızı {order} olarak ayarlayın.",
        }
    }

    pub fn english() -> Self {
        Self {
            optimal_heading: "Optimal Solution:",
            user_heading: "User Solution:",
            stock: "Stock quantity",
            order: "Order quantity",
            total_cost: "Total cost",
            weekly_profit: "Weekly profit",
            monthly_profit: "Monthly profit",
            yearly_profit: "Yearly profit",
            profit_gap: "Distance from optimal profit",
            recommendation_heading: "Recommendation:",
            shortfall_intro: "Demand exceeds storage capacity! To reach the optimal solution you can:",
            shortfall_capacity: "- Increase storage capacity by at least {amount} {unit}.",
            shortfall_order: "- Adjust the order quantity to cover the demand.",
            adjust: "To reach the optimal solution, set your stock quantity to {stock} and your order quantity to {order}.",
        }
    }

    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Turkish => Self::turkish(),
            Locale::English => Self::english(),
        }
    }
}

/// 報表輸出器
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    labels: ReportLabels,
    currency: String,
    unit: String,
}

impl ReportRenderer {
    /// 依配置創建輸出器
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            labels: ReportLabels::for_locale(config.locale),
            currency: config.currency.clone(),
            unit: config.unit_label().to_string(),
        }
    }

    /// 建構器模式：覆寫標籤
    pub fn with_labels(mut self, labels: ReportLabels) -> Self {
        self.labels = labels;
        self
    }

    /// 輸出完整報表
    pub fn render(&self, report: &ComparisonReport) -> String {
        let labels = &self.labels;
        let mut out = String::new();

        out.push_str(labels.optimal_heading);
        out.push('\n');
        self.write_summary(&mut out, &report.optimal);

        out.push('\n');
        out.push_str(labels.user_heading);
        out.push('\n');
        self.write_summary(&mut out, &report.user);

        out.push_str(&format!(
            "\n{}: {}%\n",
            labels.profit_gap,
            format_amount(report.profit_gap_percentage)
        ));

        out.push('\n');
        out.push_str(labels.recommendation_heading);
        out.push('\n');
        out.push_str(&self.render_recommendation(&report.recommendation));

        out
    }

    /// 輸出建議文字
    pub fn render_recommendation(&self, recommendation: &Recommendation) -> String {
        let labels = &self.labels;
        match recommendation {
            Recommendation::CapacityShortfall { shortfall } => {
                let capacity_line = labels
                    .shortfall_capacity
                    .replace("{amount}", &format_amount(*shortfall))
                    .replace("{unit}", &self.unit);
                format!(
                    "{}\n{}\n{}\n",
                    labels.shortfall_intro, capacity_line, labels.shortfall_order
                )
            }
            Recommendation::AdjustTo { stock, order } => labels
                .adjust
                .replace("{stock}", &format_amount(*stock))
                .replace("{order}", &format_amount(*order)),
        }
    }

    fn write_summary(&self, out: &mut String, summary: &SolutionSummary) {
        let labels = &self.labels;
        let quantity_rows = [(labels.stock, summary.stock), (labels.order, summary.order)];
        let money_rows = [
            (labels.total_cost, summary.total_cost),
            (labels.weekly_profit, summary.profit.weekly),
            (labels.monthly_profit, summary.profit.monthly),
            (labels.yearly_profit, summary.profit.yearly),
        ];

        for (label, value) in quantity_rows {
            out.push_str(&format!("{}: {} {}\n", label, format_amount(value), self.unit));
        }
        for (label, value) in money_rows {
            out.push_str(&format!(
                "{}: {} {}\n",
                label,
                format_amount(value),
                self.currency
            ));
        }
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(&ReportConfig::default())
    }
}

/// 四捨五入到兩位小數
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let rounded = if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    };
    format!("{:.2}", rounded)
}
