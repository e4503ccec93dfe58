//! 报表导出 - CSV 和当日汇总

use chrono::{DateTime, Utc};

use shared::Transaction;

/// Format an amount with Indonesian thousands separators (15000 -> "15.000")
pub fn format_rupiah(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Transaction date for the report ("12 Jan 2026 10:30")
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d %b %Y %H:%M").to_string()
}

/// Export transaction history as CSV
///
/// Header `Tanggal,Items,Total`; the `Items` column joins
/// `"<qty>x <name>"` entries with `"; "`.
pub fn export_csv(history: &[Transaction]) -> String {
    let mut rows = vec!["Tanggal,Items,Total".to_string()];
    for tx in history {
        let items: Vec<String> = tx
            .items
            .iter()
            .map(|i| format!("{}x {}", i.quantity, i.name))
            .collect();
        rows.push(format!(
            "{},{},{}",
            format_date(&tx.date),
            items.join("; "),
            tx.total
        ));
    }
    rows.join("\n")
}

/// 当日汇总 - 仪表盘数据
#[derive(Debug, Clone)]
pub struct DailySummary {
    /// 今日交易数
    pub transaction_count: usize,
    /// 今日销售总额
    pub total: i64,
    /// 全部历史中销量前三的商品 (名称, 总数量)
    pub top_products: Vec<(String, i64)>,
}

/// Summarize today's sales and the all-time top products
pub fn daily_summary(history: &[Transaction], now: DateTime<Utc>) -> DailySummary {
    let today = now.date_naive();
    let todays: Vec<&Transaction> = history
        .iter()
        .filter(|tx| tx.date.date_naive() == today)
        .collect();

    let mut counts: std::collections::HashMap<String, i64> = std::collections::HashMap::new();
    for tx in history {
        for item in &tx.items {
            *counts.entry(item.name.clone()).or_insert(0) += item.quantity;
        }
    }
    let mut top_products: Vec<(String, i64)> = counts.into_iter().collect();
    top_products.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    top_products.truncate(3);

    DailySummary {
        transaction_count: todays.len(),
        total: todays.iter().map(|tx| tx.total).sum(),
        top_products,
    }
}
