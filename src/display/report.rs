//! Report formatting for terminal output
//!
//! Balance, expense breakdown, budget progress and the date filter line.

use chrono::{DateTime, TimeZone};

use crate::models::{DatePreset, DateRange};
use crate::reports::{Balance, BalanceStyle, BudgetProgress, CategorySpend, Tier};

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BOLD: &str = "\x1b[1m";
pub const RESET: &str = "\x1b[0m";

/// Width of the budget progress bar
pub const BAR_WIDTH: usize = 20;

pub fn paint(text: &str, color: &str) -> String {
    format!("{}{}{}", color, text, RESET)
}

/// Balance as `<symbol><x.xx>`, green for income-styled, red for expense-styled
pub fn format_balance(balance: &Balance, symbol: &str) -> String {
    let text = format!("{}{}", symbol, balance.total.to_decimal_string());
    let color = match balance.style() {
        BalanceStyle::Income => GREEN,
        BalanceStyle::Expense => RED,
    };
    format!("Your Balance\n  {}\n", paint(&text, color))
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Bar of `width` cells filled to `percentage` (0..=100)
pub fn format_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// One row per category with expenses, with its share of the total
pub fn format_breakdown(spending: &CategorySpend, symbol: &str) -> String {
    let mut output = String::from("Expense Breakdown\n");

    if spending.is_empty() {
        output.push_str("  No expense data to display. Add some expenses!\n");
        return output;
    }

    for (category, amount) in spending.iter() {
        output.push_str(&format!(
            "  {:14} {:>12} {:>6}\n",
            category.label(),
            amount.format_with_symbol(symbol),
            format_percentage(spending.share(category))
        ));
    }
    output.push_str(&format!("  {}\n", separator(34)));
    output.push_str(&format!(
        "  {:14} {:>12}\n",
        "Total",
        spending.total().format_with_symbol(symbol)
    ));

    output
}

fn tier_color(tier: Tier) -> &'static str {
    match tier {
        Tier::Normal => GREEN,
        Tier::Warning => YELLOW,
        Tier::Danger => RED,
    }
}

/// `Category  $spent / $limit` with a bar colored by tier
///
/// Spend is shown as-is even past the limit; only the bar is capped.
pub fn format_budget_progress(progress: &BudgetProgress, symbol: &str) -> String {
    let mut output = String::from("Budget Progress\n");

    if progress.is_empty() {
        output.push_str("  You haven't set any budgets for this month. Set one below!\n");
        return output;
    }

    for row in &progress.rows {
        let amounts = format!(
            "{} / {}",
            row.spent.format_whole(symbol),
            row.limit.format_whole(symbol)
        );
        output.push_str(&format!(
            "  {:14} {:>15}  {}\n",
            row.category.label(),
            amounts,
            paint(&format_bar(row.percentage, BAR_WIDTH), tier_color(row.tier))
        ));
    }

    output
}

/// The three presets with the one equal to `range` marked
pub fn format_date_filter<Tz: TimeZone>(range: &DateRange, now: &DateTime<Tz>) -> String {
    let active = range.active_preset(now);
    DatePreset::ALL
        .iter()
        .map(|preset| {
            if Some(*preset) == active {
                paint(&format!("[{}]", preset.label()), BOLD)
            } else {
                format!(" {} ", preset.label())
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}
