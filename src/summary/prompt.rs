//! Prompt construction for spending analysis

use chrono::SecondsFormat;

use crate::models::Transaction;

/// One line per transaction, in the order given
pub fn render_transactions(transactions: &[Transaction]) -> String {
    transactions
        .iter()
        .map(|t| {
            format!(
                "Date: {}, Description: {}, Category: {}, Amount: {}",
                t.date.to_rfc3339_opts(SecondsFormat::Millis, true),
                t.description,
                t.category,
                t.amount.to_decimal_string()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full advisor prompt around the rendered transactions
pub fn build_prompt(transactions: &[Transaction]) -> String {
    format!(
        "You are a friendly and practical financial advisor.
A user has provided you with their recent spending history.
Please analyze it and provide a brief summary (under 150 words) with actionable insights.

Rules:
- Identify the top 2-3 spending categories.
- Give one or two practical, easy-to-follow tips for improvement.
- Be encouraging, not judgmental.
- Format your response using simple markdown (bolding, bullet points).

Here is the user's spending data:
---
{}
---
",
        render_transactions(transactions)
    )
}
