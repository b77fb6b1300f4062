use yew::prelude::*;

use common::Summary;

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub summary: Summary,
}

#[function_component(Stats)]
pub fn stats(props: &StatsProps) -> Html {
    let summary = &props.summary;

    let fraud_share = if summary.total_transactions > 0 {
        summary.fraud_cases as f64 / summary.total_transactions as f64 * 100.0
    } else {
        0.0
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Transactions"}</div>
                    <div class="stat-value text-primary">{format_count(summary.total_transactions)}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Total Amount"}</div>
                    <div class="stat-value text-success">{format!("${:.2}", summary.total_amount)}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Fraud Cases"}</div>
                    <div class="stat-value text-error">{format_count(summary.fraud_cases)}</div>
                    <div class="stat-desc">{format!("{:.2}% of transactions", fraud_share)}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Customers"}</div>
                    <div class="stat-value">{format_count(summary.unique_customers)}</div>
                </div>
            </div>
        </div>
    }
}

fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }
    formatted
}
