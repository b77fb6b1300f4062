use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::{Transaction, TransactionPage};

#[derive(Properties, PartialEq)]
pub struct TransactionsTableProps {
    pub page: TransactionPage,
    pub page_size: u32,
    pub offset: u64,
    pub fraud_only: bool,
    pub on_page: Callback<u64>,
    pub on_fraud_only: Callback<bool>,
    pub on_add: Callback<()>,
}

/// Server-paginated table of recent transactions.
#[function_component(TransactionsTable)]
pub fn transactions_table(props: &TransactionsTableProps) -> Html {
    let page_size = props.page_size as u64;
    let count = props.page.count;
    let offset = props.offset;

    let range_start = if props.page.items.is_empty() { 0 } else { offset + 1 };
    let range_end = offset + props.page.items.len() as u64;

    let on_prev = {
        let on_page = props.on_page.clone();
        Callback::from(move |_| on_page.emit(offset.saturating_sub(page_size)))
    };
    let on_next = {
        let on_page = props.on_page.clone();
        Callback::from(move |_| on_page.emit(offset + page_size))
    };
    let on_toggle_fraud = {
        let on_fraud_only = props.on_fraud_only.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_fraud_only.emit(input.checked());
            }
        })
    };
    let on_add = {
        let on_add = props.on_add.clone();
        Callback::from(move |_| on_add.emit(()))
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-center flex-wrap gap-2">
                    <h2 class="card-title">{"Recent Transactions"}</h2>
                    <div class="flex items-center gap-4">
                        <label class="label cursor-pointer gap-2">
                            <span class="label-text">{"Fraud only"}</span>
                            <input
                                type="checkbox"
                                class="toggle toggle-error toggle-sm"
                                checked={props.fraud_only}
                                onchange={on_toggle_fraud}
                            />
                        </label>
                        <button class="btn btn-primary btn-sm" onclick={on_add}>
                            <i class="fas fa-plus"></i> {" Add Transaction"}
                        </button>
                    </div>
                </div>

                {if props.page.items.is_empty() {
                    html! {
                        <div class="text-center py-8">
                            <p class="text-gray-500">{"No transactions found."}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="overflow-x-auto">
                            <table class="table table-zebra table-sm">
                                <thead>
                                    <tr>
                                        <th>{"Step"}</th>
                                        <th>{"Customer"}</th>
                                        <th>{"Gender"}</th>
                                        <th>{"Merchant"}</th>
                                        <th>{"Category"}</th>
                                        <th class="text-right">{"Amount"}</th>
                                        <th>{"Fraud"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for props.page.items.iter().map(render_row) }
                                </tbody>
                            </table>
                        </div>
                    }
                }}

                <div class="flex justify-between items-center mt-2">
                    <span class="text-sm text-gray-500">
                        {format!("Showing {}-{} of {}", range_start, range_end, count)}
                    </span>
                    <div class="join">
                        <button
                            class="join-item btn btn-sm"
                            disabled={offset == 0}
                            onclick={on_prev}
                        >
                            <i class="fas fa-chevron-left"></i>
                        </button>
                        <button
                            class="join-item btn btn-sm"
                            disabled={range_end >= count}
                            onclick={on_next}
                        >
                            <i class="fas fa-chevron-right"></i>
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn render_row(transaction: &Transaction) -> Html {
    let amount_class = transaction.is_fraud().then_some("text-error");
    let fraud_badge = if transaction.is_fraud() {
        html! { <span class="badge badge-error badge-sm">{"fraud"}</span> }
    } else {
        html! { <span class="badge badge-ghost badge-sm">{"ok"}</span> }
    };

    html! {
        <tr>
            <td>{transaction.step}</td>
            <td class="font-mono text-xs">{&transaction.customer}</td>
            <td>{optional(&transaction.gender)}</td>
            <td class="font-mono text-xs">{optional(&transaction.merchant)}</td>
            <td>{optional(&transaction.category)}</td>
            <td class={classes!("text-right", "font-mono", amount_class)}>
                {format!("${:.2}", transaction.amount)}
            </td>
            <td>{fraud_badge}</td>
        </tr>
    }
}

fn optional(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("unknown")
}
