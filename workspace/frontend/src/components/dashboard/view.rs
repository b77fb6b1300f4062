use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use common::{
    CategoryAvgAmount, CategoryFraud, CategorySpend, FraudTrendPoint, GenderAmount, HistogramBin,
    MerchantTotal, NewTransaction, Summary, TransactionPage,
};

use crate::api_client::{analytics, transaction, ApiConfig};
use crate::common::status::{ErrorDisplay, LoadingSpinner};
use crate::common::toast::ToastContext;
use crate::components::ingest::IngestCard;
use crate::components::layout::Layout;
use crate::components::transactions::{TransactionModal, TransactionsTable};
use crate::hooks::FetchState;
use crate::live::use_live_updates;
use crate::settings;

use super::charts::{
    AmountByGenderChart, AmountHistogramChart, AvgAmountByCategoryChart, CategorySpendChart,
    ChartCard, FraudByCategoryChart, FraudTrendChart, LorenzChart, TopMerchantsChart,
};
use super::stats::Stats;

/// Every dataset one refresh cycle replaces. Held as a single unit so a
/// refresh swaps all of it or none of it.
#[derive(Clone, PartialEq)]
pub struct DashboardData {
    pub summary: Summary,
    pub category_spend: Vec<CategorySpend>,
    pub fraud_trend: Vec<FraudTrendPoint>,
    pub transactions: TransactionPage,
    pub amount_by_gender: Vec<GenderAmount>,
    pub fraud_by_category: Vec<CategoryFraud>,
    pub avg_amount_by_category: Vec<CategoryAvgAmount>,
    pub top_merchants: Vec<MerchantTotal>,
    pub histogram: Vec<HistogramBin>,
}

#[derive(Clone, Copy, PartialEq)]
struct PageQuery {
    offset: u64,
    fraud_only: bool,
}

/// The nine reads of one refresh cycle, issued concurrently and awaited
/// jointly. A failure of any single read fails the whole refresh.
async fn load_all(config: ApiConfig, query: PageQuery) -> Result<DashboardData, String> {
    let app_settings = settings::get_settings();
    let (
        summary,
        category_spend,
        fraud_trend,
        transactions,
        amount_by_gender,
        fraud_by_category,
        avg_amount_by_category,
        top_merchants,
        histogram,
    ) = futures::try_join!(
        analytics::get_summary(&config),
        analytics::get_category_spend(&config),
        analytics::get_fraud_trend(&config),
        transaction::get_transactions(&config, app_settings.page_size, query.offset, query.fraud_only),
        analytics::get_amount_by_gender(&config),
        analytics::get_fraud_by_category(&config, app_settings.ranking_limit),
        analytics::get_avg_amount_by_category(&config, app_settings.ranking_limit),
        analytics::get_top_merchants(&config, app_settings.ranking_limit),
        analytics::get_amount_histogram(
            &config,
            app_settings.histogram_bins,
            app_settings.histogram_mode
        ),
    )?;

    Ok(DashboardData {
        summary,
        category_spend,
        fraud_trend,
        transactions,
        amount_by_gender,
        fraud_by_category,
        avg_amount_by_category,
        top_merchants,
        histogram,
    })
}

fn now_label() -> String {
    js_sys::Date::new_0().to_locale_time_string("en-US").into()
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    log::trace!("Dashboard component rendering");

    let api = use_memo((), |_| ApiConfig::from_settings(&settings::get_settings()));
    let page_size = settings::get_settings().page_size;

    let data = use_state(|| FetchState::<DashboardData>::Loading);
    let query = use_mut_ref(|| PageQuery {
        offset: 0,
        fraud_only: false,
    });
    let has_loaded = use_mut_ref(|| false);
    let shown_offset = use_state(|| 0u64);
    let shown_fraud_only = use_state(|| false);
    let last_updated = use_state(|| Option::<String>::None);
    let show_modal = use_state(|| false);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    // One refresh path for everything: mount, manual refresh, push message,
    // polling tick, page change, and post-write. Refreshes past the first
    // keep the last good datasets on screen while the new ones load, and a
    // failed background refresh only raises a toast.
    let refresh = {
        let api = api.clone();
        let data = data.clone();
        let query = query.clone();
        let has_loaded = has_loaded.clone();
        let last_updated = last_updated.clone();
        let toast_ctx = toast_ctx.clone();

        use_callback((), move |_: (), _| {
            let config = (*api).clone();
            let current_query = *query.borrow();
            let data = data.clone();
            let has_loaded = has_loaded.clone();
            let last_updated = last_updated.clone();
            let toast_ctx = toast_ctx.clone();

            spawn_local(async move {
                match load_all(config, current_query).await {
                    Ok(fresh) => {
                        *has_loaded.borrow_mut() = true;
                        data.set(FetchState::Success(fresh));
                        last_updated.set(Some(now_label()));
                    }
                    Err(err) => {
                        log::error!("Dashboard refresh failed: {}", err);
                        toast_ctx.show_error(format!("Refresh failed: {}", err));
                        if !*has_loaded.borrow() {
                            data.set(FetchState::Error(err));
                        }
                    }
                }
            });
        })
    };

    let live_phase = use_live_updates(refresh.clone());

    // Initial load
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let on_page = {
        let query = query.clone();
        let shown_offset = shown_offset.clone();
        let refresh = refresh.clone();
        Callback::from(move |offset: u64| {
            log::debug!("Transactions page change, offset={}", offset);
            query.borrow_mut().offset = offset;
            shown_offset.set(offset);
            refresh.emit(());
        })
    };

    let on_fraud_only = {
        let query = query.clone();
        let shown_offset = shown_offset.clone();
        let shown_fraud_only = shown_fraud_only.clone();
        let refresh = refresh.clone();
        Callback::from(move |fraud_only: bool| {
            log::debug!("Fraud-only filter set to {}", fraud_only);
            *query.borrow_mut() = PageQuery {
                offset: 0,
                fraud_only,
            };
            shown_offset.set(0);
            shown_fraud_only.set(fraud_only);
            refresh.emit(());
        })
    };

    let on_open_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| {
            log::info!("Opening Add Transaction modal");
            show_modal.set(true);
        })
    };

    let on_close_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| {
            log::info!("Closing Add Transaction modal");
            show_modal.set(false);
        })
    };

    let on_submit_transaction = {
        let api = api.clone();
        let refresh = refresh.clone();
        let toast_ctx = toast_ctx.clone();
        let show_modal = show_modal.clone();
        Callback::from(move |new_tx: NewTransaction| {
            show_modal.set(false);
            let config = (*api).clone();
            let refresh = refresh.clone();
            let toast_ctx = toast_ctx.clone();
            spawn_local(async move {
                match transaction::create_transaction(&config, &new_tx).await {
                    Ok(_) => {
                        toast_ctx.show_success("Transaction added".to_string());
                        refresh.emit(());
                    }
                    Err(err) => {
                        toast_ctx.show_error(format!("Failed to add transaction: {}", err));
                    }
                }
            });
        })
    };

    let content = match &*data {
        FetchState::Loading => html! { <LoadingSpinner /> },
        FetchState::Error(error) => {
            let refresh = refresh.clone();
            let on_retry = Callback::from(move |_| refresh.emit(()));
            html! { <ErrorDisplay message={error.clone()} on_retry={Some(on_retry)} /> }
        }
        FetchState::Success(current) => {
            let lorenz = compute::derive(&current.histogram);
            html! {
                <>
                    <Stats summary={current.summary.clone()} />
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mt-6">
                        <ChartCard title="Spend by Category">
                            <CategorySpendChart data={current.category_spend.clone()} />
                        </ChartCard>
                        <ChartCard title="Fraud Cases over Time">
                            <FraudTrendChart data={current.fraud_trend.clone()} />
                        </ChartCard>
                        <ChartCard title="Amount by Gender">
                            <AmountByGenderChart data={current.amount_by_gender.clone()} />
                        </ChartCard>
                        <ChartCard title="Fraud by Category">
                            <FraudByCategoryChart data={current.fraud_by_category.clone()} />
                        </ChartCard>
                        <ChartCard title="Average Amount by Category">
                            <AvgAmountByCategoryChart data={current.avg_amount_by_category.clone()} />
                        </ChartCard>
                        <ChartCard title="Top Merchants">
                            <TopMerchantsChart data={current.top_merchants.clone()} />
                        </ChartCard>
                        <ChartCard title="Amount Distribution">
                            <AmountHistogramChart data={current.histogram.clone()} />
                        </ChartCard>
                        <ChartCard title="Amount Concentration">
                            <LorenzChart curve={lorenz} />
                        </ChartCard>
                    </div>
                    <div class="grid grid-cols-1 gap-6 mt-6">
                        <IngestCard api={(*api).clone()} on_ingested={refresh.clone()} />
                        <TransactionsTable
                            page={current.transactions.clone()}
                            page_size={page_size}
                            offset={*shown_offset}
                            fraud_only={*shown_fraud_only}
                            on_page={on_page}
                            on_fraud_only={on_fraud_only}
                            on_add={on_open_modal}
                        />
                    </div>
                </>
            }
        }
    };

    html! {
        <>
            <TransactionModal
                show={*show_modal}
                on_close={on_close_modal}
                on_submit={on_submit_transaction}
            />
            <Layout
                title="Fraud Analytics"
                phase={*live_phase}
                last_updated={(*last_updated).clone()}
                on_refresh={Some(refresh.clone())}
            >
                {content}
            </Layout>
        </>
    }
}
