use serde_json::json;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

use common::{
    CategoryAvgAmount, CategoryFraud, CategorySpend, FraudTrendPoint, GenderAmount, HistogramBin,
    MerchantTotal,
};
use compute::LorenzPoint;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

fn draw(element: &Element, traces: &serde_json::Value, layout: &serde_json::Value) {
    let div_id = element.id();
    if div_id.is_empty() {
        return;
    }
    let config = json!({"responsive": true, "displayModeBar": false});
    newPlot(
        &div_id,
        serde_wasm_bindgen::to_value(traces).unwrap(),
        serde_wasm_bindgen::to_value(layout).unwrap(),
        serde_wasm_bindgen::to_value(&config).unwrap(),
    );
}

fn bar_layout() -> serde_json::Value {
    json!({
        "margin": {"t": 10, "r": 10, "l": 50, "b": 80},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "xaxis": {"showgrid": false, "tickangle": -35},
        "yaxis": {"showgrid": true, "gridcolor": "#eee"}
    })
}

/// Card shell every chart panel sits in.
#[derive(Properties, PartialEq)]
pub struct ChartCardProps {
    pub title: String,
    pub children: Children,
}

#[function_component(ChartCard)]
pub fn chart_card(props: &ChartCardProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{&props.title}</h2>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategorySpendChartProps {
    pub data: Vec<CategorySpend>,
}

#[function_component(CategorySpendChart)]
pub fn category_spend_chart(props: &CategorySpendChartProps) -> Html {
    let chart_ref = use_node_ref();

    {
        let chart_ref = chart_ref.clone();
        use_effect_with(props.data.clone(), move |data| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let labels: Vec<String> = data
                    .iter()
                    .map(|row| row.category.clone().unwrap_or_else(|| "unknown".to_string()))
                    .collect();
                let amounts: Vec<f64> = data.iter().map(|row| row.amount).collect();

                let traces = json!([{
                    "x": labels,
                    "y": amounts,
                    "type": "bar",
                    "marker": {"color": "#6366f1"},
                    "name": "Spend"
                }]);
                draw(&element, &traces, &bar_layout());
            }
            || ()
        });
    }

    html! {
        <div ref={chart_ref} id="chart-category-spend" class="chart-container" style="height: 300px;"></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FraudTrendChartProps {
    pub data: Vec<FraudTrendPoint>,
}

#[function_component(FraudTrendChart)]
pub fn fraud_trend_chart(props: &FraudTrendChartProps) -> Html {
    let chart_ref = use_node_ref();

    {
        let chart_ref = chart_ref.clone();
        use_effect_with(props.data.clone(), move |data| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let steps: Vec<i64> = data.iter().map(|p| p.step).collect();
                let frauds: Vec<u64> = data.iter().map(|p| p.fraud).collect();

                let traces = json!([{
                    "x": steps,
                    "y": frauds,
                    "type": "scatter",
                    "mode": "lines",
                    "fill": "tozeroy",
                    "line": {"color": "#ef4444", "shape": "spline"},
                    "name": "Fraud cases"
                }]);
                let layout = json!({
                    "margin": {"t": 10, "r": 10, "l": 50, "b": 30},
                    "paper_bgcolor": "rgba(0,0,0,0)",
                    "plot_bgcolor": "rgba(0,0,0,0)",
                    "xaxis": {"showgrid": false, "title": {"text": "step"}},
                    "yaxis": {"showgrid": true, "gridcolor": "#eee"}
                });
                draw(&element, &traces, &layout);
            }
            || ()
        });
    }

    html! {
        <div ref={chart_ref} id="chart-fraud-trend" class="chart-container" style="height: 300px;"></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AmountByGenderChartProps {
    pub data: Vec<GenderAmount>,
}

#[function_component(AmountByGenderChart)]
pub fn amount_by_gender_chart(props: &AmountByGenderChartProps) -> Html {
    let chart_ref = use_node_ref();

    {
        let chart_ref = chart_ref.clone();
        use_effect_with(props.data.clone(), move |data| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let labels: Vec<String> = data.iter().map(|row| row.gender.clone()).collect();
                let amounts: Vec<f64> = data.iter().map(|row| row.amount).collect();

                let traces = json!([{
                    "labels": labels,
                    "values": amounts,
                    "type": "pie",
                    "hole": 0.4,
                    "textinfo": "label+percent"
                }]);
                let layout = json!({
                    "margin": {"t": 10, "r": 10, "l": 10, "b": 10},
                    "paper_bgcolor": "rgba(0,0,0,0)",
                    "showlegend": false
                });
                draw(&element, &traces, &layout);
            }
            || ()
        });
    }

    html! {
        <div ref={chart_ref} id="chart-amount-by-gender" class="chart-container" style="height: 300px;"></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FraudByCategoryChartProps {
    pub data: Vec<CategoryFraud>,
}

#[function_component(FraudByCategoryChart)]
pub fn fraud_by_category_chart(props: &FraudByCategoryChartProps) -> Html {
    let chart_ref = use_node_ref();

    {
        let chart_ref = chart_ref.clone();
        use_effect_with(props.data.clone(), move |data| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let labels: Vec<String> = data.iter().map(|row| row.category.clone()).collect();
                let counts: Vec<u64> = data.iter().map(|row| row.fraud_count).collect();
                let rates: Vec<String> = data
                    .iter()
                    .map(|row| format!("{:.2}% fraud rate", row.fraud_rate * 100.0))
                    .collect();

                let traces = json!([{
                    "x": labels,
                    "y": counts,
                    "type": "bar",
                    "marker": {"color": "#f97316"},
                    "text": rates,
                    "hoverinfo": "x+y+text",
                    "name": "Fraud cases"
                }]);
                draw(&element, &traces, &bar_layout());
            }
            || ()
        });
    }

    html! {
        <div ref={chart_ref} id="chart-fraud-by-category" class="chart-container" style="height: 300px;"></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AvgAmountByCategoryChartProps {
    pub data: Vec<CategoryAvgAmount>,
}

#[function_component(AvgAmountByCategoryChart)]
pub fn avg_amount_by_category_chart(props: &AvgAmountByCategoryChartProps) -> Html {
    let chart_ref = use_node_ref();

    {
        let chart_ref = chart_ref.clone();
        use_effect_with(props.data.clone(), move |data| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let labels: Vec<String> = data.iter().map(|row| row.category.clone()).collect();
                let averages: Vec<f64> = data.iter().map(|row| row.avg_amount).collect();

                let traces = json!([{
                    "x": labels,
                    "y": averages,
                    "type": "bar",
                    "marker": {"color": "#0ea5e9"},
                    "name": "Avg amount"
                }]);
                draw(&element, &traces, &bar_layout());
            }
            || ()
        });
    }

    html! {
        <div ref={chart_ref} id="chart-avg-amount" class="chart-container" style="height: 300px;"></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TopMerchantsChartProps {
    pub data: Vec<MerchantTotal>,
}

#[function_component(TopMerchantsChart)]
pub fn top_merchants_chart(props: &TopMerchantsChartProps) -> Html {
    let chart_ref = use_node_ref();

    {
        let chart_ref = chart_ref.clone();
        use_effect_with(props.data.clone(), move |data| {
            if let Some(element) = chart_ref.cast::<Element>() {
                // Reversed so the biggest merchant renders at the top.
                let labels: Vec<String> = data.iter().rev().map(|row| row.merchant.clone()).collect();
                let amounts: Vec<f64> = data.iter().rev().map(|row| row.amount).collect();

                let traces = json!([{
                    "x": amounts,
                    "y": labels,
                    "type": "bar",
                    "orientation": "h",
                    "marker": {"color": "#22c55e"},
                    "name": "Amount"
                }]);
                let layout = json!({
                    "margin": {"t": 10, "r": 10, "l": 110, "b": 30},
                    "paper_bgcolor": "rgba(0,0,0,0)",
                    "plot_bgcolor": "rgba(0,0,0,0)",
                    "xaxis": {"showgrid": true, "gridcolor": "#eee"},
                    "yaxis": {"showgrid": false}
                });
                draw(&element, &traces, &layout);
            }
            || ()
        });
    }

    html! {
        <div ref={chart_ref} id="chart-top-merchants" class="chart-container" style="height: 300px;"></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AmountHistogramChartProps {
    pub data: Vec<HistogramBin>,
}

#[function_component(AmountHistogramChart)]
pub fn amount_histogram_chart(props: &AmountHistogramChartProps) -> Html {
    let chart_ref = use_node_ref();

    {
        let chart_ref = chart_ref.clone();
        use_effect_with(props.data.clone(), move |data| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let mids: Vec<f64> = data.iter().map(|bin| bin.mid).collect();
                let counts: Vec<u64> = data.iter().map(|bin| bin.count).collect();

                let traces = json!([{
                    "x": mids,
                    "y": counts,
                    "type": "bar",
                    "marker": {"color": "#8b5cf6"},
                    "name": "Transactions"
                }]);
                let layout = json!({
                    "margin": {"t": 10, "r": 10, "l": 50, "b": 40},
                    "paper_bgcolor": "rgba(0,0,0,0)",
                    "plot_bgcolor": "rgba(0,0,0,0)",
                    "xaxis": {"showgrid": false, "title": {"text": "amount"}},
                    "yaxis": {"showgrid": true, "gridcolor": "#eee"}
                });
                draw(&element, &traces, &layout);
            }
            || ()
        });
    }

    html! {
        <div ref={chart_ref} id="chart-amount-histogram" class="chart-container" style="height: 300px;"></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LorenzChartProps {
    pub curve: Vec<LorenzPoint>,
}

#[function_component(LorenzChart)]
pub fn lorenz_chart(props: &LorenzChartProps) -> Html {
    let chart_ref = use_node_ref();

    {
        let chart_ref = chart_ref.clone();
        let curve = props.curve.clone();
        use_effect_with(curve, move |curve| {
            // An empty curve means "no data", not a flat line.
            if let (false, Some(element)) = (curve.is_empty(), chart_ref.cast::<Element>()) {
                let population: Vec<f64> = curve.iter().map(|p| p.population_share).collect();
                let amount: Vec<f64> = curve.iter().map(|p| p.amount_share).collect();

                let traces = json!([
                    {
                        "x": [0.0, 1.0],
                        "y": [0.0, 1.0],
                        "type": "scatter",
                        "mode": "lines",
                        "line": {"color": "#9ca3af", "dash": "dash"},
                        "name": "Equality"
                    },
                    {
                        "x": population,
                        "y": amount,
                        "type": "scatter",
                        "mode": "lines",
                        "fill": "tonexty",
                        "line": {"color": "#22c55e"},
                        "name": "Lorenz"
                    }
                ]);
                let layout = json!({
                    "margin": {"t": 10, "r": 10, "l": 50, "b": 40},
                    "paper_bgcolor": "rgba(0,0,0,0)",
                    "plot_bgcolor": "rgba(0,0,0,0)",
                    "xaxis": {"showgrid": false, "title": {"text": "share of transactions"}, "range": [0, 1]},
                    "yaxis": {"showgrid": true, "gridcolor": "#eee", "title": {"text": "share of amount"}, "range": [0, 1]},
                    "showlegend": true,
                    "legend": {"orientation": "h", "y": -0.25}
                });
                draw(&element, &traces, &layout);
            }
            || ()
        });
    }

    if props.curve.is_empty() {
        return html! {
            <div class="flex justify-center items-center py-12">
                <p class="text-sm text-gray-500">{"Not enough histogram data for a concentration curve."}</p>
            </div>
        };
    }

    html! {
        <div ref={chart_ref} id="chart-lorenz" class="chart-container" style="height: 300px;"></div>
    }
}
