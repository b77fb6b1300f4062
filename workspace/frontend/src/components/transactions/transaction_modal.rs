use yew::prelude::*;

use common::NewTransaction;

#[derive(Properties, PartialEq)]
pub struct TransactionModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub on_submit: Callback<NewTransaction>,
}

const AGE_BANDS: [&str; 8] = [
    "unknown", "<=18", "19-25", "26-35", "36-45", "46-55", "56-65", "65+",
];
const GENDERS: [&str; 4] = ["unknown", "male", "female", "enterprise"];

#[function_component(TransactionModal)]
pub fn transaction_modal(props: &TransactionModalProps) -> Html {
    let form_ref = use_node_ref();

    let on_submit = {
        let on_submit = props.on_submit.clone();
        let form_ref = form_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Some(form) = form_ref.cast::<web_sys::HtmlFormElement>() {
                let form_data = web_sys::FormData::new_with_form(&form).unwrap();

                let step = form_data
                    .get("step")
                    .as_string()
                    .and_then(|s| s.parse::<i64>().ok())
                    .unwrap_or(0);
                let customer = form_data.get("customer").as_string().unwrap_or_default();
                let amount = form_data
                    .get("amount")
                    .as_string()
                    .and_then(|s| s.parse::<f64>().ok())
                    .unwrap_or(0.0);
                // Unchecked checkboxes are absent from the form data.
                let fraud = u8::from(form_data.get("fraud").as_string().is_some());

                on_submit.emit(NewTransaction {
                    step,
                    customer,
                    age: select_value(&form_data, "age"),
                    gender: select_value(&form_data, "gender"),
                    zipcodeori: text_value(&form_data, "zipcodeori"),
                    merchant: text_value(&form_data, "merchant"),
                    zipmerchant: text_value(&form_data, "zipmerchant"),
                    category: text_value(&form_data, "category"),
                    amount,
                    fraud,
                });
            }
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))} id="transaction_modal">
            <div class="modal-box w-11/12 max-w-2xl">
                <h3 class="font-bold text-lg">{"Add Transaction"}</h3>
                <form ref={form_ref} onsubmit={on_submit} class="py-4 space-y-4">
                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Step"}</span></label>
                            <input type="number" name="step" min="0" class="input input-bordered w-full" placeholder="0" required={true} />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Customer"}</span></label>
                            <input type="text" name="customer" class="input input-bordered w-full" placeholder="e.g. C1093826151" required={true} />
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Age band"}</span></label>
                            <select name="age" class="select select-bordered w-full">
                                { for AGE_BANDS.iter().map(|band| html! {
                                    <option value={*band}>{*band}</option>
                                })}
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Gender"}</span></label>
                            <select name="gender" class="select select-bordered w-full">
                                { for GENDERS.iter().map(|gender| html! {
                                    <option value={*gender}>{*gender}</option>
                                })}
                            </select>
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Merchant"}</span></label>
                            <input type="text" name="merchant" class="input input-bordered w-full" placeholder="e.g. M348934600" />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Category"}</span></label>
                            <input type="text" name="category" class="input input-bordered w-full" placeholder="e.g. transportation" />
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Origin zipcode"}</span></label>
                            <input type="text" name="zipcodeori" class="input input-bordered w-full" placeholder="e.g. 28007" />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Merchant zipcode"}</span></label>
                            <input type="text" name="zipmerchant" class="input input-bordered w-full" placeholder="e.g. 28007" />
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4 items-end">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Amount"}</span></label>
                            <input type="number" step="0.01" min="0" name="amount" class="input input-bordered w-full" placeholder="0.00" required={true} />
                        </div>
                        <div class="form-control">
                            <label class="label cursor-pointer justify-start gap-3">
                                <input type="checkbox" name="fraud" class="checkbox checkbox-error" />
                                <span class="label-text">{"Flag as fraud"}</span>
                            </label>
                        </div>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn" onclick={on_close.clone()}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary">{"Save Transaction"}</button>
                    </div>
                </form>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close}>{"close"}</button>
            </form>
        </dialog>
    }
}

fn text_value(form_data: &web_sys::FormData, name: &str) -> Option<String> {
    form_data
        .get(name)
        .as_string()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn select_value(form_data: &web_sys::FormData, name: &str) -> Option<String> {
    form_data
        .get(name)
        .as_string()
        .filter(|s| !s.is_empty() && s != "unknown")
}
