use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api_client::{ingest, ApiConfig};
use crate::common::toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct IngestCardProps {
    pub api: ApiConfig,
    /// Fired after a successful ingestion so the owner can refresh.
    pub on_ingested: Callback<()>,
}

/// CSV upload card. The upload control stays inert until a file is chosen
/// and while an upload is in flight, so no request can be issued without a
/// file.
#[function_component(IngestCard)]
pub fn ingest_card(props: &IngestCardProps) -> Html {
    let file = use_state(|| Option::<web_sys::File>::None);
    let uploading = use_state(|| false);
    let input_ref = use_node_ref();
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let on_file_change = {
        let file = file.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let chosen = input.files().and_then(|list| list.get(0));
                match &chosen {
                    Some(f) => log::debug!("Selected CSV file: {}", f.name()),
                    None => log::debug!("File selection cleared"),
                }
                file.set(chosen);
            }
        })
    };

    let on_upload = {
        let file = file.clone();
        let uploading = uploading.clone();
        let input_ref = input_ref.clone();
        let api = props.api.clone();
        let on_ingested = props.on_ingested.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |_| {
            let Some(chosen) = (*file).clone() else {
                return;
            };
            let file = file.clone();
            let uploading = uploading.clone();
            let input_ref = input_ref.clone();
            let api = api.clone();
            let on_ingested = on_ingested.clone();
            let toast_ctx = toast_ctx.clone();

            uploading.set(true);
            spawn_local(async move {
                match ingest::upload_csv(&api, chosen).await {
                    Ok(receipt) => {
                        toast_ctx.show_success(format!("Ingested {} rows", receipt.inserted));
                        file.set(None);
                        if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                            input.set_value("");
                        }
                        on_ingested.emit(());
                    }
                    Err(err) => {
                        toast_ctx.show_error(format!("Upload failed: {}", err));
                    }
                }
                uploading.set(false);
            });
        })
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Ingest CSV"}</h2>
                <p class="text-sm text-gray-500">
                    {"Upload a transactions CSV; aggregation happens server-side once the rows land."}
                </p>
                <div class="flex items-center gap-3 flex-wrap">
                    <input
                        ref={input_ref}
                        type="file"
                        accept=".csv,text/csv"
                        class="file-input file-input-bordered file-input-sm w-full max-w-xs"
                        onchange={on_file_change}
                    />
                    <button
                        class="btn btn-primary btn-sm"
                        disabled={file.is_none() || *uploading}
                        onclick={on_upload}
                    >
                        {if *uploading {
                            html! { <><span class="loading loading-spinner loading-xs"></span> {" Uploading"}</> }
                        } else {
                            html! { <><i class="fas fa-file-upload"></i> {" Upload"}</> }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
