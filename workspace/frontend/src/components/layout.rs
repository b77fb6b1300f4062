use yew::prelude::*;

use compute::LivePhase;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
    pub phase: LivePhase,
    #[prop_or_default]
    pub last_updated: Option<String>,
    #[prop_or_default]
    pub on_refresh: Option<Callback<()>>,
}

/// Single-page shell: navbar with the live-channel badge and a manual
/// refresh action, content below.
#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    let badge_class = match props.phase {
        LivePhase::Connecting => "badge-warning",
        LivePhase::Live => "badge-success",
        LivePhase::Polling => "badge-info",
    };

    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow px-4">
                <div class="flex-1">
                    <span class="text-xl font-bold">{&props.title}</span>
                </div>
                <div class="flex-none flex items-center gap-3">
                    {if let Some(last_updated) = &props.last_updated {
                        html! {
                            <span class="text-xs text-gray-500">{format!("updated {}", last_updated)}</span>
                        }
                    } else {
                        html! {}
                    }}
                    <span class={classes!("badge", "badge-outline", badge_class)}>
                        {props.phase.label()}
                    </span>
                    {if let Some(on_refresh) = &props.on_refresh {
                        let on_refresh = on_refresh.clone();
                        html! {
                            <button
                                class="btn btn-ghost btn-sm btn-circle"
                                title="Refresh"
                                onclick={Callback::from(move |_| {
                                    log::debug!("Manual refresh triggered");
                                    on_refresh.emit(());
                                })}
                            >
                                <i class="fas fa-sync-alt"></i>
                            </button>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            </div>
            <main class="flex-1 p-6 overflow-y-auto">
                { for props.children.iter() }
            </main>
        </div>
    }
}
