use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod live;
pub mod settings;

use components::dashboard::Dashboard;

use crate::common::toast::ToastProvider;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <Dashboard /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <div class="flex justify-center items-center min-h-screen bg-base-200">
                    <h1 class="text-2xl font-bold">{"404 Not Found"}</h1>
                </div>
            }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let app_settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(app_settings.log_level));

    log::info!("=== FraudLens Dashboard Starting ===");
    log::debug!("API base URL: {}", app_settings.api_base_url);
    log::debug!("Push channel URL: {}", app_settings.changes_url());
    log::debug!("Debug mode: {}", app_settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
