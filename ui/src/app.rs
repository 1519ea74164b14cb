use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::footer::Footer;
use crate::components::navbar::NavBar;
use crate::content::{EventInfo, event};
use crate::routes::RoutesMenu;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    match event() {
        Ok(info) => view! { <Site info/> }.into_any(),
        Err(e) => {
            log::error!("event content failed to load: {e:#}");
            view! { <ContentError message=format!("{e:#}")/> }.into_any()
        }
    }
}

#[component]
fn Site(info: &'static EventInfo) -> impl IntoView {
    let title = format!("{} {}", info.brand(), info.year());
    let description = format!(
        "{} on {}, {} at {}.",
        title,
        info.date_label(),
        info.time_label(),
        info.event.venue
    );

    view! {
        <Title text=title/>
        <Meta name="description" content=description/>

        <Router>
            <div class="min-h-screen bg-gradient-to-b from-purple-50 via-cyan-50 to-purple-50">
                <NavBar brand=info.brand()/>
                <main>
                    <RoutesMenu info/>
                </main>
                <Footer info/>
            </div>
        </Router>
    }
}

#[component]
fn ContentError(message: String) -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto mt-24 bg-red-50 border border-red-200 rounded-lg p-6 shadow-sm text-red-800">
            <h2 class="text-xl font-semibold mb-2">"Event details unavailable"</h2>
            <p class="mb-2">"The page content could not be loaded:"</p>
            <pre class="text-sm whitespace-pre-wrap">{message}</pre>
        </div>
    }
}
