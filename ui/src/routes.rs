use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

use crate::content::EventInfo;
use crate::pages::{landing::Landing, not_found::NotFound};

#[component]
pub fn RoutesMenu(info: &'static EventInfo) -> impl IntoView {
    view! {
      <Routes fallback=|| view! { <NotFound/> }>
        <Route path=path!("/") view=move || view! { <Landing info/> }/>
      </Routes>
    }
}
