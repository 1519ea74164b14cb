use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="min-h-screen flex flex-col items-center justify-center gap-6 px-4 text-center">
            <h1 class="text-4xl bg-gradient-to-r from-purple-600 to-cyan-600 bg-clip-text text-transparent">
                "404 – nothing buried here"
            </h1>
            <a href="/" class="px-6 py-3 rounded-full border border-purple-300 text-purple-700 hover:bg-purple-50">
                "Back to the hunt"
            </a>
        </section>
    }
}
