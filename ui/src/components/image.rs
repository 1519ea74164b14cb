use leptos::prelude::*;

// grey frame with a broken-picture glyph
pub const FALLBACK_SRC: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHdpZHRoPSI4OCIgaGVpZ2h0PSI4OCIgc3Ryb2tlPSIjMDAwIiBzdHJva2UtbGluZWpvaW49InJvdW5kIiBvcGFjaXR5PSIuMyIgZmlsbD0ibm9uZSIgc3Ryb2tlLXdpZHRoPSIzLjciPjxyZWN0IHg9IjE2IiB5PSIxNiIgd2lkdGg9IjU2IiBoZWlnaHQ9IjU2IiByeD0iNiIvPjxwYXRoIGQ9Im0xNiA1OCAxNi0xOCAzMiAzMiIvPjxjaXJjbGUgY3g9IjUzIiBjeT0iMzUiIHI9IjciLz48L3N2Zz4=";

/// An `<img>` that swaps to a placeholder when the source fails to load.
#[component]
pub fn ImageWithFallback(
    src: &'static str,
    alt: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let failed = RwSignal::new(false);

    view! {
        <Show
            when=move || !failed.get()
            fallback=move || view! {
                <div class=format!("inline-block bg-gray-100 text-center align-middle {class}")>
                    <div class="flex items-center justify-center w-full h-full">
                        <img src=FALLBACK_SRC alt="Error loading image" data-original-url=src/>
                    </div>
                </div>
            }
        >
            <img
                src=src
                alt=alt
                class=class
                on:error=move |_| {
                    log::debug!("image failed to load: {src}");
                    failed.set(true);
                }
            />
        </Show>
    }
}
