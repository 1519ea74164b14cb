use leptos::prelude::*;

use crate::components::icon::Glyph;
use crate::components::reveal::Reveal;
use crate::components::section::Section;
use crate::content::EventInfo;

use super::{SectionHeading, Tint};

#[component]
pub fn Details(info: &'static EventInfo) -> impl IntoView {
    let tiles = info
        .details()
        .into_iter()
        .enumerate()
        .map(|(i, detail)| {
            let tint = Tint::cycle(i);
            let delay = 0.1 * (i + 1) as f64;
            view! {
                <Reveal delay>
                    <div class="text-center p-6 rounded-2xl hover:bg-white/60 transition-all">
                        <div class=format!(
                            "w-16 h-16 rounded-full flex items-center justify-center mx-auto mb-4 shadow-lg {}",
                            tint.bubble()
                        )>
                            <Glyph icon=detail.icon class=format!("w-8 h-8 {}", tint.text())/>
                        </div>
                        <h4 class="mb-2">{detail.label}</h4>
                        <p class="text-gray-600">{detail.value}</p>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section id=Section::Details.id() class="py-20 px-4 bg-gradient-to-b from-white via-purple-50/30 to-white">
            <div class="max-w-6xl mx-auto">
                <Reveal>
                    <div class="text-center mb-16">
                        <SectionHeading text="Event Details"/>
                    </div>
                </Reveal>

                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-8">
                    {tiles}
                </div>
            </div>
        </section>
    }
}
