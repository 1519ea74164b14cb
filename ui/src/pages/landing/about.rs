use leptos::prelude::*;

use crate::components::icon::{Icon, Glyph};
use crate::components::reveal::Reveal;
use crate::components::section::Section;
use crate::content::EventInfo;

use super::{SectionHeading, Tint};

#[component]
pub fn About(info: &'static EventInfo) -> impl IntoView {
    let cards = info
        .about
        .cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let tint = Tint::cycle(i);
            let delay = 0.2 + 0.1 * i as f64;
            view! {
                <Reveal delay>
                    <div class=format!(
                        "rounded-xl border-2 transition-all hover:shadow-xl bg-gradient-to-br from-white {}",
                        tint.card()
                    )>
                        <div class="p-8">
                            <Glyph icon=card.icon class=format!("w-12 h-12 mb-4 {}", tint.text())/>
                            <h3 class="mb-4">{card.title.as_str()}</h3>
                            <p class="text-gray-600">{info.fill(&card.body)}</p>
                        </div>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section id=Section::About.id() class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <Reveal>
                    <div class="text-center mb-16">
                        <div class="inline-flex items-center gap-2 mb-4">
                            <Glyph icon=Icon::Hexagon class="w-8 h-8 text-purple-600"/>
                            <Glyph icon=Icon::Sparkles class="w-6 h-6 text-cyan-500"/>
                        </div>
                        <SectionHeading text="About the Event"/>
                        <p class="text-xl text-gray-600 max-w-3xl mx-auto">{info.fill(&info.about.summary)}</p>
                    </div>
                </Reveal>

                <div class="grid md:grid-cols-2 gap-8 mb-12">
                    {cards}
                </div>
            </div>
        </section>
    }
}
