use leptos::prelude::*;

use crate::components::icon::{Icon, Glyph};
use crate::components::reveal::Reveal;
use crate::components::section::Section;
use crate::content::EventInfo;

use super::{SectionHeading, Tint};

#[component]
pub fn Notes(info: &'static EventInfo) -> impl IntoView {
    let cards = info
        .notes
        .iter()
        .enumerate()
        .map(|(i, note)| {
            let tint = Tint::cycle(i);
            let delay = 0.1 * (i + 1) as f64;
            view! {
                <Reveal delay>
                    <div class=format!(
                        "rounded-xl border bg-gradient-to-br via-white transition-all hover:shadow-lg {}",
                        tint.card()
                    )>
                        <div class="p-6 flex items-start gap-4">
                            <div class=format!(
                                "w-8 h-8 text-white rounded-full flex items-center justify-center flex-shrink-0 mt-1 shadow-md {}",
                                tint.badge()
                            )>
                                {(i + 1).to_string()}
                            </div>
                            <div>
                                <h4 class="mb-2">{note.title.as_str()}</h4>
                                <p class="text-gray-600">{info.fill(&note.body)}</p>
                            </div>
                        </div>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section id=Section::Notes.id() class="py-20 px-4 bg-white">
            <div class="max-w-4xl mx-auto">
                <Reveal>
                    <div class="text-center mb-12">
                        <Glyph icon=Icon::AlertCircle class="w-16 h-16 text-purple-600 mx-auto mb-4"/>
                        <SectionHeading text="Important Notes"/>
                        <p class="text-xl text-gray-600">"Please read carefully before registering"</p>
                    </div>
                </Reveal>

                <div class="grid sm:grid-cols-2 gap-6">
                    {cards}
                </div>
            </div>
        </section>
    }
}
