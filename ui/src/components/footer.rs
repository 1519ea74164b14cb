use leptos::prelude::*;

use super::icon::{Icon, Glyph};
use super::section::{Section, SectionLink};
use crate::content::EventInfo;

#[component]
pub fn Footer(info: &'static EventInfo) -> impl IntoView {
    view! {
        <footer class="bg-gradient-to-br from-gray-900 via-purple-950 to-gray-900 text-white py-12 px-4">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-8">
                    <div class="flex items-center justify-center gap-2 mb-4">
                        <Glyph icon=Icon::Sparkles class="w-6 h-6 text-purple-400"/>
                        <h3 class="bg-gradient-to-r from-purple-400 to-cyan-400 bg-clip-text text-transparent">
                            {format!("{} {}", info.brand(), info.year())}
                        </h3>
                    </div>
                    <p class="text-gray-400 mb-6">{format!("Organized by {}", info.event.campus)}</p>
                </div>

                <div class="flex flex-wrap justify-center gap-6 mb-8">
                    {Section::ALL
                        .into_iter()
                        .map(|s| s.nav_button("text-gray-400 hover:text-purple-400 transition-colors"))
                        .collect_view()}
                </div>

                <div class="text-center text-gray-400 text-sm border-t border-gray-800 pt-8">
                    <p>{format!("© {} {}. All rights reserved.", info.year(), info.event.host)}</p>
                </div>
            </div>
        </footer>
    }
}
