use leptos::prelude::*;

use crate::components::icon::{Icon, Glyph};
use crate::components::reveal::Reveal;
use crate::components::section::Section;
use crate::content::EventInfo;

use super::{SectionHeading, Tint};

#[component]
fn Channel(icon: Icon, label: &'static str, href: String, text: &'static str, tint: Tint) -> impl IntoView {
    view! {
        <div class=format!("rounded-xl border-2 transition-all hover:shadow-xl {}", tint.card())>
            <div class="p-8 text-center">
                <div class=format!(
                    "w-16 h-16 rounded-full flex items-center justify-center mx-auto mb-4 shadow-lg {}",
                    tint.bubble()
                )>
                    <Glyph icon class=format!("w-8 h-8 {}", tint.text())/>
                </div>
                <h4 class="mb-3">{label}</h4>
                <a href=href class=format!("hover:underline {}", tint.text())>{text}</a>
            </div>
        </div>
    }
}

#[component]
pub fn Contact(info: &'static EventInfo) -> impl IntoView {
    let contact = &info.contact;

    view! {
        <section id=Section::Contact.id() class="py-20 px-4 bg-gradient-to-b from-white via-purple-50/20 to-white">
            <div class="max-w-4xl mx-auto">
                <Reveal>
                    <div class="text-center mb-12">
                        <SectionHeading text="Contact Us"/>
                        <p class="text-xl text-gray-600">"Have questions? We're here to help!"</p>
                    </div>
                </Reveal>

                <div class="grid sm:grid-cols-2 gap-8 max-w-2xl mx-auto">
                    <Reveal delay=0.2>
                        <Channel
                            icon=Icon::Mail
                            label="Email"
                            href=contact.mailto()
                            text=contact.email.as_str()
                            tint=Tint::Purple
                        />
                    </Reveal>
                    <Reveal delay=0.3>
                        <Channel
                            icon=Icon::Phone
                            label="Phone"
                            href=contact.tel()
                            text=contact.phone.as_str()
                            tint=Tint::Cyan
                        />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
