use leptos::prelude::*;

use crate::components::icon::{Icon, Glyph};
use crate::components::reveal::Reveal;
use crate::components::section::Section;
use crate::content::EventInfo;

pub fn terms_line(info: &EventInfo) -> String {
    let fee = if info.registration.is_free() {
        "Registration is completely FREE".to_owned()
    } else {
        format!("Registration fee: {} per team", info.registration_fee_label())
    };
    if info.registration.spots_limited {
        format!("{fee} • Limited spots available")
    } else {
        fee
    }
}

#[component]
pub fn Register(info: &'static EventInfo) -> impl IntoView {
    view! {
        <section
            id=Section::Register.id()
            class="py-20 px-4 bg-gradient-to-r from-purple-600 via-fuchsia-600 to-cyan-600 text-white relative overflow-hidden"
        >
            <div class="absolute inset-0 opacity-20">
                <div class="absolute inset-0 bg-gradient-to-r from-transparent via-white to-transparent transform -skew-x-12 animate-pulse hunt-sheen-slow"></div>
            </div>

            <div class="max-w-4xl mx-auto text-center relative z-10">
                <Reveal>
                    <Glyph icon=Icon::Sparkles class="w-16 h-16 mx-auto mb-6 opacity-90"/>
                    <h2 class="text-4xl sm:text-5xl mb-6">"Ready to Begin Your Adventure?"</h2>
                    <p class="text-xl mb-8 opacity-90">
                        "Register your team now and prepare for an unforgettable treasure hunt experience!"
                    </p>
                    <a
                        href=info.registration.form_url.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hunt-press inline-flex items-center rounded-md bg-white/20 hover:bg-white/30 backdrop-blur-md border-2 border-white/50 hover:border-white/70 text-white px-8 py-4 shadow-2xl"
                    >
                        "Register Your Team on Google Forms"
                    </a>
                    <p class="mt-6 opacity-80">{terms_line(info)}</p>
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::event;

    #[test]
    fn free_and_limited() {
        let info = event().unwrap();
        assert_eq!(terms_line(info), "Registration is completely FREE • Limited spots available");
    }

    #[test]
    fn paid_and_open() {
        let mut info = event().unwrap().clone();
        info.registration.fee = 250;
        info.registration.spots_limited = false;
        assert_eq!(terms_line(&info), "Registration fee: ₹250 per team");
    }
}
