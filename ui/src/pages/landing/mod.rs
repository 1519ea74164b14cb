pub mod about;
pub mod contact;
pub mod details;
pub mod hero;
pub mod notes;
pub mod register;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::section::Section;
use crate::content::EventInfo;

use about::About;
use contact::Contact;
use details::Details;
use hero::Hero;
use notes::Notes;
use register::Register;

/// Accent colour shared by a card, its icon bubble and its text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tint {
    Purple,
    Cyan,
    Fuchsia,
}

impl Tint {
    pub fn cycle(i: usize) -> Tint {
        [Tint::Purple, Tint::Cyan, Tint::Fuchsia][i % 3]
    }

    pub fn text(self) -> &'static str {
        match self {
            Tint::Purple => "text-purple-600",
            Tint::Cyan => "text-cyan-600",
            Tint::Fuchsia => "text-fuchsia-600",
        }
    }

    pub fn card(self) -> &'static str {
        match self {
            Tint::Purple => "border-purple-200 hover:border-purple-400 hover:shadow-purple-200/50 to-purple-50/30",
            Tint::Cyan => "border-cyan-200 hover:border-cyan-400 hover:shadow-cyan-200/50 to-cyan-50/30",
            Tint::Fuchsia => "border-fuchsia-200 hover:border-fuchsia-400 hover:shadow-fuchsia-200/50 to-pink-50/30",
        }
    }

    pub fn pill_border(self) -> &'static str {
        match self {
            Tint::Purple => "border-purple-200/50",
            Tint::Cyan => "border-cyan-200/50",
            Tint::Fuchsia => "border-fuchsia-200/50",
        }
    }

    pub fn bubble(self) -> &'static str {
        match self {
            Tint::Purple => "bg-gradient-to-br from-purple-100 to-fuchsia-100 shadow-purple-200/50",
            Tint::Cyan => "bg-gradient-to-br from-cyan-100 to-blue-100 shadow-cyan-200/50",
            Tint::Fuchsia => "bg-gradient-to-br from-fuchsia-100 to-purple-100 shadow-fuchsia-200/50",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Tint::Purple => "bg-gradient-to-br from-purple-600 to-fuchsia-600",
            Tint::Cyan => "bg-gradient-to-br from-cyan-600 to-blue-600",
            Tint::Fuchsia => "bg-gradient-to-br from-fuchsia-600 to-pink-600",
        }
    }
}

#[component]
pub fn SectionHeading(text: &'static str) -> impl IntoView {
    view! {
        <h2 class="text-4xl sm:text-5xl mb-6 bg-gradient-to-r from-purple-700 to-cyan-600 bg-clip-text text-transparent">
            {text}
        </h2>
    }
}

#[component]
pub fn Landing(info: &'static EventInfo) -> impl IntoView {
    let location = use_location();

    // honour /#details style deep links once the sections exist
    Effect::new(move |_| {
        if let Some(section) = Section::from_hash(&location.hash.get()) {
            log::debug!("deep link to #{}", section.id());
            section.scroll_into_view();
        }
    });

    view! {
        <Hero info/>
        <About info/>
        <Details info/>
        <Notes info/>
        <Register info/>
        <Contact info/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tints_cycle() {
        let got: Vec<_> = (0..6).map(Tint::cycle).collect();
        assert_eq!(
            got,
            [Tint::Purple, Tint::Cyan, Tint::Fuchsia, Tint::Purple, Tint::Cyan, Tint::Fuchsia]
        );
    }
}
