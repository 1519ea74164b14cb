use leptos::prelude::*;

use crate::components::icon::{Icon, Glyph};
use crate::components::image::ImageWithFallback;
use crate::components::section::Section;
use crate::content::EventInfo;

use super::Tint;

/// A drifting background glyph. `keyframes` names an animation in `style/hunt.css`.
struct Decoration {
    icon: Icon,
    class: &'static str,
    keyframes: &'static str,
    secs: f32,
}

const DECORATIONS: [Decoration; 4] = [
    Decoration {
        icon: Icon::Hexagon,
        class: "absolute top-20 left-10 text-purple-300 opacity-40 w-24 h-24",
        keyframes: "hunt-drift-up",
        secs: 4.0,
    },
    Decoration {
        icon: Icon::Layers,
        class: "absolute top-40 right-20 text-cyan-300 opacity-40 w-32 h-32",
        keyframes: "hunt-drift-down",
        secs: 5.0,
    },
    Decoration {
        icon: Icon::Sparkles,
        class: "absolute bottom-40 left-20 text-purple-300 opacity-40 w-28 h-28",
        keyframes: "hunt-drift-tilt",
        secs: 3.5,
    },
    Decoration {
        icon: Icon::Zap,
        class: "absolute bottom-32 right-16 text-cyan-300 opacity-40 w-20 h-20",
        keyframes: "hunt-drift-spin",
        secs: 8.0,
    },
];

const PATTERN: &str = "background-image:\
    linear-gradient(45deg, rgba(147, 51, 234, 0.3) 1px, transparent 1px),\
    linear-gradient(-45deg, rgba(6, 182, 212, 0.3) 1px, transparent 1px);\
    background-size:50px 50px;";

const CTA_CLASS: &str = "hunt-press inline-flex items-center rounded-md bg-gradient-to-r from-purple-600/20 \
    via-fuchsia-600/20 to-cyan-600/20 hover:from-purple-600/30 hover:via-fuchsia-600/30 hover:to-cyan-600/30 \
    backdrop-blur-md border-2 border-purple-400/50 hover:border-purple-400/70 text-purple-700 \
    hover:text-purple-800 px-10 py-5 shadow-2xl shadow-purple-500/30";

// date, time, venue pills and the prize, team, fee row alternate accents
const PILL_TINTS: [Tint; 3] = [Tint::Purple, Tint::Cyan, Tint::Purple];
const HIGHLIGHT_TINTS: [Tint; 3] = [Tint::Purple, Tint::Cyan, Tint::Purple];

#[component]
fn Pill(icon: Icon, tint: Tint, text: String) -> impl IntoView {
    view! {
        <div class=format!(
            "flex items-center gap-2 bg-white/90 backdrop-blur-md px-4 py-2 rounded-full shadow-lg border {}",
            tint.pill_border()
        )>
            <Glyph icon class=format!("w-5 h-5 {}", tint.text())/>
            <span>{text}</span>
        </div>
    }
}

#[component]
fn Highlight(icon: Icon, tint: Tint, text: String) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 text-gray-700">
            <Glyph icon class=format!("w-5 h-5 {}", tint.text())/>
            <span>{text}</span>
        </div>
    }
}

#[component]
pub fn Hero(info: &'static EventInfo) -> impl IntoView {
    let decorations = DECORATIONS
        .iter()
        .map(|d| {
            view! {
                <div
                    class=d.class
                    style=format!("animation:{} {}s ease-in-out infinite;", d.keyframes, d.secs)
                >
                    <Glyph icon=d.icon class="w-full h-full"/>
                </div>
            }
        })
        .collect_view();

    let spots = if info.registration.spots_limited {
        Some(view! {
            <div class="inline-block mb-4 px-4 py-2 bg-gradient-to-r from-purple-100 to-cyan-100 rounded-full shadow-lg border border-purple-200/50">
                <span class="bg-gradient-to-r from-purple-600 to-cyan-600 bg-clip-text text-transparent">
                    "✨ " {info.event.badge.as_str()}
                </span>
            </div>
        })
    } else {
        None
    };

    view! {
        <section class="relative min-h-screen flex items-center justify-center px-4 pt-20 overflow-hidden">
            <div class="absolute inset-0 z-0">
                <ImageWithFallback
                    src=info.event.hero_image.as_str()
                    alt="Treasure hunt background"
                    class="w-full h-full object-cover opacity-15"
                />
                <div class="absolute inset-0 bg-gradient-to-b from-purple-50 via-white/95 to-cyan-50/80"></div>
            </div>

            {decorations}

            <div class="absolute inset-0 z-0 opacity-5">
                <div class="w-full h-full" style=PATTERN></div>
            </div>
            <div class="absolute inset-0 z-0 bg-gradient-to-r from-transparent via-white/10 to-transparent transform -skew-x-12 animate-pulse hunt-sheen"></div>

            <div class="max-w-5xl mx-auto text-center relative z-10">
                <div class="hunt-rise">
                    {spots}

                    <div class="mb-3">
                        <span class="text-sm sm:text-base text-purple-600/70 tracking-wider uppercase">
                            {format!("{} Presents", info.event.host)}
                        </span>
                    </div>

                    <h1 class="text-5xl sm:text-6xl lg:text-7xl mb-2 bg-gradient-to-r from-purple-600 via-fuchsia-500 to-cyan-500 bg-clip-text text-transparent drop-shadow-lg">
                        {info.event.name.as_str()}
                    </h1>
                    <p class="text-2xl sm:text-3xl text-gray-700 mb-4 drop-shadow-sm">{info.year()}</p>
                    <p class="text-lg text-gray-600 mb-8 max-w-2xl mx-auto">{info.event.tagline.as_str()}</p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center mb-8">
                        <Pill icon=Icon::Calendar tint=PILL_TINTS[0] text=info.date_label()/>
                        <Pill icon=Icon::Clock tint=PILL_TINTS[1] text=info.time_label()/>
                        <Pill icon=Icon::MapPin tint=PILL_TINTS[2] text=info.event.venue.clone()/>
                    </div>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center mb-12">
                        <Highlight icon=Icon::Trophy tint=HIGHLIGHT_TINTS[0] text=format!("{} in Prizes", info.prizes.amount_label())/>
                        <div class="hidden sm:block w-1 h-1 bg-purple-400 rounded-full"></div>
                        <Highlight icon=Icon::Users tint=HIGHLIGHT_TINTS[1] text=format!("Teams of {} Players", info.team.label())/>
                        <div class="hidden sm:block w-1 h-1 bg-cyan-400 rounded-full"></div>
                        <Highlight
                            icon=Icon::CheckCircle
                            tint=HIGHLIGHT_TINTS[2]
                            text=format!("{} Registration", info.registration_fee_label())
                        />
                    </div>

                    <button
                        type="button"
                        class=CTA_CLASS
                        on:click=move |_| Section::Register.scroll_into_view()
                    >
                        "Register Your Team Now"
                    </button>
                </div>

                <div class="mt-16 hunt-fade-late">
                    <Glyph icon=Icon::ChevronDown class="w-8 h-8 mx-auto animate-bounce text-purple-600"/>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbouring_items_alternate_accent() {
        for tints in [PILL_TINTS, HIGHLIGHT_TINTS] {
            for pair in tints.windows(2) {
                assert_ne!(pair[0], pair[1]);
                assert_ne!(pair[0].text(), pair[1].text());
            }
        }
        assert_eq!(PILL_TINTS[1].pill_border(), "border-cyan-200/50");
    }
}
