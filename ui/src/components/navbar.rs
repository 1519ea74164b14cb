use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::icon::{Icon, Glyph};
use super::section::{Section, SectionLink};

/// Vertical offset, in px, past which the navbar gets its solid background.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(y: f64) -> bool {
    y > SCROLL_THRESHOLD
}

pub fn nav_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed top-0 w-full z-50 transition-all duration-300 bg-white/95 backdrop-blur-sm \
         shadow-lg shadow-purple-100/50 border-b border-purple-200/30"
    } else {
        "fixed top-0 w-full z-50 transition-all duration-300 bg-transparent"
    }
}

#[component]
pub fn NavBar(brand: String) -> impl IntoView {
    let (_, y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(y.get()));

    view! {
        <nav class=move || nav_class(scrolled.get())>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4">
                <div class="flex justify-between items-center">
                    <div class="flex items-center gap-2">
                        <Glyph icon=Icon::Sparkles class="w-5 h-5 text-purple-600"/>
                        <h3 class="bg-gradient-to-r from-purple-600 to-cyan-600 bg-clip-text text-transparent">
                            {brand}
                        </h3>
                    </div>
                    <div class="hidden md:flex gap-6">
                        {Section::ALL
                            .into_iter()
                            .map(|s| s.nav_button("hover:text-purple-600 transition-colors"))
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(1200.0));
    }

    #[test]
    fn background_follows_flag() {
        assert!(nav_class(false).contains("bg-transparent"));
        assert!(nav_class(true).contains("bg-white/95"));
        assert!(!nav_class(true).contains("bg-transparent"));
    }
}
