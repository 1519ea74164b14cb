use leptos::html;
use leptos::prelude::*;

use super::utils::{Observation, observe_once};

/// Share of the wrapper that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.3;
pub const REVEAL_SECS: f64 = 0.6;
/// Starting downward offset, in px.
pub const REVEAL_OFFSET: u32 = 50;

pub fn crossed(intersecting: bool, ratio: f64, threshold: f64) -> bool {
    intersecting && ratio >= threshold
}

pub fn reveal_style(shown: bool, delay: f64) -> String {
    let transform = if shown {
        "translateY(0)".to_owned()
    } else {
        format!("translateY({REVEAL_OFFSET}px)")
    };
    format!(
        "opacity:{};transform:{transform};transition:opacity {REVEAL_SECS}s ease-out {delay}s,transform {REVEAL_SECS}s ease-out {delay}s;",
        if shown { 1 } else { 0 },
    )
}

/// Fades and lifts its children in the first time they scroll into view.
/// Once shown, stays shown.
#[component]
pub fn Reveal(#[prop(optional)] delay: f64, children: Children) -> impl IntoView {
    let shown = RwSignal::new(false);
    let node: NodeRef<html::Div> = NodeRef::new();
    // dropped with this component's owner, which disconnects the observer
    let observation = StoredValue::new_local(None::<Observation>);

    Effect::new(move |_| {
        let Some(el) = node.get() else { return };
        if shown.get_untracked() {
            return;
        }
        match observe_once(&el, REVEAL_THRESHOLD, move || shown.set(true)) {
            Ok(handle) => observation.set_value(Some(handle)),
            Err(e) => {
                log::warn!("{e:#}; revealing without animation");
                shown.set(true);
            }
        }
    });

    view! {
        <div node_ref=node style=move || reveal_style(shown.get(), delay)>
            { children() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_intersection_and_ratio() {
        assert!(crossed(true, 0.3, REVEAL_THRESHOLD));
        assert!(crossed(true, 1.0, REVEAL_THRESHOLD));
        assert!(!crossed(true, 0.29, REVEAL_THRESHOLD));
        assert!(!crossed(false, 0.5, REVEAL_THRESHOLD));
    }

    #[test]
    fn hidden_style_is_offset_and_transparent() {
        let s = reveal_style(false, 0.0);
        assert!(s.starts_with("opacity:0;"));
        assert!(s.contains("translateY(50px)"));
    }

    #[test]
    fn shown_style_carries_delay() {
        let s = reveal_style(true, 0.2);
        assert!(s.starts_with("opacity:1;"));
        assert!(s.contains("translateY(0)"));
        assert!(s.contains("opacity 0.6s ease-out 0.2s"));
    }
}
