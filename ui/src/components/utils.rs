use anyhow::{Result, anyhow};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Smooth-scrolls the element with `id` into view. Missing ids are logged and ignored.
pub fn scroll_to_id(id: &str) {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::warn!("scroll target #{id} not found");
        return;
    };

    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub trait Disconnect {
    fn disconnect(&self);
}

impl Disconnect for IntersectionObserver {
    fn disconnect(&self) {
        IntersectionObserver::disconnect(self);
    }
}

/// Keeps an observer and its JS callback alive. Dropping it disconnects the
/// observer before the callback is released, so the browser never calls a
/// freed closure.
pub struct Observation<O: Disconnect = IntersectionObserver, C = EntriesCallback> {
    observer: O,
    _callback: C,
}

impl<O: Disconnect, C> Drop for Observation<O, C> {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Calls `on_enter` once, the first time at least `threshold` of `target` is
/// visible, then stops observing. Observation ends when the returned handle drops.
pub fn observe_once<F>(target: &Element, threshold: f64, on_enter: F) -> Result<Observation>
where
    F: 'static + Fn(),
{
    let cb: EntriesCallback = Closure::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let hit = entries
                .iter()
                .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|e| crate::components::reveal::crossed(
                    e.is_intersecting(),
                    e.intersection_ratio(),
                    threshold,
                ));

            if hit {
                on_enter();
                observer.disconnect();
            }
        },
    );

    let opts = IntersectionObserverInit::new();
    opts.set_threshold(&threshold.into());

    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts)
        .map_err(|e| anyhow!("IntersectionObserver unavailable: {e:?}"))?;
    observer.observe(target);
    Ok(Observation { observer, _callback: cb })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    type Log = Rc<RefCell<Vec<&'static str>>>;

    struct FakeObserver(Log);

    impl Disconnect for FakeObserver {
        fn disconnect(&self) {
            self.0.borrow_mut().push("disconnect");
        }
    }

    struct FakeCallback(Log);

    impl Drop for FakeCallback {
        fn drop(&mut self) {
            self.0.borrow_mut().push("callback dropped");
        }
    }

    #[test]
    fn drop_disconnects_then_releases_callback() {
        let log: Log = Rc::default();
        let obs = Observation {
            observer: FakeObserver(log.clone()),
            _callback: FakeCallback(log.clone()),
        };
        assert!(log.borrow().is_empty());

        drop(obs);
        assert_eq!(*log.borrow(), ["disconnect", "callback dropped"]);
    }
}
