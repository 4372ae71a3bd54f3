//! Fixed page background: two cross-fading color layers plus the ambient
//! animation, swapped one at a time when the theme flips.

use std::time::Duration;

use leptos::prelude::*;
use psicologia_ambient::{SceneKind, Theme};

use super::{DaySky, NightSky};
use crate::dom;

/// Length of the animation fade, each way. The stylesheet uses the same
/// value for `.sky-layer` and the color layers.
pub const SKY_FADE: Duration = Duration::from_millis(1500);

#[component]
pub fn Backdrop(theme: ReadSignal<Theme>) -> impl IntoView {
    // The animation on screen lags `theme` by one fade-out.
    let shown = RwSignal::new(theme.get_untracked());
    let leaving = RwSignal::new(false);
    let ticket = StoredValue::new(0u64);

    Effect::new(move |_| {
        let next = theme.get();
        let current = ticket.get_value() + 1;
        ticket.set_value(current);

        if next == shown.get_untracked() {
            leaving.set(false);
            return;
        }
        leaving.set(true);
        set_timeout(
            move || {
                // A later toggle owns the swap now.
                if ticket.try_get_value() == Some(current) {
                    shown.set(next);
                    leaving.set(false);
                }
            },
            fade_out_delay(dom::prefers_reduced_motion()),
        );
    });

    view! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop-light"></div>
            <div class="backdrop-dark"></div>
            {move || {
                let kind = SceneKind::for_theme(shown.get());
                let sky = match kind {
                    SceneKind::Day => view! { <DaySky /> }.into_any(),
                    SceneKind::Night => view! { <NightSky /> }.into_any(),
                };
                view! {
                    <div class="sky-layer" class:leaving=move || leaving.get() data-scene=kind.as_str()>
                        {sky}
                    </div>
                }
            }}
        </div>
    }
}

/// Reduced motion swaps immediately; the stylesheet drops the fades too.
fn fade_out_delay(reduced_motion: bool) -> Duration {
    if reduced_motion { Duration::ZERO } else { SKY_FADE }
}
