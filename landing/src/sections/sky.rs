//! Day and night canvas animations for the page backdrop.

use leptos::html::Canvas;
use leptos::prelude::*;
use psicologia_ambient::{AmbientConfig, SceneKind};
use tracing::debug;

use crate::canvas::CanvasAnimation;
use crate::dom;

/// Beige floating particles, shown in the light theme.
#[component]
pub fn DaySky() -> impl IntoView {
    view! { <Sky kind=SceneKind::Day /> }
}

/// Pulsing indigo sparkles, shown in the dark theme.
#[component]
pub fn NightSky() -> impl IntoView {
    view! { <Sky kind=SceneKind::Night /> }
}

#[component]
fn Sky(kind: SceneKind) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();
    let animation = StoredValue::new_local(None::<CanvasAnimation>);
    let config = use_context::<AmbientConfig>().unwrap_or_default();

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        match CanvasAnimation::start(canvas, kind, &config, !dom::prefers_reduced_motion()) {
            Ok(running) => animation.set_value(Some(running)),
            // Missing canvas or 2d context: the page renders without an animation.
            Err(err) => debug!(%err, scene = kind.as_str(), "ambient animation unavailable"),
        }
    });

    on_cleanup(move || {
        animation.try_update_value(|running| running.take());
    });

    view! {
        <canvas
            node_ref=canvas_ref
            class="sky"
            data-scene=kind.as_str()
            aria-hidden="true"
        ></canvas>
    }
}
