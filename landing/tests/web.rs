//! Browser smoke tests. Run with `wasm-pack test --headless --firefox landing`.

#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::Executor;
use psicologia_ambient::{AmbientConfig, SceneKind};
use psicologia_landing::App;
use psicologia_landing::canvas::CanvasAnimation;
use psicologia_landing::sections::SKY_FADE;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn win() -> Window {
    web_sys::window().unwrap()
}

fn doc() -> Document {
    win().document().unwrap()
}

fn viewport() -> (u32, u32) {
    let window = win();
    let width = window.inner_width().unwrap().as_f64().unwrap() as u32;
    let height = window.inner_height().unwrap().as_f64().unwrap() as u32;
    (width, height)
}

fn scenes(document: &Document) -> Vec<String> {
    let nodes = document.query_selector_all("canvas.sky").unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web_sys::Element>().ok())
        .filter_map(|el| el.get_attribute("data-scene"))
        .collect()
}

fn sky_canvas(document: &Document) -> HtmlCanvasElement {
    document
        .query_selector("canvas.sky")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap()
}

fn layer_is_leaving(document: &Document) -> bool {
    document
        .query_selector(".sky-layer")
        .unwrap()
        .unwrap()
        .class_list()
        .contains("leaving")
}

fn root_is_dark(document: &Document) -> bool {
    document
        .document_element()
        .unwrap()
        .class_list()
        .contains("dark")
}

fn toggle(document: &Document) -> HtmlElement {
    document
        .query_selector("button.theme-toggle")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn fire_resize() {
    let event = web_sys::Event::new("resize").unwrap();
    win().dispatch_event(&event).unwrap();
}

async fn sleep(duration: Duration) {
    let ms = duration.as_millis() as i32;
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        win()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

/// Wait out the fade of the outgoing animation, then let the swap render.
async fn settle_swap() {
    sleep(SKY_FADE + Duration::from_millis(200)).await;
    Executor::tick().await;
}

#[wasm_bindgen_test]
async fn toggling_theme_swaps_animation_after_fade_out() {
    let document = doc();
    let _mounted = leptos::mount::mount_to_body(|| view! { <App/> });
    Executor::tick().await;

    let initial = scenes(&document);
    assert_eq!(initial.len(), 1);
    let started_dark = initial[0] == "night";
    assert_eq!(root_is_dark(&document), started_dark);
    assert!(!layer_is_leaving(&document));

    toggle(&document).click();
    Executor::tick().await;

    // Colors flip at once; the old animation fades out before the new one mounts.
    assert_eq!(root_is_dark(&document), !started_dark);
    assert_eq!(scenes(&document), initial);
    assert!(layer_is_leaving(&document));

    settle_swap().await;
    let swapped = scenes(&document);
    assert_eq!(swapped.len(), 1, "old animation must be torn down");
    assert_eq!(swapped[0], if started_dark { "day" } else { "night" });
    assert!(!layer_is_leaving(&document));

    toggle(&document).click();
    Executor::tick().await;
    settle_swap().await;
    assert_eq!(scenes(&document), initial);
    assert_eq!(root_is_dark(&document), started_dark);
}

#[wasm_bindgen_test]
async fn resize_after_toggle_only_touches_new_canvas() {
    let document = doc();
    let _mounted = leptos::mount::mount_to_body(|| view! { <App/> });
    Executor::tick().await;
    let old = sky_canvas(&document);

    toggle(&document).click();
    Executor::tick().await;
    settle_swap().await;
    let new = sky_canvas(&document);
    assert_ne!(old.get_attribute("data-scene"), new.get_attribute("data-scene"));

    old.set_width(1);
    old.set_height(1);
    new.set_width(1);
    new.set_height(1);
    fire_resize();

    assert_eq!((old.width(), old.height()), (1, 1), "torn-down listener fired");
    assert_eq!((new.width(), new.height()), viewport());
}

#[wasm_bindgen_test]
async fn canvas_fills_viewport() {
    let document = doc();
    let _mounted = leptos::mount::mount_to_body(|| view! { <App/> });
    Executor::tick().await;

    let canvas = sky_canvas(&document);
    assert_eq!((canvas.width(), canvas.height()), viewport());
}

fn body_canvas(document: &Document) -> HtmlCanvasElement {
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn still_frame_schedules_no_loop() {
    let document = doc();
    let canvas = body_canvas(&document);
    let config = AmbientConfig::default();

    let still = CanvasAnimation::start(canvas.clone(), SceneKind::Day, &config, false).unwrap();
    assert!(!still.is_animating());
    assert_eq!((canvas.width(), canvas.height()), viewport());

    // Resizes still redraw the single frame.
    canvas.set_width(1);
    fire_resize();
    assert_eq!(canvas.width(), viewport().0);
    assert!(!still.is_animating());

    drop(still);
    canvas.remove();
}

#[wasm_bindgen_test]
fn dropping_animation_stops_loop_and_listener() {
    let document = doc();
    let canvas = body_canvas(&document);
    let config = AmbientConfig::default();

    let running = CanvasAnimation::start(canvas.clone(), SceneKind::Night, &config, true).unwrap();
    assert!(running.is_animating());
    drop(running);

    canvas.set_width(1);
    fire_resize();
    assert_eq!(canvas.width(), 1);
    canvas.remove();
}
