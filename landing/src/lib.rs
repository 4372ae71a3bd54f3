// Psicolog.IA Landing Page — Leptos 0.8 Edition
// Developed by The Psicolog.IA Team (c)2025

pub mod canvas;
pub mod dom;
pub mod error;
pub mod sections;
pub mod telemetry;

use leptos::prelude::*;
use sections::*;
use psicologia_ambient::Theme;
use tracing::{debug, info};

/// Panic hook, console logging, then mount the page.
pub fn start() {
    console_error_panic_hook::set_once();
    telemetry::init();
    info!(version = env!("CARGO_PKG_VERSION"), "landing starting");
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Page shell: owns the theme flag and mirrors it onto `<html>`.
#[component]
pub fn App() -> impl IntoView {
    let (theme, set_theme) = signal(dom::preferred_theme());
    provide_context(dom::load_config());

    Effect::new(move |_| {
        let theme: Theme = theme.get();
        if let Err(err) = dom::apply_theme(theme) {
            debug!(%err, "theme class not applied");
        }
    });

    view! {
        <Backdrop theme=theme />
        <div class="page">
            <Header theme=theme set_theme=set_theme />
            <main>
                <Hero />
            </main>
            <Features />
            <Footer />
        </div>
    }
}
