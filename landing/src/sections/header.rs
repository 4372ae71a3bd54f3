use leptos::prelude::*;
use psicologia_ambient::Theme;

#[component]
pub fn Header(theme: ReadSignal<Theme>, set_theme: WriteSignal<Theme>) -> impl IntoView {
    view! {
        <header class="site-header container">
            <a href="/" class="brand">
                <BrainMark />
                <h1 class="brand-title">"Psicolog.IA"</h1>
            </a>
            <ThemeToggle theme=theme set_theme=set_theme />
        </header>
    }
}

#[component]
fn BrainMark() -> impl IntoView {
    view! {
        <svg
            class="brand-mark"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z" />
            <path d="M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z" />
            <path d="M15 13a4.5 4.5 0 0 1-3-4 4.5 4.5 0 0 1-3 4" />
            <path d="M12 18V5" />
        </svg>
    }
}

/// Moon/sun button flipping the page theme. The icon shows the mode a
/// click switches to.
#[component]
pub fn ThemeToggle(theme: ReadSignal<Theme>, set_theme: WriteSignal<Theme>) -> impl IntoView {
    view! {
        <button
            class="theme-toggle"
            type="button"
            aria-label=move || theme.get().label()
            title=move || theme.get().label()
            on:click=move |_| set_theme.update(|t| *t = t.toggled())
        >
            <span class=move || icon_class(theme.get()) aria-hidden="true">
                {move || icon(theme.get())}
            </span>
        </button>
    }
}

fn icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    }
}

/// Rotation is a CSS transition keyed on the `rotated` class.
fn icon_class(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "theme-icon rotated"
    } else {
        "theme-icon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_shows_target_mode() {
        assert_eq!(icon(Theme::Light), "☾");
        assert_eq!(icon(Theme::Dark), "☀");
        assert_eq!(icon(Theme::Light.toggled()), icon(Theme::Dark));
    }

    #[test]
    fn icon_rotates_only_in_dark() {
        assert_eq!(icon_class(Theme::Light), "theme-icon");
        assert_eq!(icon_class(Theme::Dark), "theme-icon rotated");
    }
}
