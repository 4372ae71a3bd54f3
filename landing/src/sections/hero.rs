use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h2 class="hero-title">"Inteligencia Terapéutica"</h2>
            <p class="hero-description">
                "Combinando la empatía humana con la inteligencia artificial para brindar "
                "un mejor apoyo en materia de salud mental para todos."
            </p>
            <div class="hero-actions">
                <button type="button" class="btn btn-shimmer">"Comenzar"</button>
            </div>
        </section>
    }
}
