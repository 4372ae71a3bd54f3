use leptos::prelude::*;

const FEATURES: &[(&str, &str)] = &[
    (
        "Insights Potenciados por IA",
        "Algoritmos avanzados analizan patrones para proporcionar recomendaciones terapéuticas personalizadas.",
    ),
    (
        "Conexión Humana",
        "Nuestra plataforma mejora la relación terapéutica en lugar de reemplazarla.",
    ),
    (
        "Soporte accesible",
        "Disponible las 24 horas, los 7 días de la semana, lo que hace que el apoyo de salud mental sea accesible cuando lo necesites.",
    ),
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features container">
            <div class="features-grid">
                {FEATURES
                    .iter()
                    .enumerate()
                    .map(|(i, (title, description))| {
                        view! { <FeatureCard index=i title=*title description=*description /> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(index: usize, title: &'static str, description: &'static str) -> impl IntoView {
    // Cards fade in one after another.
    let delay = format!("animation-delay: {}ms", index * 100);
    view! {
        <article class="feature-card" style=delay>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}
