use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();
    view! {
        <footer class="footer container">
            <p class="footer-copyright">{copyright(year)}</p>
        </footer>
    }
}

fn copyright(year: u32) -> String {
    format!("© {year} Psicolog-IA. Todos los derechos reservados.")
}
