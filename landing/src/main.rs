// Psicolog.IA Landing Page — Leptos 0.8 Edition
// Developed by The Psicolog.IA Team (c)2025

fn main() {
    psicologia_landing::start();
}
