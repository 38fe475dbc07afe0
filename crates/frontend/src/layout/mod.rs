use leptos::prelude::*;
use leptos_router::components::A;

/// Каркас приложения: верхнее меню и область страницы
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <header class="app-header">
                <nav class="app-header__nav">
                    <A href="/">"Home"</A>
                    <A href="/part_identification">"Part Identification"</A>
                    <A href="/cameras">"Cameras"</A>
                    <A href="/parts">"Parts"</A>
                    <A href="/locations">"Locations"</A>
                </nav>
            </header>
            <main class="app-main">{children()}</main>
        </div>
    }
}

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page-header__title">"Get started"</h1>
            <p>
                "Pick a camera, the parts to look for and a location, then configure the project."
            </p>
            <A href="/part_identification">"Go to Part Identification"</A>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page-header__title">"Page not found"</h1>
            <A href="/">"Back to home"</A>
        </div>
    }
}
