use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

/// Страница камеры после конфигурирования проекта
///
/// Reached as `/cameras/detail?name=..&isDemo=..`.
#[component]
pub fn CameraDetails() -> impl IntoView {
    let query = use_query_map();
    let name = move || query.with(|q| q.get("name")).unwrap_or_default();
    let is_demo = move || query.with(|q| q.get("isDemo")).as_deref() == Some("true");

    view! {
        <div class="page">
            <h1 class="page-header__title">{name}</h1>
            {move || is_demo().then(|| view! {
                <div class="badge">"Demo Pretrained Detection"</div>
            })}
            <p>"The project is configured. Inference results for this camera appear here."</p>
            <A href="/part_identification">"Back to Part Identification"</A>
        </div>
    }
}
