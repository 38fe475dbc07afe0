use contracts::domain::a001_camera::aggregate::{Camera, CameraDto};
use contracts::shared::remote_selection::ResourceKind;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::post_json;
use crate::shared::components::ui::{Button, Input};
use crate::shared::components::{PageHeader, ResourceList};

fn describe(camera: &Camera) -> String {
    match &camera.area {
        Some(area) => format!("{} ({})", camera.rtsp, area),
        None => camera.rtsp.clone(),
    }
}

#[component]
pub fn CameraList() -> impl IntoView {
    let reload = RwSignal::new(0u32);
    let name = RwSignal::new(String::new());
    let rtsp = RwSignal::new(String::new());
    let area = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let create = move |_| {
        let dto = CameraDto {
            name: name.get_untracked(),
            rtsp: rtsp.get_untracked(),
            area: Some(area.get_untracked()),
            ..Default::default()
        };
        spawn_local(async move {
            match post_json::<_, Camera>("/api/cameras/", &dto).await {
                Ok(camera) => {
                    log::info!("Camera {} created", camera.id);
                    name.set(String::new());
                    rtsp.set(String::new());
                    area.set(String::new());
                    error.set(None);
                    reload.update(|n| *n += 1);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Cameras">
                {()}
            </PageHeader>
            <div class="form form--inline">
                <Input label="Name" value=name on_input=Callback::new(move |v| name.set(v)) />
                <Input label="RTSP" value=rtsp on_input=Callback::new(move |v| rtsp.set(v)) />
                <Input label="Area" value=area on_input=Callback::new(move |v| area.set(v)) />
                <Button on_click=Callback::new(create)>"Add"</Button>
            </div>
            {move || error.get().map(|e| view! { <div class="alert alert--danger">{e}</div> })}
            <ResourceList<Camera> kind=ResourceKind::Cameras reload=reload describe=describe />
        </div>
    }
}
