use contracts::domain::a003_location::aggregate::{Location, LocationDto};
use contracts::shared::remote_selection::ResourceKind;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::post_json;
use crate::shared::components::ui::{Button, Input};
use crate::shared::components::{PageHeader, ResourceList};

fn describe(location: &Location) -> String {
    location.description.clone()
}

#[component]
pub fn LocationList() -> impl IntoView {
    let reload = RwSignal::new(0u32);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let create = move |_| {
        let dto = LocationDto {
            name: name.get_untracked(),
            description: description.get_untracked(),
            ..Default::default()
        };
        spawn_local(async move {
            match post_json::<_, Location>("/api/locations/", &dto).await {
                Ok(location) => {
                    log::info!("Location {} created", location.id);
                    name.set(String::new());
                    description.set(String::new());
                    error.set(None);
                    reload.update(|n| *n += 1);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Locations">
                {()}
            </PageHeader>
            <div class="form form--inline">
                <Input label="Name" value=name on_input=Callback::new(move |v| name.set(v)) />
                <Input
                    label="Description"
                    value=description
                    on_input=Callback::new(move |v| description.set(v))
                />
                <Button on_click=Callback::new(create)>"Add"</Button>
            </div>
            {move || error.get().map(|e| view! { <div class="alert alert--danger">{e}</div> })}
            <ResourceList<Location>
                kind=ResourceKind::Locations
                reload=reload
                describe=describe
            />
        </div>
    }
}
