use contracts::domain::a002_part::aggregate::{Part, PartDto};
use contracts::shared::remote_selection::ResourceKind;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::post_json;
use crate::shared::components::ui::{Button, Input};
use crate::shared::components::{PageHeader, ResourceList};

fn describe(part: &Part) -> String {
    if part.is_demo {
        format!("{} (demo)", part.description)
    } else {
        part.description.clone()
    }
}

#[component]
pub fn PartList() -> impl IntoView {
    let reload = RwSignal::new(0u32);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let create = move |_| {
        let dto = PartDto {
            name: name.get_untracked(),
            description: description.get_untracked(),
            ..Default::default()
        };
        spawn_local(async move {
            match post_json::<_, Part>("/api/parts/", &dto).await {
                Ok(part) => {
                    log::info!("Part {} created", part.id);
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
            <PageHeader title="Parts">
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
            <ResourceList<Part> kind=ResourceKind::Parts reload=reload describe=describe />
        </div>
    }
}
