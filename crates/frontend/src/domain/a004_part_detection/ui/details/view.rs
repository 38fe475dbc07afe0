use super::view_model::PartIdentificationVm;
use contracts::shared::remote_selection::ResourceKind;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::components::ui::{Button, Checkbox, Input, ModuleSelector};
use crate::shared::components::PageHeader;

#[component]
pub fn PartIdentification() -> impl IntoView {
    let vm = PartIdentificationVm::new();
    vm.init();

    let navigate = StoredValue::new_local(use_navigate());
    let on_configure = Callback::new(move |_| {
        let navigate = navigate.get_value();
        vm.configure(move |href| navigate(href, Default::default()));
    });

    let demo_mode = Signal::derive(move || vm.is_test_model.get());
    let range_disabled = Signal::derive(move || vm.accuracy_range_disabled());
    let cloud_disabled = Signal::derive(move || vm.message_to_cloud_disabled());

    view! {
        <div class="page">
            <PageHeader title="Part Identification">
                {()}
            </PageHeader>

            {move || vm.load_error.get().map(|e| view! {
                <div class="alert alert--danger">
                    <strong>"Load Part Identification Error"</strong>
                    <div>{e}</div>
                </div>
            })}

            <div class="form form--column">
                <ModuleSelector
                    kind=ResourceKind::Cameras
                    options=Signal::derive(move || vm.cameras.options())
                    selected=Signal::derive(move || vm.cameras.selected_ids())
                    on_change=Callback::new(move |ids: Vec<String>| {
                        vm.cameras.select_by_id(ids)
                    })
                />
                <ModuleSelector
                    kind=ResourceKind::Parts
                    multiple=true
                    options=Signal::derive(move || vm.parts.options())
                    selected=Signal::derive(move || vm.parts.selected_ids())
                    on_change=Callback::new(move |ids: Vec<String>| {
                        vm.parts.select_by_id(ids)
                    })
                />
                <ModuleSelector
                    kind=ResourceKind::Locations
                    options=Signal::derive(move || vm.locations.options())
                    selected=Signal::derive(move || vm.locations.selected_ids())
                    disabled=demo_mode
                    on_change=Callback::new(move |ids: Vec<String>| {
                        vm.locations.select_by_id(ids)
                    })
                />

                <div class="form__row">
                    <div class="form__column">
                        <Checkbox
                            id="need-retraining"
                            label="Set up retraining"
                            checked=Signal::derive(move || vm.settings.with(|s| s.need_retraining))
                            on_change=Callback::new(move |checked| vm.set_need_retraining(checked))
                            disabled=demo_mode
                        />
                        <div class="form__caption">"Capture Image"</div>
                        <Input
                            label="Minimum (%)"
                            input_type="number"
                            value=Signal::derive(move || {
                                vm.settings.with(|s| s.accuracy_range_min.to_string())
                            })
                            on_input=Callback::new(move |v| {
                                vm.set_number(|s| &mut s.accuracy_range_min, v)
                            })
                            disabled=range_disabled
                        />
                        <Input
                            label="Maximum (%)"
                            input_type="number"
                            value=Signal::derive(move || {
                                vm.settings.with(|s| s.accuracy_range_max.to_string())
                            })
                            on_input=Callback::new(move |v| {
                                vm.set_number(|s| &mut s.accuracy_range_max, v)
                            })
                            disabled=range_disabled
                        />
                        <Input
                            label="Maximum Images to Store"
                            input_type="number"
                            value=Signal::derive(move || {
                                vm.settings.with(|s| s.max_images.to_string())
                            })
                            on_input=Callback::new(move |v| {
                                vm.set_number(|s| &mut s.max_images, v)
                            })
                            disabled=range_disabled
                            error=Signal::derive(move || vm.max_images_error())
                        />
                    </div>
                    <div class="form__column">
                        <Checkbox
                            id="send-message-to-cloud"
                            label="Send message to cloud"
                            checked=Signal::derive(move || {
                                vm.settings.with(|s| s.send_message_to_cloud)
                            })
                            on_change=Callback::new(move |checked| {
                                vm.set_send_message_to_cloud(checked)
                            })
                            disabled=demo_mode
                        />
                        <Input
                            label="Frames per minute"
                            input_type="number"
                            value=Signal::derive(move || {
                                vm.settings.with(|s| s.frames_per_min.to_string())
                            })
                            on_input=Callback::new(move |v| {
                                vm.set_number(|s| &mut s.frames_per_min, v)
                            })
                            disabled=cloud_disabled
                        />
                        <Input
                            label="Accuracy threshold"
                            input_type="number"
                            value=Signal::derive(move || {
                                vm.settings.with(|s| s.accuracy_threshold.to_string())
                            })
                            on_input=Callback::new(move |v| {
                                vm.set_number(|s| &mut s.accuracy_threshold, v)
                            })
                            disabled=cloud_disabled
                        />
                    </div>
                </div>

                {move || vm.configure_error.get().map(|e| view! {
                    <div class="alert alert--danger">{e}</div>
                })}

                <div class="form__actions">
                    <Button
                        on_click=on_configure
                        disabled=Signal::derive(move || vm.configure_disabled())
                    >
                        "Configure"
                    </Button>
                    <TestModelButton vm=vm />
                </div>
            </div>
        </div>
    }
}

/// "Demo Pretrained Detection" with a confirmation step, or "Back" while in demo mode
#[component]
fn TestModelButton(vm: PartIdentificationVm) -> impl IntoView {
    view! {
        <Show
            when=move || !vm.is_test_model.get()
            fallback=move || view! {
                <Button on_click=Callback::new(move |_| vm.leave_demo())>"Back"</Button>
            }
        >
            <Button on_click=Callback::new(move |_| vm.show_demo_warning.set(true))>
                "Demo Pretrained Detection"
            </Button>
            <Show when=move || vm.show_demo_warning.get()>
                <div class="dialog dialog--warning">
                    <p>
                        "\"Demo Pretrained Detection\" is for seeing inference result, no retraining experience here."
                    </p>
                    <p>"For retraining experience, please create a new model"</p>
                    <div class="dialog__actions">
                        <Button on_click=Callback::new(move |_| vm.enter_demo())>"Confirm"</Button>
                        <Button
                            variant="secondary"
                            on_click=Callback::new(move |_| vm.show_demo_warning.set(false))
                        >
                            "Cancel"
                        </Button>
                    </div>
                </div>
            </Show>
        </Show>
    }
}
