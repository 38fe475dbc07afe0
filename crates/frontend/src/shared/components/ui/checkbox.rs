use leptos::prelude::*;

#[component]
pub fn Checkbox(
    #[prop(into)]
    label: Signal<String>,
    #[prop(into)]
    checked: Signal<bool>,
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Disabled state (reactive: demo mode locks the form)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();
    let is_disabled = move || disabled.get().unwrap_or(false);
    let wrapper_class = move || {
        if is_disabled() {
            "form__checkbox-wrapper form__checkbox-wrapper--disabled"
        } else {
            "form__checkbox-wrapper"
        }
    };

    view! {
        <div class=wrapper_class>
            <input
                id=checkbox_id
                type="checkbox"
                class="form__checkbox"
                checked=move || checked.get()
                disabled=is_disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form__checkbox-label" for=checkbox_id>
                {label}
            </label>
        </div>
    }
}
