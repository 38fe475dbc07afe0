use leptos::prelude::*;

/// Поле ввода с подписью и строкой ошибки под ним
#[component]
pub fn Input(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// "text" (default), "number", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Error text shown under the field when set
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_class = move || {
        if error.get().is_some() {
            "form__input form__input--error"
        } else {
            "form__input"
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class=input_class
                type=input_t
                value=move || value.get()
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error.get().map(|e| view! {
                <div class="form__error">{e}</div>
            })}
        </div>
    }
}
