use contracts::shared::remote_selection::{ResourceKind, SelectOption};
use leptos::prelude::*;
use leptos_router::components::A;
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

/// Выпадающий список сущностей одного вида со ссылкой "Add ..."
///
/// `on_change` receives the ids of all selected options (one id for a
/// single select). A multiple select reports an empty change too, so the
/// last item can be deselected.
#[component]
pub fn ModuleSelector(
    kind: ResourceKind,
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    #[prop(into)]
    selected: Signal<Vec<String>>,
    #[prop(optional)]
    multiple: bool,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(into)]
    on_change: Callback<Vec<String>>,
) -> impl IntoView {
    let label = format!("Select {}", kind.module_name());
    let add_href = format!("/{}", kind.as_str());
    let add_text = format!("Add {}", kind.module_name());
    let select_id = format!("module-selector-{}", kind.as_str());

    view! {
        <div class="form__group module-selector">
            <label class="form__label" for=select_id.clone()>{label}</label>
            <select
                id=select_id
                class="form__select"
                multiple=multiple
                disabled=move || disabled.get().unwrap_or(false)
                on:change=move |ev| {
                    let select: HtmlSelectElement = event_target(&ev);
                    if let Some(ids) = change_to_report(multiple, selected_values(&select)) {
                        on_change.run(ids);
                    }
                }
            >
                {(!multiple).then(|| view! {
                    <option value="" disabled=true selected=move || selected.with(|s| s.is_empty())>
                        "--"
                    </option>
                })}
                <For
                    each=move || options.get()
                    key=|option| option.key.clone()
                    children=move |option| {
                        let key = option.key.clone();
                        let is_selected = move || selected.with(|s| s.contains(&key));
                        view! {
                            <option value=option.key selected=is_selected>
                                {option.header}
                            </option>
                        }
                    }
                />
            </select>
            <A href=add_href>{add_text}</A>
        </div>
    }
}

fn selected_values(select: &HtmlSelectElement) -> Vec<String> {
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|option| option.value())
        .filter(|value| !value.is_empty())
        .collect()
}

/// Single selects never report "nothing selected"; multiple selects do.
fn change_to_report(multiple: bool, ids: Vec<String>) -> Option<Vec<String>> {
    (multiple || !ids.is_empty()).then_some(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_reports_empty_change() {
        assert_eq!(change_to_report(true, Vec::new()), Some(Vec::new()));
        assert_eq!(
            change_to_report(true, vec!["2".into()]),
            Some(vec!["2".to_string()])
        );
    }

    #[test]
    fn test_single_ignores_empty_change() {
        assert_eq!(change_to_report(false, Vec::new()), None);
        assert_eq!(
            change_to_report(false, vec!["5".into()]),
            Some(vec!["5".to_string()])
        );
    }
}
