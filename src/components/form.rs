use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub max_length: Option<usize>,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = props.on_input.reform(|e: InputEvent| {
        e.target_unchecked_into::<HtmlInputElement>().value()
    });

    html! {
        <div class="field">
            <label class="field-label" for={props.id.clone()}>{ &props.label }</label>
            <input
                id={props.id.clone()}
                class="input"
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                maxlength={props.max_length.map(|n| n.to_string())}
                {oninput}
            />
            if let Some(hint) = &props.hint {
                <p class="field-hint">{ hint }</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
}

#[function_component(TextArea)]
pub fn text_area(props: &TextAreaProps) -> Html {
    let oninput = props.on_input.reform(|e: InputEvent| {
        e.target_unchecked_into::<HtmlTextAreaElement>().value()
    });

    html! {
        <div class="field">
            <label class="field-label" for={props.id.clone()}>{ &props.label }</label>
            <textarea
                id={props.id.clone()}
                class="input textarea"
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    /// `(value, label)` pairs in display order
    pub options: Vec<(AttrValue, AttrValue)>,
    pub value: AttrValue,
    pub on_change: Callback<String>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = props.on_change.reform(|e: Event| {
        e.target_unchecked_into::<HtmlSelectElement>().value()
    });

    html! {
        <div class="field">
            if let Some(label) = &props.label {
                <label class="field-label" for={props.id.clone()}>{ label }</label>
            }
            <select id={props.id.clone()} class="input select" {onchange}>
                { for props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={*value == props.value}>{ label }</option>
                }) }
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SwitchProps {
    pub checked: bool,
    pub on_toggle: Callback<bool>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

/// Checkbox styled as a sliding switch
#[function_component(Switch)]
pub fn switch(props: &SwitchProps) -> Html {
    let onchange = props.on_toggle.reform(|e: Event| {
        e.target_unchecked_into::<HtmlInputElement>().checked()
    });

    html! {
        <label class="switch">
            <input type="checkbox" checked={props.checked} {onchange} aria-label={props.label.clone()} />
            <span class="switch-track" />
        </label>
    }
}

/// Search box with a leading magnifier icon
#[derive(Properties, PartialEq)]
pub struct SearchInputProps {
    pub value: AttrValue,
    pub placeholder: AttrValue,
    pub on_input: Callback<String>,
}

#[function_component(SearchInput)]
pub fn search_input(props: &SearchInputProps) -> Html {
    let oninput = props.on_input.reform(|e: InputEvent| {
        e.target_unchecked_into::<HtmlInputElement>().value()
    });

    html! {
        <div class="search">
            <span class="search-icon">{"🔍"}</span>
            <input
                class="input search-input"
                type="search"
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                {oninput}
            />
        </div>
    }
}
