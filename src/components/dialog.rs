use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub open: bool,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub footer: Html,
    #[prop_or_default]
    pub children: Html,
}

/// Modal dialog; clicking the overlay closes it
#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    if !props.open {
        return Html::default();
    }

    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="dialog-root">
            <div class="dialog-overlay" onclick={close.clone()} />
            <div class="dialog" role="dialog" aria-modal="true">
                <div class="dialog-header">
                    <h2 class="dialog-title">{ &props.title }</h2>
                    if let Some(description) = &props.description {
                        <p class="dialog-description">{ description }</p>
                    }
                    <button type="button" class="dialog-close" onclick={close} aria-label="Close">{"×"}</button>
                </div>
                <div class="dialog-body">{ props.children.clone() }</div>
                <div class="dialog-footer">{ props.footer.clone() }</div>
            </div>
        </div>
    }
}
