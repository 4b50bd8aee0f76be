use yew::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::hooks::use_theme::Theme;
use crate::pages::Page;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub page: Page,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
    pub user_initials: AttrValue,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="app-header">
            <div>
                <h1 class="page-title">{ props.page.label() }</h1>
                <p class="page-subtitle">{ props.page.subtitle() }</p>
            </div>
            <div class="header-actions">
                <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
                <span class="avatar avatar-user">{ &props.user_initials }</span>
            </div>
        </header>
    }
}
