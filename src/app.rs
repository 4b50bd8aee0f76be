use yew::prelude::*;

use crate::components::{Header, Sidebar, ToastStack};
use crate::hooks::{
    use_preferences::use_preferences, use_store::use_store, use_theme::use_theme,
    use_toast::use_toasts,
};
use crate::pages::{Analytics, Customers, Dashboard, Menu, Orders, Page, Settings};

#[function_component(App)]
pub fn app() -> Html {
    let store = use_store();
    let toasts = use_toasts();
    let theme = use_theme();
    let preferences = use_preferences();
    let page = use_state(Page::default);

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| {
            gloo::console::log!(format!("Navigate: {}", next.label()));
            page.set(next);
        })
    };

    let toaster = toasts.toaster.clone();
    let dark_mode = theme.effective_theme.is_dark();
    let saved = &preferences.preferences;

    // Each page owns its filters and date range, so they reset when it unmounts
    let content = match *page {
        Page::Dashboard => html! {
            <Dashboard
                store={store.clone()}
                {toaster}
                loyalty={saved.loyalty.clone()}
                {dark_mode}
            />
        },
        Page::Customers => html! { <Customers store={store.clone()} {toaster} /> },
        Page::Orders => html! { <Orders store={store.clone()} /> },
        Page::Menu => html! { <Menu store={store.clone()} {toaster} /> },
        Page::Analytics => html! { <Analytics store={store.clone()} {toaster} {dark_mode} /> },
        Page::Settings => html! {
            <Settings
                preferences={saved.clone()}
                on_save={preferences.save.clone()}
                {toaster}
            />
        },
    };

    html! {
        <div class="app-layout">
            <Sidebar
                current={*page}
                {on_navigate}
                restaurant_name={saved.restaurant.restaurant_name.clone()}
            />

            <div class="app-body">
                <Header
                    page={*page}
                    theme={theme.effective_theme}
                    on_toggle_theme={theme.toggle.clone()}
                    user_initials={saved.profile.initials()}
                />
                <main class="app-main">{ content }</main>
            </div>

            <ToastStack
                toasts={toasts.queue.toasts().to_vec()}
                on_dismiss={toasts.dismiss.clone()}
            />

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}
