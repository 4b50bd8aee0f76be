use yew::prelude::*;

use crate::pages::Page;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
    pub restaurant_name: AttrValue,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <span class="brand-mark">{"★"}</span>
                <div>
                    <p class="brand-name">{ &props.restaurant_name }</p>
                    <p class="brand-caption">{"Loyalty Dashboard"}</p>
                </div>
            </div>
            <nav class="sidebar-nav">
                { for Page::all().iter().map(|&page| {
                    let onclick = props.on_navigate.reform(move |_: MouseEvent| page);
                    let class = if page == props.current { "nav-item active" } else { "nav-item" };
                    html! {
                        <button type="button" key={page.label()} {class} {onclick}>
                            <span class="nav-icon">{ page.icon() }</span>
                            <span>{ page.label() }</span>
                        </button>
                    }
                }) }
            </nav>
        </aside>
    }
}
