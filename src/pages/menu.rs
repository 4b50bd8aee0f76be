use yew::prelude::*;

use crate::components::{
    Dialog,
    form::{SearchInput, SelectField, Switch, TextArea, TextField},
};
use crate::hooks::{use_store::StoreHandle, use_toast::Toaster};
use crate::models::menu::{MenuCategory, MenuDraft, MenuItem};
use crate::services::{repository::MenuRepository, store::StoreAction};
use crate::utils::format::format_currency;

const ALL_CATEGORIES: &str = "all";

#[derive(Properties, PartialEq)]
pub struct MenuProps {
    pub store: StoreHandle,
    pub toaster: Toaster,
}

#[function_component(Menu)]
pub fn menu(props: &MenuProps) -> Html {
    let search = use_state(String::new);
    let category = use_state(|| None::<MenuCategory>);
    let dialog_open = use_state(|| false);
    let draft = use_state(MenuDraft::default);

    let on_search = {
        let search = search.clone();
        Callback::from(move |value: String| search.set(value))
    };

    let on_category = {
        let category = category.clone();
        Callback::from(move |value: String| category.set(value.parse().ok()))
    };

    let open_dialog = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |_: MouseEvent| dialog_open.set(true))
    };

    let close_dialog = {
        let dialog_open = dialog_open.clone();
        let draft = draft.clone();
        Callback::from(move |()| {
            dialog_open.set(false);
            draft.set(MenuDraft::default());
        })
    };

    // Each dialog field edits one part of the draft
    let edit = |update: fn(&mut MenuDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            update(&mut next, value);
            draft.set(next);
        })
    };

    let on_veg = {
        let draft = draft.clone();
        Callback::from(move |is_veg: bool| {
            draft.set(MenuDraft {
                is_veg,
                ..(*draft).clone()
            });
        })
    };

    let add_item = {
        let store = props.store.clone();
        let toaster = props.toaster.clone();
        let draft = draft.clone();
        let close_dialog = close_dialog.clone();
        Callback::from(move |_: MouseEvent| match draft.validate() {
            Ok(item) => {
                store.dispatch(StoreAction::AddMenuItem(item));
                toaster.success("Menu item added!");
                close_dialog.emit(());
            }
            Err(e) => toaster.error(e.to_string()),
        })
    };

    let items = props.store.filter_menu(&search, *category);

    let filter_options = std::iter::once((
        AttrValue::from(ALL_CATEGORIES),
        AttrValue::from("All Categories"),
    ))
    .chain(category_options())
    .collect::<Vec<_>>();

    let footer = html! {
        <>
            <button type="button" class="button button-outline" onclick={close_dialog.reform(|_: MouseEvent| ())}>
                {"Cancel"}
            </button>
            <button type="button" class="button button-primary" onclick={add_item}>
                {"Add Item"}
            </button>
        </>
    };

    html! {
        <div class="page menu">
            <div class="page-toolbar">
                <button type="button" class="button button-primary" onclick={open_dialog}>
                    {"+ Add Item"}
                </button>
            </div>

            <div class="filter-bar">
                <SearchInput
                    value={(*search).clone()}
                    placeholder="Search menu items..."
                    on_input={on_search}
                />
                <SelectField
                    id="menu-category-filter"
                    options={filter_options}
                    value={category.map_or(ALL_CATEGORIES, |c| c.label())}
                    on_change={on_category}
                />
            </div>

            if items.is_empty() {
                <div class="card empty-state">{"No menu items found"}</div>
            } else {
                <div class="menu-grid">
                    { for items.iter().map(|item| menu_card(item, &props.store, &props.toaster)) }
                </div>
            }

            <Dialog
                open={*dialog_open}
                title="Add Menu Item"
                description="Add a new item to your restaurant menu."
                on_close={close_dialog}
                {footer}
            >
                <TextField
                    id="menu-name"
                    label="Item Name *"
                    value={draft.name.clone()}
                    placeholder="e.g., Butter Chicken"
                    on_input={edit(|d, v| d.name = v)}
                />
                <TextArea
                    id="menu-description"
                    label="Description"
                    value={draft.description.clone()}
                    placeholder="Brief description of the item"
                    on_input={edit(|d, v| d.description = v)}
                />
                <div class="field-row">
                    <TextField
                        id="menu-price"
                        label="Price (₹) *"
                        input_type="number"
                        value={draft.price.clone()}
                        placeholder="0"
                        on_input={edit(|d, v| d.price = v)}
                    />
                    <SelectField
                        id="menu-category"
                        label="Category"
                        options={category_options()}
                        value={draft.category.label()}
                        on_change={edit(|d, v| d.category = v.parse().unwrap_or_default())}
                    />
                </div>
                <div class="field field-inline">
                    <span class="field-label">{"Vegetarian"}</span>
                    <Switch checked={draft.is_veg} on_toggle={on_veg} label="Vegetarian" />
                </div>
            </Dialog>
        </div>
    }
}

fn category_options() -> Vec<(AttrValue, AttrValue)> {
    MenuCategory::all()
        .iter()
        .map(|c| (AttrValue::from(c.label()), AttrValue::from(c.label())))
        .collect()
}

fn menu_card(item: &MenuItem, store: &StoreHandle, toaster: &Toaster) -> Html {
    let id = item.id;

    let toggle = {
        let store = store.clone();
        Callback::from(move |_: bool| store.dispatch(StoreAction::ToggleAvailability(id)))
    };

    let remove = {
        let store = store.clone();
        let toaster = toaster.clone();
        Callback::from(move |_: MouseEvent| {
            store.dispatch(StoreAction::RemoveMenuItem(id));
            toaster.success("Item removed from menu");
        })
    };

    let card_class = if item.is_available {
        "card menu-card"
    } else {
        "card menu-card unavailable"
    };

    html! {
        <div class={card_class} key={id}>
            <div class="menu-card-header">
                <div>
                    <div class="menu-card-title">
                        <span class={if item.is_veg { "veg-mark veg" } else { "veg-mark non-veg" }} />
                        <h3>{ &item.name }</h3>
                    </div>
                    <span class="badge badge-secondary">{ item.category.label() }</span>
                </div>
                <span class="menu-price">{ format_currency(item.price) }</span>
            </div>
            <p class="menu-description">{ &item.description }</p>
            <div class="menu-card-footer">
                <div class="availability">
                    <Switch checked={item.is_available} on_toggle={toggle} label="Available" />
                    <span class="muted">
                        { if item.is_available { "Available" } else { "Unavailable" } }
                    </span>
                </div>
                <button
                    type="button"
                    class="icon-button icon-button-danger"
                    onclick={remove}
                    aria-label="Delete item"
                >
                    {"🗑"}
                </button>
            </div>
        </div>
    }
}
