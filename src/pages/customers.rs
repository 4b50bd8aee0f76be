use yew::prelude::*;

use crate::components::{
    Dialog,
    form::{SearchInput, TextField},
};
use crate::config::Config;
use crate::hooks::{use_store::StoreHandle, use_toast::Toaster};
use crate::models::{customer::NewCustomer, date_range::local_now};
use crate::services::{repository::CustomerRepository, store::StoreAction};
use crate::utils::format::{format_currency, group_thousands, short_date};

#[derive(Properties, PartialEq)]
pub struct CustomersProps {
    pub store: StoreHandle,
    pub toaster: Toaster,
}

#[function_component(Customers)]
pub fn customers(props: &CustomersProps) -> Html {
    let search = use_state(String::new);
    let dialog_open = use_state(|| false);
    let mobile = use_state(String::new);

    let on_search = {
        let search = search.clone();
        Callback::from(move |value: String| search.set(value))
    };

    let open_dialog = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |_: MouseEvent| dialog_open.set(true))
    };

    let close_dialog = {
        let dialog_open = dialog_open.clone();
        let mobile = mobile.clone();
        Callback::from(move |()| {
            dialog_open.set(false);
            mobile.set(String::new());
        })
    };

    // Digits only, capped at the required length
    let on_mobile = {
        let mobile = mobile.clone();
        Callback::from(move |value: String| {
            mobile.set(
                value
                    .chars()
                    .filter(char::is_ascii_digit)
                    .take(Config::MOBILE_NUMBER_LEN)
                    .collect(),
            );
        })
    };

    let add_customer = {
        let store = props.store.clone();
        let toaster = props.toaster.clone();
        let mobile = mobile.clone();
        let close_dialog = close_dialog.clone();
        Callback::from(move |_: MouseEvent| {
            let customer = match NewCustomer::parse(&mobile)
                .and_then(|c| store.ensure_unique(&c).map(|()| c))
            {
                Ok(customer) => customer,
                Err(e) => {
                    toaster.error(e.to_string());
                    return;
                }
            };

            store.dispatch(StoreAction::AddCustomer(customer, local_now().date()));
            toaster.success("Customer added successfully!");
            close_dialog.emit(());
        })
    };

    let customers = props.store.search_customers(&search);

    let footer = html! {
        <>
            <button type="button" class="button button-outline" onclick={close_dialog.reform(|_: MouseEvent| ())}>
                {"Cancel"}
            </button>
            <button type="button" class="button button-primary" onclick={add_customer}>
                {"Add Customer"}
            </button>
        </>
    };

    html! {
        <div class="page customers">
            <div class="page-toolbar">
                <SearchInput
                    value={(*search).clone()}
                    placeholder="Search by mobile number..."
                    on_input={on_search}
                />
                <button type="button" class="button button-primary" onclick={open_dialog}>
                    {"+ Add Customer"}
                </button>
            </div>

            <div class="card table-card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Mobile Number"}</th>
                            <th>{"Total Spent"}</th>
                            <th>{"Total Points"}</th>
                            <th>{"Last Visit"}</th>
                            <th>{"Visits"}</th>
                            <th class="actions-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        if customers.is_empty() {
                            <tr>
                                <td colspan="6" class="empty-state">{"No customers found"}</td>
                            </tr>
                        }
                        { for customers.iter().map(|customer| {
                            let id = customer.id;
                            let remove = {
                                let store = props.store.clone();
                                let toaster = props.toaster.clone();
                                Callback::from(move |_: MouseEvent| {
                                    store.dispatch(StoreAction::RemoveCustomer(id));
                                    toaster.success("Customer removed");
                                })
                            };
                            html! {
                                <tr key={id}>
                                    <td class="mono">{ &customer.mobile }</td>
                                    <td>{ format_currency(f64::from(customer.total_spent)) }</td>
                                    <td>
                                        <span class="badge badge-accent">
                                            { format!("{} pts", group_thousands(u64::from(customer.total_points))) }
                                        </span>
                                    </td>
                                    <td>{ short_date(customer.last_visit) }</td>
                                    <td>{ customer.visits }</td>
                                    <td class="actions-cell">
                                        <button
                                            type="button"
                                            class="icon-button icon-button-danger"
                                            onclick={remove}
                                            aria-label="Delete customer"
                                        >
                                            {"🗑"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>

            <Dialog
                open={*dialog_open}
                title="Add New Customer"
                description="Enter the customer's mobile number to add them to your loyalty program."
                on_close={close_dialog}
                {footer}
            >
                <TextField
                    id="customer-mobile"
                    label="Mobile Number"
                    input_type="tel"
                    value={(*mobile).clone()}
                    placeholder="Enter 10-digit mobile number"
                    max_length={Config::MOBILE_NUMBER_LEN}
                    on_input={on_mobile}
                />
            </Dialog>
        </div>
    }
}
