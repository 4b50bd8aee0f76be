use yew::prelude::*;

use crate::components::form::{SearchInput, SelectField};
use crate::hooks::use_store::StoreHandle;
use crate::models::order::{OrderFilter, OrderStatus, StatusFilter};
use crate::services::repository::OrderRepository;
use crate::utils::format::format_currency;

#[derive(Properties, PartialEq)]
pub struct OrdersProps {
    pub store: StoreHandle,
}

#[function_component(Orders)]
pub fn orders(props: &OrdersProps) -> Html {
    let filter = use_state(OrderFilter::default);

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |query: String| {
            filter.set(OrderFilter {
                query,
                ..(*filter).clone()
            });
        })
    };

    let on_status = {
        let filter = filter.clone();
        Callback::from(move |code: String| match code.parse::<StatusFilter>() {
            Ok(status) => filter.set(OrderFilter {
                status,
                ..(*filter).clone()
            }),
            Err(e) => gloo::console::warn!(e.to_string()),
        })
    };

    let summary = props.store.order_summary();
    let orders = props.store.filter_orders(&filter);

    let status_options = std::iter::once(StatusFilter::All)
        .chain(OrderStatus::all().iter().copied().map(StatusFilter::Only))
        .map(|status| {
            let label = match status {
                StatusFilter::All => "All Status",
                StatusFilter::Only(status) => status.label(),
            };
            (AttrValue::from(status.code()), AttrValue::from(label))
        })
        .collect::<Vec<_>>();

    let quick_stats = [
        ("Pending", summary.pending, "quick-stat quick-stat-warning"),
        ("Preparing", summary.preparing, "quick-stat quick-stat-primary"),
        ("Ready", summary.ready, "quick-stat quick-stat-success"),
        ("Completed Today", summary.completed, "quick-stat"),
    ];

    html! {
        <div class="page orders">
            <div class="page-toolbar">
                <span class="badge badge-outline live-badge">{"● Live Updates"}</span>
            </div>

            <div class="stat-grid">
                { for quick_stats.into_iter().map(|(label, count, class)| html! {
                    <div class={format!("card {class}")} key={label}>
                        <p class="stat-title">{ label }</p>
                        <p class="stat-value">{ count }</p>
                    </div>
                }) }
            </div>

            <div class="filter-bar">
                <SearchInput
                    value={filter.query.clone()}
                    placeholder="Search by order ID or customer..."
                    on_input={on_search}
                />
                <SelectField
                    id="order-status"
                    options={status_options}
                    value={filter.status.code()}
                    on_change={on_status}
                />
            </div>

            <div class="card table-card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Order ID"}</th>
                            <th>{"Customer"}</th>
                            <th>{"Items"}</th>
                            <th>{"Total"}</th>
                            <th>{"Type"}</th>
                            <th>{"Status"}</th>
                            <th>{"Time"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        if orders.is_empty() {
                            <tr>
                                <td colspan="7" class="empty-state">{"No orders found"}</td>
                            </tr>
                        }
                        { for orders.iter().map(|order| html! {
                            <tr key={order.id}>
                                <td class="mono">{ &order.order_no }</td>
                                <td class="mono">{ &order.customer }</td>
                                <td>{ format!("{} items", order.items) }</td>
                                <td>{ format_currency(f64::from(order.total)) }</td>
                                <td>
                                    <span class={order.order_type.css_class()}>{ order.order_type.label() }</span>
                                </td>
                                <td>
                                    <span class={order.status.css_class()}>{ order.status.label() }</span>
                                </td>
                                <td class="muted">{ order.time_label() }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
