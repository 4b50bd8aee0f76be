use yew::prelude::*;

use crate::components::form::{Switch, TextArea, TextField};
use crate::config::Config;
use crate::hooks::use_toast::Toaster;
use crate::models::{
    error::AppError,
    settings::{NotificationKind, Preferences},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum SettingsTab {
    #[default]
    Restaurant,
    Profile,
    Notifications,
    Billing,
    Loyalty,
}

impl SettingsTab {
    const ALL: [SettingsTab; 5] = [
        SettingsTab::Restaurant,
        SettingsTab::Profile,
        SettingsTab::Notifications,
        SettingsTab::Billing,
        SettingsTab::Loyalty,
    ];

    fn label(self) -> &'static str {
        match self {
            SettingsTab::Restaurant => "Restaurant",
            SettingsTab::Profile => "Profile",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Billing => "Billing",
            SettingsTab::Loyalty => "Loyalty",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SettingsProps {
    pub preferences: Preferences,
    pub on_save: Callback<Preferences, Result<(), AppError>>,
    pub toaster: Toaster,
}

/// Tabbed settings form. Edits stay in a local draft until Save validates
/// them and hands them to `on_save`, which reports whether they were stored.
#[function_component(Settings)]
pub fn settings(props: &SettingsProps) -> Html {
    let tab = use_state(SettingsTab::default);
    let draft = {
        let saved = props.preferences.clone();
        use_state(move || saved)
    };

    let edit = |update: fn(&mut Preferences, String)| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            update(&mut next, value);
            draft.set(next);
        })
    };

    let save = {
        let draft = draft.clone();
        let on_save = props.on_save.clone();
        let toaster = props.toaster.clone();
        Callback::from(move |_: MouseEvent| {
            match draft.save_with(|preferences| on_save.emit(preferences.clone())) {
                Ok(()) => toaster.success("Settings saved successfully!"),
                Err(e) => toaster.error(e.to_string()),
            }
        })
    };

    let tabs = SettingsTab::ALL.iter().map(|&t| {
        let onclick = {
            let tab = tab.clone();
            Callback::from(move |_: MouseEvent| tab.set(t))
        };
        let class = if t == *tab { "tab active" } else { "tab" };
        html! {
            <button type="button" key={t.label()} {class} {onclick}>{ t.label() }</button>
        }
    });

    let body = match *tab {
        SettingsTab::Restaurant => html! {
            <>
                <h3 class="card-title">{"Restaurant Information"}</h3>
                <div class="field-row">
                    <TextField
                        id="restaurant-name"
                        label="Restaurant Name"
                        value={draft.restaurant.restaurant_name.clone()}
                        on_input={edit(|p, v| p.restaurant.restaurant_name = v)}
                    />
                    <TextField
                        id="restaurant-email"
                        label="Email"
                        input_type="email"
                        value={draft.restaurant.email.clone()}
                        on_input={edit(|p, v| p.restaurant.email = v)}
                    />
                </div>
                <div class="field-row">
                    <TextField
                        id="restaurant-phone"
                        label="Phone"
                        input_type="tel"
                        value={draft.restaurant.phone.clone()}
                        on_input={edit(|p, v| p.restaurant.phone = v)}
                    />
                    <TextField
                        id="opening-time"
                        label="Opening Time"
                        input_type="time"
                        value={draft.restaurant.opening_time.clone()}
                        on_input={edit(|p, v| p.restaurant.opening_time = v)}
                    />
                    <TextField
                        id="closing-time"
                        label="Closing Time"
                        input_type="time"
                        value={draft.restaurant.closing_time.clone()}
                        on_input={edit(|p, v| p.restaurant.closing_time = v)}
                    />
                </div>
                <TextArea
                    id="restaurant-address"
                    label="Address"
                    value={draft.restaurant.address.clone()}
                    on_input={edit(|p, v| p.restaurant.address = v)}
                />
            </>
        },
        SettingsTab::Profile => {
            let on_two_factor = {
                let draft = draft.clone();
                Callback::from(move |enabled: bool| {
                    let mut next = (*draft).clone();
                    next.profile.two_factor = enabled;
                    draft.set(next);
                })
            };
            html! {
                <>
                    <h3 class="card-title">{"Profile Settings"}</h3>
                    <div class="profile-summary">
                        <span class="avatar avatar-large">{ draft.profile.initials() }</span>
                        <div>
                            <p class="profile-name">
                                { format!("{} {}", draft.profile.first_name, draft.profile.last_name) }
                            </p>
                            <p class="muted">{"Restaurant Owner"}</p>
                        </div>
                    </div>
                    <div class="field-row">
                        <TextField
                            id="first-name"
                            label="First Name"
                            value={draft.profile.first_name.clone()}
                            on_input={edit(|p, v| p.profile.first_name = v)}
                        />
                        <TextField
                            id="last-name"
                            label="Last Name"
                            value={draft.profile.last_name.clone()}
                            on_input={edit(|p, v| p.profile.last_name = v)}
                        />
                    </div>
                    <TextField
                        id="profile-email"
                        label="Email"
                        input_type="email"
                        value={draft.profile.email.clone()}
                        on_input={edit(|p, v| p.profile.email = v)}
                    />
                    <div class="setting-row">
                        <div>
                            <p class="setting-label">{"Two-Factor Authentication"}</p>
                            <p class="muted">{"Add an extra layer of security to your account"}</p>
                        </div>
                        <Switch
                            checked={draft.profile.two_factor}
                            on_toggle={on_two_factor}
                            label="Two-Factor Authentication"
                        />
                    </div>
                </>
            }
        }
        SettingsTab::Notifications => html! {
            <>
                <h3 class="card-title">{"Notification Preferences"}</h3>
                { for NotificationKind::all().iter().map(|&kind| {
                    let on_toggle = {
                        let draft = draft.clone();
                        Callback::from(move |enabled: bool| {
                            let mut next = (*draft).clone();
                            next.notifications.set(kind, enabled);
                            draft.set(next);
                        })
                    };
                    html! {
                        <div class="setting-row" key={kind.label()}>
                            <div>
                                <p class="setting-label">{ kind.label() }</p>
                                <p class="muted">{ kind.description() }</p>
                            </div>
                            <Switch
                                checked={draft.notifications.is_enabled(kind)}
                                {on_toggle}
                                label={kind.label()}
                            />
                        </div>
                    }
                }) }
            </>
        },
        SettingsTab::Billing => html! {
            <>
                <h3 class="card-title">{"Billing & Subscription"}</h3>
                <div class="plan-card">
                    <div>
                        <p class="setting-label">{"Pro Plan"}</p>
                        <p class="muted">{"Unlimited customers, advanced analytics and priority support"}</p>
                    </div>
                    <p class="plan-price">{"₹1,999"}<span class="muted">{"/month"}</span></p>
                </div>
                <p class="muted">{"Next billing date: March 1, 2026"}</p>
            </>
        },
        SettingsTab::Loyalty => html! {
            <>
                <h3 class="card-title">{"Loyalty Program"}</h3>
                <div class="field-row">
                    <TextField
                        id="points-per-hundred"
                        label="Points per ₹100 spent"
                        input_type="number"
                        value={draft.loyalty.points_per_hundred.to_string()}
                        on_input={edit(|p, v| p.loyalty.points_per_hundred = v.trim().parse().unwrap_or(0))}
                    />
                    <TextField
                        id="min-redemption"
                        label="Minimum points to redeem"
                        input_type="number"
                        value={draft.loyalty.min_redemption_points.to_string()}
                        on_input={edit(|p, v| p.loyalty.min_redemption_points = v.trim().parse().unwrap_or(0))}
                    />
                    <TextField
                        id="point-value"
                        label="Value per point (₹)"
                        input_type="number"
                        value={draft.loyalty.point_value.to_string()}
                        on_input={edit(|p, v| p.loyalty.point_value = v.trim().parse().unwrap_or(0.0))}
                    />
                </div>
                <div class="qr-card">
                    <p class="setting-label">{"Counter QR Code"}</p>
                    <p class="muted">{"Display this at your counter so customers can scan and earn points"}</p>
                    <p class="mono">{ Config::POS_URL }</p>
                </div>
            </>
        },
    };

    html! {
        <div class="page settings">
            <div class="tabs">{ for tabs }</div>
            <div class="card settings-card">
                { body }
                <div class="settings-actions">
                    <button type="button" class="button button-primary" onclick={save}>
                        {"Save Changes"}
                    </button>
                </div>
            </div>
        </div>
    }
}
