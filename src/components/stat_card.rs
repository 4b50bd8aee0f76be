use yew::prelude::*;

use crate::utils::format::format_change;

/// Accent colour of a stat card's icon tile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatVariant {
    #[default]
    Default,
    Primary,
    Success,
    Accent,
    Warning,
}

impl StatVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatVariant::Default => "stat-icon",
            StatVariant::Primary => "stat-icon stat-icon-primary",
            StatVariant::Success => "stat-icon stat-icon-success",
            StatVariant::Accent => "stat-icon stat-icon-accent",
            StatVariant::Warning => "stat-icon stat-icon-warning",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    pub icon: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub variant: StatVariant,
    /// Percent change against the previous period
    #[prop_or_default]
    pub trend: Option<f64>,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="card stat-card">
            <div class="stat-body">
                <p class="stat-title">{ &props.title }</p>
                <p class="stat-value">{ &props.value }</p>
                if let Some(subtitle) = &props.subtitle {
                    <p class="stat-subtitle">{ subtitle }</p>
                }
                if let Some(change) = props.trend {
                    <p class={if change >= 0.0 { "stat-trend trend-up" } else { "stat-trend trend-down" }}>
                        { format!("{} {}", if change >= 0.0 { "↑" } else { "↓" }, format_change(change)) }
                        <span class="stat-trend-caption">{" vs last period"}</span>
                    </p>
                }
            </div>
            <div class={props.variant.css_class()}>{ &props.icon }</div>
        </div>
    }
}
