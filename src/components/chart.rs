use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    element::{
        AreaStyle, AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, LineStyle,
        LineStyleType, SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Bar, Line, Pie},
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::metrics::Share;
use crate::utils::debounce::debounced_resize;

/// A named run of values drawn in one colour
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub name: &'static str,
    pub values: Vec<f64>,
    pub color: &'static str,
}

/// What a [`Chart`] draws
#[derive(Clone, Debug, PartialEq)]
pub enum ChartSpec {
    /// Shaded area on the left axis, with an optional line on a right axis
    Trend {
        labels: Vec<String>,
        area: ChartSeries,
        line: Option<ChartSeries>,
    },
    Bars {
        labels: Vec<String>,
        series: ChartSeries,
    },
    Donut { slices: Vec<Share> },
}

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    /// DOM id of the render target; must be unique on the page
    pub id: AttrValue,
    pub spec: Rc<ChartSpec>,
    pub dark_mode: bool,
}

#[function_component(Chart)]
pub fn chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (props.id.clone(), props.spec.clone(), container_ref, props.dark_mode),
            |(id, spec, container_ref, dark_mode)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(id, &container, spec, *dark_mode);

                    let id = id.clone();
                    let spec = spec.clone();
                    let dark_mode = *dark_mode;
                    debounced_resize(Config::RESIZE_DEBOUNCE_MS, move || {
                        render_chart(&id, &container, &spec, dark_mode);
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={props.id.clone()} />
        </div>
    }
}

fn render_chart(id: &str, container: &HtmlElement, spec: &ChartSpec, dark_mode: bool) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(spec, dark_mode);
    if let Err(e) = WasmRenderer::new(width, height).render(id, &chart) {
        web_sys::console::error_1(&format!("Render error for {id}: {e:?}").into());
    }
}

fn build_chart(spec: &ChartSpec, dark_mode: bool) -> CharmingChart {
    let (axis_color, grid_color) = if dark_mode {
        ("#a1a1aa", "#404040")
    } else {
        ("#6b7280", "#e5e7eb")
    };

    let legend = Legend::new()
        .bottom("0")
        .text_style(TextStyle::new().color(axis_color));

    match spec {
        ChartSpec::Trend { labels, area, line } => {
            let mut colors = vec![Color::from(area.color)];
            let mut chart = CharmingChart::new()
                .tooltip(Tooltip::new().trigger(Trigger::Axis))
                .grid(cartesian_grid())
                .x_axis(category_axis(labels, axis_color))
                .y_axis(value_axis(axis_color, grid_color))
                .series(
                    Line::new()
                        .name(area.name)
                        .smooth(true)
                        .area_style(AreaStyle::new().opacity(0.2))
                        .data(area.values.clone()),
                );

            if let Some(line) = line {
                colors.push(Color::from(line.color));
                chart = chart
                    .legend(legend)
                    .y_axis(
                        Axis::new()
                            .type_(AxisType::Value)
                            .axis_label(AxisLabel::new().color(axis_color))
                            .split_line(SplitLine::new().show(false)),
                    )
                    .series(
                        Line::new()
                            .name(line.name)
                            .smooth(true)
                            .y_axis_index(1)
                            .data(line.values.clone()),
                    );
            }

            chart.color(colors)
        }
        ChartSpec::Bars { labels, series } => CharmingChart::new()
            .color(vec![Color::from(series.color)])
            .tooltip(
                Tooltip::new()
                    .trigger(Trigger::Axis)
                    .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
            )
            .grid(cartesian_grid())
            .x_axis(category_axis(labels, axis_color))
            .y_axis(value_axis(axis_color, grid_color))
            .series(
                Bar::new()
                    .name(series.name)
                    .data(series.values.clone())
                    .bar_width("60%"),
            ),
        ChartSpec::Donut { slices } => CharmingChart::new()
            .color(slices.iter().map(|s| Color::from(s.color)).collect())
            .tooltip(Tooltip::new().trigger(Trigger::Item).formatter("{b}: {c}%"))
            .legend(legend)
            .series(
                Pie::new()
                    .radius(vec!["55%", "75%"])
                    .center(vec!["50%", "45%"])
                    .data(slices.iter().map(|s| (s.value, s.label)).collect()),
            ),
    }
}

fn cartesian_grid() -> Grid {
    Grid::new()
        .left("3%")
        .right("4%")
        .top("8%")
        .bottom("12%")
        .contain_label(true)
}

fn category_axis(labels: &[String], color: &str) -> Axis {
    Axis::new()
        .type_(AxisType::Category)
        .data(labels.to_vec())
        .axis_label(AxisLabel::new().color(color))
}

fn value_axis(color: &str, grid_color: &str) -> Axis {
    Axis::new()
        .type_(AxisType::Value)
        .axis_label(AxisLabel::new().color(color))
        .split_line(
            SplitLine::new().line_style(
                LineStyle::new()
                    .color(grid_color)
                    .type_(LineStyleType::Dashed),
            ),
        )
}
