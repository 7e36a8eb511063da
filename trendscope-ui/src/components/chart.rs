//! Chart Component
//!
//! Statistics history drawn on an HTML5 canvas sized to its container.

use leptos::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use chrono::NaiveDate;
use trendscope::chart::{ChartLayout, ChartModel, SeriesKind, CHART_HEIGHT};
use trendscope::HistoryPoint;

/// Width reserved for an x-axis date label
const X_LABEL_WIDTH: f64 = 80.0;

/// Width of the hover tooltip box
const TOOLTIP_WIDTH: f64 = 160.0;

/// Date label in the browser's locale
pub fn locale_date_label(date: NaiveDate) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        use chrono::Datelike;
        // Local-time constructor keeps the calendar day as written
        let js_date =
            js_sys::Date::new_with_year_month_day(date.year() as u32, date.month0() as i32, date.day() as i32);
        String::from(js_date.to_locale_date_string("default", &JsValue::UNDEFINED))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        trendscope::chart::default_date_label(date)
    }
}

/// Left edge of the tooltip box for a cursor at `x`, kept inside the chart
fn tooltip_left(x: f64, chart_width: f64) -> f64 {
    let max_left = (chart_width - TOOLTIP_WIDTH).max(0.0);
    (x + 12.0).clamp(0.0, max_left)
}

/// Stars, forks and watchers over time
#[component]
pub fn HistoryChart(history: Vec<HistoryPoint>) -> impl IntoView {
    let model = store_value(ChartModel::from_history_with(&history, locale_date_label));
    let container_ref = create_node_ref::<html::Div>();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let width = create_rw_signal(0.0_f64);
    let hovered = create_rw_signal(None::<usize>);

    let measure = move || {
        if let Some(container) = container_ref.get_untracked() {
            width.set(container.client_width() as f64);
        }
    };

    // Size to the container once mounted, and again whenever the window resizes
    create_effect(move |_| {
        if container_ref.get().is_some() {
            measure();
        }
    });
    let resize = window_event_listener(ev::resize, move |_| measure());
    on_cleanup(move || resize.remove());

    // Redraw on size or hover changes
    create_effect(move |_| {
        let width = width.get();
        let hovered = hovered.get();

        if let Some(canvas) = canvas_ref.get() {
            model.with_value(|model| draw_chart(&canvas, model, width, hovered));
        }
    });

    let on_move = move |event: ev::MouseEvent| {
        let layout = ChartLayout::new(width.get_untracked());
        let count = model.with_value(|m| m.len());
        hovered.set(layout.index_at(event.offset_x() as f64, count));
    };
    let on_leave = move |_: ev::MouseEvent| hovered.set(None);

    let tooltip = move || {
        let index = hovered.get()?;
        let layout = ChartLayout::new(width.get());

        model.with_value(|m| {
            let tip = m.tooltip(index)?;
            let left = tooltip_left(layout.x_at(index, m.len()), layout.width);
            let label = tip.label.to_string();
            let rows = tip
                .rows
                .into_iter()
                .map(|row| {
                    view! {
                        <p style=format!("color: {}", row.color)>
                            {format!("{} : {}", row.name, row.value)}
                        </p>
                    }
                })
                .collect_view();

            Some(view! {
                <div
                    class="absolute top-2 pointer-events-none bg-gray-900/90 border border-gray-600 rounded p-2 text-sm"
                    style=format!("left: {}px; width: {}px", left, TOOLTIP_WIDTH)
                >
                    <p class="text-gray-300 mb-1">{label}</p>
                    {rows}
                </div>
            })
        })
    };

    view! {
        <div class="relative w-full" node_ref=container_ref>
            <canvas
                node_ref=canvas_ref
                height="400"
                class="w-full rounded-lg"
                on:mousemove=on_move
                on:mouseleave=on_leave
            />

            {tooltip}

            <ChartLegend />
        </div>
    }
}

/// Chart legend showing series colors
#[component]
fn ChartLegend() -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {SeriesKind::ALL
                .iter()
                .map(|kind| {
                    view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", kind.color())
                            />
                            <span class="text-sm text-gray-300">{kind.name()}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, model: &ChartModel, width: f64, hovered: Option<usize>) {
    if width <= 0.0 {
        return;
    }
    canvas.set_width(width as u32);
    canvas.set_height(CHART_HEIGHT as u32);

    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let layout = ChartLayout::new(width);
    let axis = model.y_axis;
    let count = model.len();
    let left = layout.margin.left;
    let right = layout.width - layout.margin.right;
    let bottom = layout.margin.top + layout.plot_height();

    // Clear canvas
    ctx.set_fill_style(&"#161b22".into());
    ctx.fill_rect(0.0, 0.0, layout.width, layout.height);

    // Dashed grid
    let dash = js_sys::Array::of2(&JsValue::from(3.0), &JsValue::from(3.0));
    let _ = ctx.set_line_dash(&dash);
    ctx.set_stroke_style(&"#30363d".into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");

    for tick in axis.ticks() {
        let y = layout.y_at(tick, &axis);
        ctx.begin_path();
        ctx.move_to(left, y);
        ctx.line_to(right, y);
        ctx.stroke();

        ctx.set_fill_style(&"#8b949e".into());
        let _ = ctx.fill_text(&format!("{}", tick), 5.0, y + 4.0);
    }

    let stride = layout.label_stride(count, X_LABEL_WIDTH);
    for (i, label) in model.labels.iter().enumerate() {
        let x = layout.x_at(i, count);
        ctx.begin_path();
        ctx.move_to(x, layout.margin.top);
        ctx.line_to(x, bottom);
        ctx.stroke();

        if i % stride == 0 {
            ctx.set_fill_style(&"#8b949e".into());
            let _ = ctx.fill_text(label, x - X_LABEL_WIDTH / 2.0 + 8.0, layout.height - 10.0);
        }
    }

    let _ = ctx.set_line_dash(&js_sys::Array::new());

    // Hover cursor
    if let Some(index) = hovered.filter(|i| *i < count) {
        let x = layout.x_at(index, count);
        ctx.set_stroke_style(&"#6e7681".into());
        ctx.begin_path();
        ctx.move_to(x, layout.margin.top);
        ctx.line_to(x, bottom);
        ctx.stroke();
    }

    // Draw each data series
    for series in &model.series {
        let color = series.color();
        ctx.set_stroke_style(&color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();

        for (i, value) in series.values.iter().enumerate() {
            let x = layout.x_at(i, count);
            let y = layout.y_at(*value as f64, &axis);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();

        // Draw points
        ctx.set_fill_style(&color.into());
        for (i, value) in series.values.iter().enumerate() {
            let radius = if hovered == Some(i) { 5.0 } else { 3.0 };
            ctx.begin_path();
            let _ = ctx.arc(
                layout.x_at(i, count),
                layout.y_at(*value as f64, &axis),
                radius,
                0.0,
                std::f64::consts::PI * 2.0,
            );
            ctx.fill();
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn locale_label_keeps_calendar_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let label = locale_date_label(date);
        assert!(label.contains("2024"));
        assert!(label.contains('2'));
    }
}
