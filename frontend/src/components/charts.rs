use std::f64::consts::PI;

use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::report::format_amount;
use shared::{GroupTotal, MonthlyTotal};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::services::logging::Logger;

const CANVAS_WIDTH: u32 = 560;
const CANVAS_HEIGHT: u32 = 320;

const PALETTE: [RGBColor; 8] = [
    RGBColor(102, 126, 234),
    RGBColor(240, 147, 251),
    RGBColor(79, 209, 197),
    RGBColor(246, 173, 85),
    RGBColor(252, 129, 129),
    RGBColor(104, 211, 145),
    RGBColor(160, 174, 192),
    RGBColor(196, 113, 237),
];

fn palette(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

/// What a chart plots
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    /// Share of the total per group
    Pie(Vec<GroupTotal>),
    /// Total per group
    Bar(Vec<GroupTotal>),
    /// Labelled points joined in order
    Line(Vec<(String, f64)>),
}

impl ChartData {
    fn is_empty(&self) -> bool {
        match self {
            ChartData::Pie(groups) | ChartData::Bar(groups) => groups.is_empty(),
            ChartData::Line(points) => points.is_empty(),
        }
    }

    /// Group totals as a line, in first-seen order
    pub fn line_of_groups(groups: &[GroupTotal]) -> Self {
        ChartData::Line(groups.iter().map(|g| (g.key.clone(), g.total)).collect())
    }

    /// Monthly totals as a line, oldest month first
    pub fn line_of_months(months: &[MonthlyTotal]) -> Self {
        ChartData::Line(months.iter().map(|m| (m.month.label(), m.total)).collect())
    }
}

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    pub title: AttrValue,
    pub data: ChartData,
}

pub struct ChartCard {
    canvas_ref: NodeRef,
}

impl Component for ChartCard {
    type Message = ();
    type Properties = ChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        ctx.props() != old_props
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let data = &ctx.props().data;
        if data.is_empty() {
            return;
        }

        if self.draw(data).is_none() {
            Logger::warn_with_component("charts", &format!("Failed to draw chart '{}'", ctx.props().title));
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div class="chart-container">
                <h3 class="chart-title">{props.title.clone()}</h3>
                {if props.data.is_empty() {
                    html! {
                        <div class="chart-empty">
                            <p>{"No data available for chart"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <canvas
                            ref={self.canvas_ref.clone()}
                            class="chart-canvas"
                            width={CANVAS_WIDTH.to_string()}
                            height={CANVAS_HEIGHT.to_string()}
                        ></canvas>
                    }
                }}
            </div>
        }
    }
}

impl ChartCard {
    fn draw(&self, data: &ChartData) -> Option<()> {
        let canvas = self.canvas_ref.cast::<HtmlCanvasElement>()?;
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let backend = CanvasBackend::with_canvas_object(canvas)?;
        let root = backend.into_drawing_area();
        root.fill(&WHITE).ok()?;

        match data {
            ChartData::Pie(groups) => draw_pie(&root, groups)?,
            ChartData::Bar(groups) => draw_bar(&root, groups)?,
            ChartData::Line(points) => draw_line(&root, points)?,
        }

        root.present().ok()
    }
}

type Area = DrawingArea<CanvasBackend, plotters::coord::Shift>;

fn draw_pie(root: &Area, groups: &[GroupTotal]) -> Option<()> {
    let total: f64 = groups.iter().map(|g| g.total).sum();
    if total <= 0.0 {
        return Some(());
    }

    let center = (CANVAS_HEIGHT as i32 / 2, CANVAS_HEIGHT as i32 / 2);
    let radius = CANVAS_HEIGHT as f64 / 2.0 - 20.0;
    let mut start = -PI / 2.0;

    for (index, group) in groups.iter().enumerate() {
        let sweep = group.total / total * 2.0 * PI;
        // One vertex per degree keeps the arc smooth
        let steps = ((sweep.to_degrees()).ceil() as usize).max(1);

        let mut points = vec![center];
        for step in 0..=steps {
            let angle = start + sweep * step as f64 / steps as f64;
            points.push((
                center.0 + (radius * angle.cos()) as i32,
                center.1 + (radius * angle.sin()) as i32,
            ));
        }
        root.draw(&Polygon::new(points, palette(index).filled())).ok()?;
        start += sweep;

        // Legend
        let y = 30 + index as i32 * 24;
        let x = CANVAS_HEIGHT as i32 + 10;
        root.draw(&Rectangle::new([(x, y), (x + 14, y + 14)], palette(index).filled()))
            .ok()?;
        let label = format!("{} ({:.1}%)", group.key, group.total / total * 100.0);
        root.draw(&Text::new(label, (x + 20, y), ("sans-serif", 13).into_font().color(&BLACK)))
            .ok()?;
    }

    Some(())
}

fn draw_bar(root: &Area, groups: &[GroupTotal]) -> Option<()> {
    let max = groups.iter().map(|g| g.total).fold(0.0_f64, f64::max).max(1.0);
    let labels: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d((0u32..groups.len() as u32).into_segmented(), 0.0..max * 1.1)
        .ok()?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_label_formatter(&|v| format_amount(*v))
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                labels.get(*i as usize).map(|l| l.to_string()).unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .label_style(("sans-serif", 12, &RGBColor(102, 126, 234)))
        .axis_style(&RGBColor(230, 230, 230))
        .bold_line_style(&RGBColor(245, 245, 245))
        .draw()
        .ok()?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(palette(0).filled())
                .margin(12)
                .data(groups.iter().enumerate().map(|(i, g)| (i as u32, g.total))),
        )
        .ok()?;

    Some(())
}

fn draw_line(root: &Area, points: &[(String, f64)]) -> Option<()> {
    let max = points.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max).max(1.0);
    let last = points.len().saturating_sub(1).max(1);

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(0usize..last, 0.0..max * 1.1)
        .ok()?;

    chart
        .configure_mesh()
        .x_labels(points.len().min(12))
        .x_label_formatter(&|i| points.get(*i).map(|(label, _)| label.clone()).unwrap_or_default())
        .y_label_formatter(&|v| format_amount(*v))
        .label_style(("sans-serif", 12, &RGBColor(102, 126, 234)))
        .axis_style(&RGBColor(230, 230, 230))
        .bold_line_style(&RGBColor(245, 245, 245))
        .light_line_style(&RGBColor(250, 250, 250))
        .draw()
        .ok()?;

    let line_color = palette(0);
    chart
        .draw_series(LineSeries::new(
            points.iter().enumerate().map(|(i, (_, v))| (i, *v)),
            line_color.stroke_width(3),
        ))
        .ok()?;

    chart
        .draw_series(
            points
                .iter()
                .enumerate()
                .map(|(i, (_, v))| Circle::new((i, *v), 4, line_color.filled())),
        )
        .ok()?;

    Some(())
}
