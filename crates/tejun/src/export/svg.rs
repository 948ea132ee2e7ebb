//! Illustrative SVG preview.
//!
//! This backend renders a fixed-size, schematic preview of the process
//! (start, task, optional gateway, end, joined by arrows), labeled with the
//! model's first element name per category. It is deliberately not a
//! faithful rendering of arbitrary-sized models; the XML output is the
//! canonical diagram source for full viewers.

use svg::Document;
use svg::node::element::{Circle, Line, Path, Polygon, Rectangle, Text};

use tejun_core::model::{ElementKind, GatewayKind, ProcessModel, TaskKind};

use crate::config::StyleConfig;

const CANVAS_WIDTH: u32 = 600;
const CANVAS_HEIGHT: u32 = 140;
const ROW_Y: f32 = 80.0;
const LABEL_MAX_CHARS: usize = 8;

/// Renders the fixed-size preview for a model.
pub fn to_svg(model: &ProcessModel, style: &StyleConfig) -> String {
    let start_label = category_label(model, ElementKind::StartEvent, "開始");
    let task_label = category_label(model, ElementKind::Task(TaskKind::User), "タスク");
    let end_label = category_label(model, ElementKind::EndEvent, "終了");
    let gateway_label = model
        .first_of_kind(ElementKind::Gateway(GatewayKind::Exclusive))
        .map(|gateway| clip_label(&gateway.name));

    let mut document = Document::new()
        .set("width", CANVAS_WIDTH)
        .set("height", CANVAS_HEIGHT)
        .set("xmlns", "http://www.w3.org/2000/svg")
        .add(
            Rectangle::new()
                .set("width", CANVAS_WIDTH)
                .set("height", CANVAS_HEIGHT)
                .set("fill", style.background_color())
                .set("stroke", "#ddd"),
        )
        .add(
            title_text(300.0, 25.0, 14)
                .set("font-weight", "bold")
                .add(svg::node::Text::new("📊 BPMN Process Flow")),
        );

    // Start event.
    document = document
        .add(event_circle(80.0, "#e8f5e8", "#4CAF50", 2))
        .add(glyph_text(80.0, ROW_Y + 5.0, "🟢"))
        .add(label_text(80.0, ROW_Y + 25.0, &start_label));

    document = add_arrow(document, 100.0, 180.0);

    // Task.
    document = document
        .add(
            Rectangle::new()
                .set("x", 190)
                .set("y", 60)
                .set("width", 100)
                .set("height", 40)
                .set("rx", 5)
                .set("fill", "#f0f8ff")
                .set("stroke", "#2196F3")
                .set("stroke-width", 2),
        )
        .add(glyph_text(240.0, ROW_Y - 5.0, "📋"))
        .add(label_text(240.0, ROW_Y + 8.0, &task_label));

    // Gateway row is only drawn when the model has one.
    if let Some(gateway_label) = gateway_label {
        document = add_arrow(document, 290.0, 370.0);
        document = document
            .add(
                Path::new()
                    .set("d", "M 400 60 L 420 80 L 400 100 L 380 80 Z")
                    .set("fill", "#fff3e0")
                    .set("stroke", "#FF9800")
                    .set("stroke-width", 2),
            )
            .add(glyph_text(400.0, ROW_Y + 3.0, "◆"))
            .add(label_text(400.0, ROW_Y + 35.0, &gateway_label));
        document = add_arrow(document, 420.0, 500.0);
    } else {
        document = add_arrow(document, 290.0, 500.0);
    }

    // End event.
    document = document
        .add(event_circle(520.0, "#ffebee", "#f44336", 3))
        .add(glyph_text(520.0, ROW_Y + 5.0, "🔴"))
        .add(label_text(520.0, ROW_Y + 25.0, &end_label));

    document = document.add(
        title_text(300.0, 130.0, 9).add(svg::node::Text::new(
            "💡 完全な図はBPMN XMLをビューアーで開いてご確認ください",
        )),
    );

    document.to_string()
}

fn category_label(model: &ProcessModel, kind: ElementKind, fallback: &str) -> String {
    model
        .first_of_kind(kind)
        .map(|element| clip_label(&element.name))
        .unwrap_or_else(|| fallback.to_string())
}

/// Preview labels are clipped harder than model names: the canvas is small.
fn clip_label(name: &str) -> String {
    if name.chars().count() <= LABEL_MAX_CHARS {
        return name.to_string();
    }
    let clipped: String = name.chars().take(LABEL_MAX_CHARS).collect();
    format!("{clipped}...")
}

fn event_circle(cx: f32, fill: &str, stroke: &str, stroke_width: u32) -> Circle {
    Circle::new()
        .set("cx", cx)
        .set("cy", ROW_Y)
        .set("r", 20)
        .set("fill", fill)
        .set("stroke", stroke)
        .set("stroke-width", stroke_width)
}

fn glyph_text(x: f32, y: f32, glyph: &str) -> Text {
    title_text(x, y, 12).add(svg::node::Text::new(glyph))
}

fn label_text(x: f32, y: f32, label: &str) -> Text {
    title_text(x, y, 10).add(svg::node::Text::new(label))
}

fn title_text(x: f32, y: f32, font_size: u32) -> Text {
    Text::new("")
        .set("x", x)
        .set("y", y)
        .set("text-anchor", "middle")
        .set("font-family", "Arial")
        .set("font-size", font_size)
}

/// Draws one connector line with an arrowhead ending at `to_x`.
fn add_arrow(document: Document, from_x: f32, to_x: f32) -> Document {
    let head = format!(
        "{},{} {},{} {},{}",
        to_x - 5.0,
        ROW_Y - 5.0,
        to_x + 5.0,
        ROW_Y,
        to_x - 5.0,
        ROW_Y + 5.0
    );

    document
        .add(
            Line::new()
                .set("x1", from_x)
                .set("y1", ROW_Y)
                .set("x2", to_x)
                .set("y2", ROW_Y)
                .set("stroke", "#666")
                .set("stroke-width", 2),
        )
        .add(Polygon::new().set("points", head).set("fill", "#666"))
}
