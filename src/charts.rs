//! Chart window: color identity pie, mana curve bars and a stacked
//! percentage bar, painted with egui.

use crate::analysis::DeckAnalysis;
use crate::models::ColorBucket;
use eframe::egui::{
    self, pos2, vec2, Align2, Color32, FontId, Mesh, Painter, Pos2, Rect, Sense, Shape, Stroke,
    ViewportBuilder,
};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Used for any label without an entry in the color map
pub const FALLBACK_COLOR: Color32 = Color32::from_rgb(0xCC, 0xCC, 0xCC);

const OUTLINE: Stroke = Stroke {
    width: 0.5,
    color: Color32::BLACK,
};

// coolwarm end points
const COOL: Color32 = Color32::from_rgb(0x3B, 0x4C, 0xC0);
const WARM: Color32 = Color32::from_rgb(0xB4, 0x04, 0x26);

/// Fill color for a color identity label ("W", "U", ..., "C")
pub fn chart_color(label: &str) -> Color32 {
    match label {
        "W" => Color32::from_rgb(0xF9, 0xFA, 0xF9),
        "U" => Color32::from_rgb(0xAD, 0xD8, 0xE6),
        "B" => Color32::from_rgb(0x36, 0x45, 0x4F),
        "R" => Color32::from_rgb(0xDC, 0x14, 0x3C),
        "G" => Color32::from_rgb(0x7C, 0xFC, 0x00),
        "C" => Color32::from_rgb(0xA9, 0xA9, 0xA9),
        _ => FALLBACK_COLOR,
    }
}

/// The numbers behind the three charts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub color_counts: Vec<(ColorBucket, u64)>,
    pub color_percentages: Vec<(ColorBucket, f64)>,
    pub mana_curve: Vec<(u32, u64)>,
}

impl ChartData {
    pub fn from_analysis(analysis: &DeckAnalysis) -> Self {
        Self {
            color_counts: analysis.colors.non_zero(),
            color_percentages: analysis.colors.percentages(),
            mana_curve: analysis.costs.iter().collect(),
        }
    }

    pub fn has_color_charts(&self) -> bool {
        !self.color_counts.is_empty()
    }

    pub fn has_mana_curve(&self) -> bool {
        !self.mana_curve.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_color_charts() && !self.has_mana_curve()
    }
}

/// One slice of the pie, angles in radians measured counterclockwise from 3 o'clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub bucket: ColorBucket,
    pub start: f32,
    pub sweep: f32,
    pub share: f64,
}

/// Lay out pie wedges starting at 12 o'clock, going counterclockwise
pub fn pie_wedges(counts: &[(ColorBucket, u64)]) -> Vec<Wedge> {
    let total: u64 = counts.iter().map(|(_, c)| c).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = FRAC_PI_2;
    counts
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(bucket, count)| {
            let share = *count as f64 / total as f64;
            let sweep = share as f32 * TAU;
            let wedge = Wedge {
                bucket: *bucket,
                start,
                sweep,
                share: share * 100.0,
            };
            start += sweep;
            wedge
        })
        .collect()
}

/// Left/right edges of each stacked segment on a 0..100 scale
pub fn stacked_segments(percentages: &[(ColorBucket, f64)]) -> Vec<(ColorBucket, f64, f64)> {
    let mut left = 0.0;
    percentages
        .iter()
        .map(|(bucket, share)| {
            let segment = (*bucket, left, (left + share).min(100.0));
            left += share;
            segment
        })
        .collect()
}

/// Tick spacing for the count axis: whole numbers, at most ~6 ticks
pub fn count_axis_step(max: u64) -> u64 {
    max.div_ceil(6).max(1)
}

fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgb(
        mix(from.r(), to.r()),
        mix(from.g(), to.g()),
        mix(from.b(), to.b()),
    )
}

fn point_on_circle(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    // screen y grows downward
    pos2(center.x + radius * angle.cos(), center.y - radius * angle.sin())
}

fn outline(painter: &Painter, rect: Rect) {
    painter.add(Shape::closed_line(
        vec![
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
        ],
        OUTLINE,
    ));
}

pub struct ChartsApp {
    data: ChartData,
}

impl ChartsApp {
    pub fn new(data: ChartData) -> Self {
        Self { data }
    }

    fn show_pie(&self, ui: &mut egui::Ui) {
        ui.heading("Deck Color Identity Distribution (Per Nonland Card)");

        let size = vec2(ui.available_width().min(640.0), 420.0);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let rect = response.rect;
        let center = rect.center();
        let radius = rect.height().min(rect.width()) * 0.38;
        let text_color = ui.visuals().text_color();

        for wedge in pie_wedges(&self.data.color_counts) {
            let fill = chart_color(wedge.bucket.code());
            let steps = ((wedge.sweep / TAU) * 128.0).ceil().max(2.0) as usize;

            let mut arc = Vec::with_capacity(steps + 1);
            for i in 0..=steps {
                let angle = wedge.start + wedge.sweep * i as f32 / steps as f32;
                arc.push(point_on_circle(center, radius, angle));
            }

            let mut mesh = Mesh::default();
            mesh.colored_vertex(center, fill);
            for point in &arc {
                mesh.colored_vertex(*point, fill);
            }
            for i in 1..arc.len() as u32 {
                mesh.add_triangle(0, i, i + 1);
            }
            painter.add(Shape::mesh(mesh));

            let mut edge = Vec::with_capacity(arc.len() + 1);
            edge.push(center);
            edge.extend(arc);
            painter.add(Shape::closed_line(edge, OUTLINE));

            let mid = wedge.start + wedge.sweep / 2.0;
            painter.text(
                point_on_circle(center, radius * 1.12, mid),
                Align2::CENTER_CENTER,
                wedge.bucket.code(),
                FontId::proportional(14.0),
                text_color,
            );
            painter.text(
                point_on_circle(center, radius * 0.6, mid),
                Align2::CENTER_CENTER,
                format!("{:.1}%", wedge.share),
                FontId::proportional(12.0),
                Color32::BLACK,
            );
        }
    }

    fn show_mana_curve(&self, ui: &mut egui::Ui) {
        ui.heading("Mana Curve (Converted Mana Cost Distribution of Spells)");

        let size = vec2(ui.available_width().min(900.0), 360.0);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let text_color = ui.visuals().text_color();
        let plot = Rect::from_min_max(
            response.rect.min + vec2(56.0, 12.0),
            response.rect.max - vec2(12.0, 44.0),
        );

        let max = self
            .data
            .mana_curve
            .iter()
            .map(|(_, count)| *count)
            .max()
            .unwrap_or(0);
        let step = count_axis_step(max);
        let top = max.div_ceil(step).max(1) * step;
        let y_for = |count: u64| plot.bottom() - plot.height() * count as f32 / top as f32;

        let grid = Stroke::new(0.5, text_color.gamma_multiply(0.5));
        let mut tick = 0;
        while tick <= top {
            let y = y_for(tick);
            painter.extend(Shape::dashed_line(
                &[pos2(plot.left(), y), pos2(plot.right(), y)],
                grid,
                4.0,
                3.0,
            ));
            painter.text(
                pos2(plot.left() - 6.0, y),
                Align2::RIGHT_CENTER,
                tick.to_string(),
                FontId::proportional(12.0),
                text_color,
            );
            tick += step;
        }

        let bars = self.data.mana_curve.len();
        let slot = plot.width() / bars.max(1) as f32;
        for (i, (cost, count)) in self.data.mana_curve.iter().enumerate() {
            let t = if bars > 1 { i as f32 / (bars - 1) as f32 } else { 0.5 };
            let x = plot.left() + slot * i as f32;
            let bar = Rect::from_min_max(
                pos2(x + slot * 0.1, y_for(*count)),
                pos2(x + slot * 0.9, plot.bottom()),
            );
            painter.rect_filled(bar, 0.0, lerp_color(COOL, WARM, t));
            outline(&painter, bar);
            painter.text(
                pos2(bar.center().x, plot.bottom() + 6.0),
                Align2::CENTER_TOP,
                cost.to_string(),
                FontId::proportional(12.0),
                text_color,
            );
        }

        painter.line_segment([plot.left_bottom(), plot.right_bottom()], (1.0, text_color));
        painter.line_segment([plot.left_bottom(), plot.left_top()], (1.0, text_color));
        painter.text(
            pos2(plot.center().x, response.rect.bottom() - 4.0),
            Align2::CENTER_BOTTOM,
            "Converted Mana Cost (CMC)",
            FontId::proportional(14.0),
            text_color,
        );
        painter.text(
            pos2(response.rect.left(), plot.top() - 12.0),
            Align2::LEFT_TOP,
            "Number of Spells",
            FontId::proportional(14.0),
            text_color,
        );
    }

    fn show_stacked_bar(&self, ui: &mut egui::Ui) {
        ui.heading("Color Identity Breakdown (Percentage of Total Identity)");

        let size = vec2(ui.available_width().min(900.0), 160.0);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let text_color = ui.visuals().text_color();
        // Leave room on the right for the legend
        let plot = Rect::from_min_max(
            response.rect.min + vec2(12.0, 20.0),
            pos2(response.rect.right() - 150.0, response.rect.bottom() - 44.0),
        );
        let x_for = |pct: f64| plot.left() + plot.width() * (pct / 100.0) as f32;

        let bar_top = plot.center().y - plot.height() * 0.3;
        let bar_bottom = plot.center().y + plot.height() * 0.3;
        for (bucket, left, right) in stacked_segments(&self.data.color_percentages) {
            let segment = Rect::from_min_max(
                pos2(x_for(left), bar_top),
                pos2(x_for(right), bar_bottom),
            );
            painter.rect_filled(segment, 0.0, chart_color(bucket.code()));
            outline(&painter, segment);
        }

        for tick in (0..=100).step_by(10) {
            let x = x_for(tick as f64);
            painter.line_segment(
                [pos2(x, plot.bottom()), pos2(x, plot.bottom() + 4.0)],
                (1.0, text_color),
            );
            painter.text(
                pos2(x, plot.bottom() + 6.0),
                Align2::CENTER_TOP,
                tick.to_string(),
                FontId::proportional(12.0),
                text_color,
            );
        }
        painter.line_segment([plot.left_bottom(), plot.right_bottom()], (1.0, text_color));
        painter.text(
            pos2(plot.center().x, response.rect.bottom() - 4.0),
            Align2::CENTER_BOTTOM,
            "Percentage of Deck Color Identity",
            FontId::proportional(14.0),
            text_color,
        );

        let legend_left = plot.right() + 24.0;
        painter.text(
            pos2(legend_left, plot.top()),
            Align2::LEFT_TOP,
            "Color",
            FontId::proportional(13.0),
            text_color,
        );
        for (i, (bucket, _)) in self.data.color_percentages.iter().enumerate() {
            let y = plot.top() + 20.0 + i as f32 * 18.0;
            let swatch = Rect::from_min_size(pos2(legend_left, y), vec2(14.0, 12.0));
            painter.rect_filled(swatch, 0.0, chart_color(bucket.code()));
            outline(&painter, swatch);
            painter.text(
                pos2(legend_left + 20.0, y + 6.0),
                Align2::LEFT_CENTER,
                bucket.code(),
                FontId::proportional(12.0),
                text_color,
            );
        }
    }
}

impl eframe::App for ChartsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if self.data.has_color_charts() {
                    self.show_pie(ui);
                    ui.separator();
                }
                if self.data.has_mana_curve() {
                    self.show_mana_curve(ui);
                    ui.separator();
                }
                if self.data.has_color_charts() {
                    self.show_stacked_bar(ui);
                }
            });
        });
    }
}

/// Open the chart window and block until it is closed
pub fn show_charts(data: ChartData) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([960.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Deck Analysis",
        options,
        Box::new(|_cc| Ok(Box::new(ChartsApp::new(data)))),
    )
}
