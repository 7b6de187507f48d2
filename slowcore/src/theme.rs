//! Slow Computer theme — e-ink optimized
//!
//! Two colors only, 1px outlines, no rounding, no shadows. `Paper` is black
//! ink on white; `Ink` swaps the two.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use serde::{Deserialize, Serialize};

/// Only two colors exist on this machine.
pub struct SlowColors;

impl SlowColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Which of the two colors is the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    Paper,
    Ink,
}

impl Palette {
    pub fn background(self) -> Color32 {
        match self {
            Palette::Paper => SlowColors::WHITE,
            Palette::Ink => SlowColors::BLACK,
        }
    }

    pub fn foreground(self) -> Color32 {
        match self {
            Palette::Paper => SlowColors::BLACK,
            Palette::Ink => SlowColors::WHITE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Palette::Paper => "paper",
            Palette::Ink => "ink",
        }
    }
}

/// Theme configuration for slow computer apps
pub struct SlowTheme {
    pub palette: Palette,
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for SlowTheme {
    fn default() -> Self {
        Self {
            palette: Palette::Paper,
            font_size_body: 14.0,
            font_size_heading: 22.0,
            font_size_small: 11.0,
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }
}

impl SlowTheme {
    pub fn with_palette(palette: Palette) -> Self {
        Self { palette, ..Self::default() }
    }

    /// Apply the slow computer theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_style(self.style());
    }

    fn style(&self) -> Style {
        let bg = self.palette.background();
        let fg = self.palette.foreground();

        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = match self.palette {
            Palette::Paper => Visuals::light(),
            Palette::Ink => Visuals::dark(),
        };

        visuals.override_text_color = Some(fg);
        visuals.window_fill = bg;
        visuals.panel_fill = bg;
        visuals.faint_bg_color = bg;
        visuals.extreme_bg_color = bg;

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;

        visuals.window_stroke = Stroke::new(1.0, fg);

        let mono = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = bg;
            ws.weak_bg_fill = bg;
            ws.bg_stroke = Stroke::new(1.0, fg);
            ws.fg_stroke = Stroke::new(1.0, fg);
            ws.rounding = Rounding::ZERO;
        };
        mono(&mut visuals.widgets.noninteractive);
        mono(&mut visuals.widgets.inactive);
        mono(&mut visuals.widgets.hovered);
        mono(&mut visuals.widgets.open);

        // pressed buttons invert
        visuals.widgets.active.bg_fill = fg;
        visuals.widgets.active.weak_bg_fill = fg;
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, fg);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, bg);
        visuals.widgets.active.rounding = Rounding::ZERO;

        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        visuals.selection.bg_fill = Color32::from_rgb(160, 160, 160);
        visuals.selection.stroke = Stroke::new(1.0, fg);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        style
    }

    /// Inset frame for read-outs: background fill, 1px outline
    pub fn display_frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.palette.background())
            .stroke(Stroke::new(1.0, self.palette.foreground()))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    let stroke = ui.visuals().window_stroke;
    let frame_resp = egui::Frame::none()
        .fill(ui.visuals().panel_fill)
        .stroke(stroke)
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| {
            ui.horizontal(add_contents).inner
        });
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}
