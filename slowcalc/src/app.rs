//! SlowCalc application

use egui::Context;
use slowcalc::{CalcConfig, CalcFault, Calculator, Command, HistoryView, Variant};
use slowcore::theme::menu_bar;
use slowcore::{Palette, SlowTheme};

/// Digit and operator rows, top to bottom.
const GRID: [[&str; 4]; 4] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
];

const BUTTON_HEIGHT: f32 = 38.0;
const BUTTON_GAP: f32 = 8.0;

pub struct SlowCalcApp {
    calc: Calculator,
    config: CalcConfig,
    theme: SlowTheme,
    /// Last display text handed back by the engine.
    display: String,
    /// Pending blocking notification, e.g. division by zero.
    notice: Option<String>,
    /// Open history window contents.
    history: Option<HistoryView>,
    show_about: bool,
}

impl SlowCalcApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: CalcConfig) -> Self {
        let theme = SlowTheme::with_palette(config.palette);
        theme.apply(&cc.egui_ctx);
        let calc = Calculator::new(config.engine());
        Self {
            display: calc.display().to_string(),
            calc,
            config,
            theme,
            notice: None,
            history: None,
            show_about: false,
        }
    }

    fn dispatch(&mut self, command: Command) {
        let output = self.calc.apply(command);
        self.display = output.display;
        if let Some(fault @ CalcFault::DivisionByZero) = output.fault {
            self.notice = Some(fault.to_string());
        }
        if let Some(view) = output.history {
            self.history = Some(view);
        }
    }

    fn press(&mut self, label: &str) {
        match label.parse::<Command>() {
            Ok(command) => self.dispatch(command),
            Err(e) => tracing::error!(error = %e, "button has no command"),
        }
    }

    fn set_variant(&mut self, variant: Variant) {
        if self.config.variant == variant {
            return;
        }
        tracing::info!(variant = variant.label(), "switching calculator");
        self.config.variant = variant;
        self.calc = Calculator::new(self.config.engine());
        self.display = self.calc.display().to_string();
        self.history = None;
        self.save_config();
    }

    fn set_palette(&mut self, ctx: &Context, palette: Palette) {
        if self.config.palette == palette {
            return;
        }
        self.config.palette = palette;
        self.theme = SlowTheme::with_palette(palette);
        self.theme.apply(ctx);
        self.save_config();
    }

    fn save_config(&self) {
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "failed to save calculator preferences");
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let display_height = 48.0;
        self.theme.display_frame().show(ui, |ui| {
            ui.set_min_height(display_height);
            ui.set_max_height(display_height);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(&self.display)
                        .font(egui::FontId::proportional(28.0))
                        .strong(),
                );
            });
        });
    }

    fn render_buttons(&mut self, ui: &mut egui::Ui) {
        let mut pressed: Option<&str> = None;
        let btn_w = (ui.available_width() - 3.0 * BUTTON_GAP) / 4.0;

        for row in GRID {
            ui.horizontal(|ui| {
                for label in row {
                    if render_button(ui, label, btn_w, BUTTON_HEIGHT) {
                        pressed = Some(label);
                    }
                }
            });
        }

        // bottom row: clear, plus the log when one is kept
        let mut last_row = vec!["C"];
        if self.calc.config().record_history {
            last_row.push("H");
        }
        let count = last_row.len() as f32;
        let wide_w = (ui.available_width() - (count - 1.0) * BUTTON_GAP) / count;
        ui.horizontal(|ui| {
            for label in last_row {
                if render_button(ui, label, wide_w, BUTTON_HEIGHT) {
                    pressed = Some(label);
                }
            }
        });

        if let Some(label) = pressed {
            self.press(label);
        }
    }

    fn render_notice(&mut self, ctx: &Context) {
        let Some(message) = self.notice.clone() else {
            return;
        };
        egui::Window::new("error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(message);
                    ui.add_space(4.0);
                    if ui.button("ok").clicked() {
                        self.notice = None;
                    }
                });
            });
    }

    fn render_history(&mut self, ctx: &Context) {
        let Some(view) = &self.history else {
            return;
        };
        let mut open = true;
        egui::Window::new("history")
            .collapsible(false)
            .resizable(false)
            .default_width(220.0)
            .open(&mut open)
            .show(ctx, |ui| match view {
                HistoryView::Empty => {
                    ui.label("no calculations yet");
                }
                HistoryView::Entries(entries) => {
                    egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                        for entry in entries {
                            ui.monospace(entry.to_string());
                        }
                    });
                }
            });
        if !open {
            self.history = None;
        }
    }

    fn render_about(&mut self, ctx: &Context) {
        if !self.show_about {
            return;
        }
        egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label(concat!("version ", env!("CARGO_PKG_VERSION")));
                    ui.add_space(4.0);
                    ui.label("calculator for slowOS");
                });
                ui.add_space(4.0);
                ui.separator();
                ui.label("variants:");
                ui.label("  classic / ledger");
                ui.add_space(2.0);
                ui.label("ledger keeps a log of results (H)");
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

fn render_button(ui: &mut egui::Ui, label: &str, width: f32, height: f32) -> bool {
    ui.add_sized([width, height], egui::Button::new(label)).clicked()
}

impl eframe::App for SlowCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("view", |ui| {
                    for variant in [Variant::Classic, Variant::Ledger] {
                        if ui.selectable_label(self.config.variant == variant, variant.label()).clicked() {
                            self.set_variant(variant);
                            ui.close_menu();
                        }
                    }
                });
                ui.menu_button("palette", |ui| {
                    for palette in [Palette::Paper, Palette::Ink] {
                        if ui.selectable_label(self.config.palette == palette, palette.label()).clicked() {
                            self.set_palette(ui.ctx(), palette);
                            ui.close_menu();
                        }
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        let blocked = self.notice.is_some();
        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.config.palette.background())
                    .inner_margin(egui::Margin::same(8.0)),
            )
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                ui.add_enabled_ui(!blocked, |ui| {
                    ui.spacing_mut().item_spacing.x = BUTTON_GAP;
                    self.render_buttons(ui);
                });
            });

        self.render_notice(ctx);
        self.render_history(ctx);
        self.render_about(ctx);
    }
}
