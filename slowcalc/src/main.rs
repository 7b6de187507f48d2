//! SlowCalc - A calculator for the Slow Computer
//!
//! Classic and ledger variants over one four-function engine.

mod app;

use app::SlowCalcApp;
use eframe::NativeOptions;
use slowcalc::CalcConfig;

fn main() -> eframe::Result<()> {
    slowcore::logging::init("warn,slowcalc=info");

    let config = CalcConfig::load();
    tracing::info!(variant = config.variant.label(), palette = config.palette.label(), "starting");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([260.0, 350.0])
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(move |cc| Box::new(SlowCalcApp::new(cc, config))),
    )
}
