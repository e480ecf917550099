mod app;

use app::TextToPdfApp;
use eframe::egui;
use eframe::NativeOptions;

fn main() -> Result<(), eframe::Error> {
    pretty_env_logger::init();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_title("Text to PDF Converter"),
        ..Default::default()
    };

    eframe::run_native(
        "Text to PDF Converter",
        options,
        Box::new(|cc| Box::new(TextToPdfApp::new(cc))),
    )
}
