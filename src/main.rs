use document_uploader::app::UploaderApp;
use document_uploader::config::Config;
use document_uploader::utils::logger;

fn main() -> Result<(), eframe::Error> {
    logger::init();
    let config = Config::from_env();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_min_inner_size([400.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Document Uploader",
        options,
        Box::new(move |cc| Box::new(UploaderApp::new(cc, config))),
    )
}
