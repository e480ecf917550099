use eframe::egui;
use std::path::PathBuf;
use textpdf::{export_text, BuiltinFont, PageGeometry, Pt};

/// Every export is set in the same face and size; the document format has no
/// per-run styling.
const EXPORT_FONT: BuiltinFont = BuiltinFont::Helvetica;
const EXPORT_FONT_SIZE: Pt = Pt(12.0);

/// The application state: the text buffer being edited and the status line
/// shown at the bottom of the window. Exports read a snapshot of the buffer,
/// never the live field.
pub struct TextToPdfApp {
    text: String,
    status: String,
}

impl TextToPdfApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        TextToPdfApp {
            text: String::new(),
            status: String::new(),
        }
    }

    fn clear_text(&mut self) {
        self.text.clear();
        self.status = "Text cleared".into();
    }

    /// Runs the whole export synchronously inside the button handler: ask
    /// for a path, lay the snapshot out, write the file, and report the
    /// outcome through the status line and a blocking dialog.
    fn save_as_pdf(&mut self) {
        let snapshot = self.text.trim().to_string();

        if snapshot.is_empty() {
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Warning)
                .set_title("Warning")
                .set_description("Please enter some text before saving!")
                .show();
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF files", &["pdf"])
            .set_file_name("document.pdf")
            .set_title("Save PDF As")
            .save_file()
        else {
            // the user cancelled the dialog; nothing to report
            return;
        };
        let path = ensure_pdf_extension(path);

        match export_text(
            &snapshot,
            &path,
            &PageGeometry::a4(),
            EXPORT_FONT,
            EXPORT_FONT_SIZE,
        ) {
            Ok(summary) => {
                let name = summary
                    .path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| summary.path.display().to_string());
                self.status = format!("PDF saved successfully: {name}");
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Info)
                    .set_title("Success")
                    .set_description("PDF file has been created successfully!")
                    .show();
            }
            Err(err) => {
                log::error!("export to {} failed: {err}", path.display());
                self.status = "Error occurred while saving PDF".into();
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Error)
                    .set_title("Error")
                    .set_description(format!("An error occurred: {err}"))
                    .show();
            }
        }
    }
}

/// The save dialog filters on `.pdf` but does not enforce it; a name typed
/// without an extension gets `.pdf` appended.
fn ensure_pdf_extension(path: PathBuf) -> PathBuf {
    match path.extension() {
        Some(_) => path,
        None => path.with_extension("pdf"),
    }
}

impl eframe::App for TextToPdfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.add_space(2.0);
            ui.weak(self.status.as_str());
            ui.add_space(2.0);
        });

        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Clear Text").clicked() {
                    self.clear_text();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Save as PDF").clicked() {
                        self.save_as_pdf();
                    }
                });
            });
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Text to PDF Converter");
            });
            ui.separator();
            ui.label("Enter your text");
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_sized(
                    ui.available_size(),
                    egui::TextEdit::multiline(&mut self.text)
                        .hint_text("Type or paste the text to export"),
                );
            });
        });
    }
}
