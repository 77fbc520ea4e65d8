use eframe::egui::{self, Color32, RichText};

use super::state::{FileCard, UploadPhase};
use super::UploaderApp;
use crate::upload::{FileIcon, Severity};

const ACCENT: Color32 = Color32::from_rgb(161, 89, 225);
const SUCCESS: Color32 = Color32::from_rgb(0, 180, 0);
const DANGER: Color32 = Color32::from_rgb(220, 50, 50);

impl UploaderApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.heading("Document Uploader");
                    ui.add_space(5.0);
                    ui.label(
                        RichText::new("Upload a document for processing")
                            .color(ui.visuals().text_color().gamma_multiply(0.7)),
                    );
                });
                ui.add_space(15.0);

                self.render_notices(ui);

                match self.phase.clone() {
                    UploadPhase::Tracking {
                        job_id,
                        status_line,
                    } => self.render_job_panel(ui, &job_id, status_line.as_deref()),
                    _ => self.render_form(ui, ctx),
                }

                ui.add_space(20.0);
            });
        });
    }

    fn render_notices(&self, ui: &mut egui::Ui) {
        let notices = &self.controller.surface().notices;
        if notices.is_empty() {
            return;
        }
        for active in notices {
            let (glyph, color) = match active.notice.severity {
                Severity::Info => ("ℹ", ACCENT),
                Severity::Danger => ("⚠", DANGER),
            };
            ui.horizontal(|ui| {
                ui.label(glyph);
                ui.colored_label(color, &active.notice.message);
            });
        }
        ui.add_space(10.0);
    }

    fn render_form(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let hovering_drop = ctx.input(|i| !i.raw.hovered_files.is_empty());
        let busy = self.controller.surface().submit_busy;

        ui.group(|ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(15.0);
                if hovering_drop {
                    ui.colored_label(ACCENT, "Drop the file to select it");
                } else {
                    ui.label("Drag and drop a file here, or browse for one");
                }
                ui.label(
                    RichText::new("PDF, PNG, JPG, JPEG or TIFF, up to 16MB")
                        .small()
                        .color(ui.visuals().text_color().gamma_multiply(0.6)),
                );
                ui.add_space(8.0);
                let browse = egui::Button::new("📁 Browse Files");
                if ui.add_enabled(!busy, browse).clicked() {
                    self.browse_for_file();
                }
                if let Some(card) = self.controller.surface().card.clone() {
                    ui.add_space(8.0);
                    render_file_card(ui, &card);
                }
                ui.add_space(15.0);
            });
        });

        ui.add_space(15.0);

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label("Email:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.email)
                        .desired_width(ui.available_width())
                        .hint_text("you@example.com"),
                );
            });
        });

        ui.add_space(15.0);

        ui.vertical_centered(|ui| {
            if busy {
                ui.add_enabled_ui(false, |ui| {
                    let _ = ui.add(
                        egui::Button::new("⏳ Uploading...").min_size(egui::vec2(220.0, 40.0)),
                    );
                });
                ui.add_space(4.0);
                ui.spinner();
            } else {
                let button = egui::Button::new("📤 Upload & Process Document")
                    .min_size(egui::vec2(220.0, 40.0));
                if ui.add(button).clicked() {
                    self.submit();
                }
            }
        });
    }

    fn render_job_panel(&self, ui: &mut egui::Ui, job_id: &str, status_line: Option<&str>) {
        ui.group(|ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.colored_label(SUCCESS, "✅ Upload complete");
                ui.add_space(8.0);
                if let Some(card) = &self.controller.surface().card {
                    ui.label(format!("{} ({})", card.name, card.size));
                }
                ui.label(format!("Job ID: {}", job_id));
                ui.add_space(8.0);
                if let Some(line) = status_line {
                    ui.label(format!("Status: {}", line));
                } else {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Waiting for the first status update...");
                    });
                }
                ui.add_space(10.0);
            });
        });
    }
}

fn render_file_card(ui: &mut egui::Ui, card: &FileCard) {
    let (glyph, color) = match card.icon {
        FileIcon::Pdf => ("📕", DANGER),
        FileIcon::Image => ("🖼", SUCCESS),
        FileIcon::Generic => ("📄", ACCENT),
    };
    ui.horizontal(|ui| {
        ui.label(glyph);
        ui.colored_label(color, &card.name);
        ui.label(RichText::new(&card.size).color(ui.visuals().text_color().gamma_multiply(0.6)));
    });
}
