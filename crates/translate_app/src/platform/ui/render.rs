use eframe::egui::{self, Color32, RichText};
use translate_core::{AppViewModel, Direction, Status};

use super::constants::*;

pub fn status_label(status: Status) -> &'static str {
    match status {
        Status::Idle => "準備完了",
        Status::Running => "翻訳中...",
        Status::Done => "翻訳完了",
        Status::Error => "エラー",
    }
}

/// Headers for the (input, output) panes.
pub fn pane_headers(direction: Direction) -> (&'static str, &'static str) {
    match direction {
        Direction::JaToEn => ("日本語", "English"),
        Direction::EnToJa => ("English", "日本語"),
    }
}

fn status_color(status: Status) -> Color32 {
    match status {
        Status::Idle => Color32::GRAY,
        Status::Running => Color32::LIGHT_BLUE,
        Status::Done => Color32::LIGHT_GREEN,
        Status::Error => Color32::LIGHT_RED,
    }
}

/// What the user did in this frame.
#[derive(Debug, Default)]
pub struct FrameInput {
    pub input_changed: bool,
    pub swap_clicked: bool,
}

pub fn render(ctx: &egui::Context, view: &AppViewModel, input: &mut String) -> FrameInput {
    let mut frame_input = FrameInput::default();
    let (source, target) = pane_headers(view.direction);

    egui::TopBottomPanel::top(PANEL_HEADERS).show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(source).strong().size(HEADER_SIZE));
            if ui
                .button("↔")
                .on_hover_text("言語を切り替え")
                .clicked()
            {
                frame_input.swap_clicked = true;
            }
            ui.label(RichText::new(target).strong().size(HEADER_SIZE));
        });
    });

    egui::TopBottomPanel::bottom(PANEL_STATUS).show(ctx, |ui| {
        ui.horizontal(|ui| {
            if view.status == Status::Running {
                ui.add(egui::Spinner::new());
            }
            ui.label(RichText::new(status_label(view.status)).color(status_color(view.status)));
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.columns(2, |columns| {
            egui::ScrollArea::vertical()
                .id_source(SCROLL_INPUT)
                .show(&mut columns[0], |ui| {
                    let response = ui.add(
                        egui::TextEdit::multiline(input)
                            .font(egui::FontId::proportional(BODY_SIZE))
                            .desired_rows(PANE_ROWS)
                            .desired_width(f32::INFINITY),
                    );
                    frame_input.input_changed = response.changed();
                });

            egui::ScrollArea::vertical()
                .id_source(SCROLL_OUTPUT)
                .show(&mut columns[1], |ui| {
                    let mut output: &str = &view.output;
                    ui.add(
                        egui::TextEdit::multiline(&mut output)
                            .font(egui::FontId::proportional(BODY_SIZE))
                            .desired_rows(PANE_ROWS)
                            .desired_width(f32::INFINITY),
                    );
                });
        });
    });

    frame_input
}
