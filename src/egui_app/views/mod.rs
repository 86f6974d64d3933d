use eframe::egui;

use crate::egui_app::state::{AppState, Tab};

pub mod todos_view;
pub mod counters_view;

const TOP_BAR_BG: egui::Color32 = egui::Color32::from_rgb(0x2B, 0x2F, 0x36);
const TEXT_LIGHT: egui::Color32 = egui::Color32::from_rgb(0xEE, 0xEE, 0xEE);
const NOTICE_BG: egui::Color32 = egui::Color32::from_rgb(0x5A, 0x1E, 0x1E);

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(TEXT_LIGHT, egui::RichText::new("Todo & Counter").size(18.0).strong());
                ui.add_space(16.0);
                ui.selectable_value(&mut state.current_tab, Tab::Todos, "Todos");
                ui.selectable_value(&mut state.current_tab, Tab::Counters, "Counters");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(TEXT_LIGHT, state.config.server_url());
                });
            });
        });
}

/// Notices of both apps, newest last, each with a dismiss button
pub fn render_notices(ctx: &egui::Context, state: &mut AppState) {
    if !state.has_notices() {
        return;
    }

    let frame_style = egui::Frame::default()
        .fill(NOTICE_BG)
        .inner_margin(egui::Margin::symmetric(12, 6));

    egui::TopBottomPanel::bottom("notice_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            let mut dismiss_todo = None;
            for (index, notice) in state.todos.notices().iter().enumerate() {
                ui.horizontal(|ui| {
                    if ui.small_button("✕").clicked() {
                        dismiss_todo = Some(index);
                    }
                    ui.colored_label(TEXT_LIGHT, format!("Todos: {}", notice.message));
                });
            }
            if let Some(index) = dismiss_todo {
                state.todos.dismiss(index);
            }

            let mut dismiss_counter = None;
            for (index, notice) in state.counters.notices().iter().enumerate() {
                ui.horizontal(|ui| {
                    if ui.small_button("✕").clicked() {
                        dismiss_counter = Some(index);
                    }
                    ui.colored_label(TEXT_LIGHT, format!("Counters: {}", notice.message));
                });
            }
            if let Some(index) = dismiss_counter {
                state.counters.dismiss(index);
            }
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default().show(ctx, |ui| match state.current_tab {
        Tab::Todos => todos_view::render(ui, state),
        Tab::Counters => counters_view::render(ui, state),
    });
}
