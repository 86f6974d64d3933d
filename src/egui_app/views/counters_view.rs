use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::sync::CounterMutation;

enum Action {
    Increment(String),
    Decrement(String),
    Reset(String),
    Set(String),
    Delete(String),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Counters");
    ui.add_space(8.0);

    render_form(ui, state);
    ui.horizontal(|ui| {
        ui.label("Step:");
        ui.add(egui::TextEdit::singleline(&mut state.counter_step).desired_width(60.0));
    });
    ui.separator();

    if state.counters.is_loading() && !state.counters.has_loaded() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading counters...");
        });
        return;
    }

    if state.counters.items().is_empty() {
        ui.label("No counters yet.");
        return;
    }

    let mut action = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        let counters = state.counters.items().to_vec();
        for counter in &counters {
            let name = counter.name.clone();
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&counter.name).strong());
                ui.monospace(counter.value.to_string());

                let pending = |kind: CounterMutation| state.counters.is_pending(&kind);
                let incrementing = pending(CounterMutation::Increment(name.clone()));
                let decrementing = pending(CounterMutation::Decrement(name.clone()));
                let resetting = pending(CounterMutation::Reset(name.clone()));
                let setting = pending(CounterMutation::Update(name.clone()));
                let deleting = pending(CounterMutation::Delete(name.clone()));

                if ui.add_enabled(!decrementing, egui::Button::new("-")).clicked() {
                    action = Some(Action::Decrement(name.clone()));
                }
                if ui.add_enabled(!incrementing, egui::Button::new("+")).clicked() {
                    action = Some(Action::Increment(name.clone()));
                }
                if ui.add_enabled(!resetting, egui::Button::new("Reset")).clicked() {
                    action = Some(Action::Reset(name.clone()));
                }

                let typed = state.counter_values.entry(name.clone()).or_default();
                ui.add(egui::TextEdit::singleline(typed).hint_text("value").desired_width(60.0));
                if ui.add_enabled(!setting, egui::Button::new("Set")).clicked() {
                    action = Some(Action::Set(name.clone()));
                }
                if ui.add_enabled(!deleting, egui::Button::new("Delete")).clicked() {
                    action = Some(Action::Delete(name.clone()));
                }
            });
        }
    });

    match action {
        Some(Action::Increment(name)) => state.handle_increment(&name),
        Some(Action::Decrement(name)) => state.handle_decrement(&name),
        Some(Action::Reset(name)) => state.counters.reset(&name),
        Some(Action::Set(name)) => state.handle_set_counter(&name),
        Some(Action::Delete(name)) => state.counters.delete(&name),
        None => {}
    }

    if state.counters.is_loading() {
        ui.spinner();
    }
}

fn render_form(ui: &mut egui::Ui, state: &mut AppState) {
    let creating = state.counters.is_pending(&CounterMutation::Create);

    ui.horizontal(|ui| {
        ui.add(egui::TextEdit::singleline(&mut state.counter_form.name).hint_text("Name"));
        ui.add(
            egui::TextEdit::singleline(&mut state.counter_form.initial_value)
                .hint_text("Initial value")
                .desired_width(80.0),
        );
        if ui.add_enabled(!creating, egui::Button::new("Add")).clicked() {
            state.handle_create_counter();
        }
        if creating {
            ui.spinner();
        }
    });
}
