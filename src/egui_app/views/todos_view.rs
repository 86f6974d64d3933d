use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::sync::TodoMutation;

enum Action {
    Toggle(i64),
    Edit(i64),
    Delete(i64),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Todos");
    ui.add_space(8.0);

    render_form(ui, state);
    ui.separator();

    if state.todos.is_loading() && !state.todos.has_loaded() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading todos...");
        });
        return;
    }

    if state.todos.items().is_empty() {
        ui.label("Nothing to do.");
        return;
    }

    let mut action = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        for todo in state.todos.items() {
            let editing = state.todo_edit.as_ref().is_some_and(|edit| edit.id == todo.id);
            if editing {
                continue;
            }

            ui.horizontal(|ui| {
                let toggling = state.todos.is_pending(&TodoMutation::Toggle(todo.id));
                let mut done = todo.completed;
                if ui.add_enabled(!toggling, egui::Checkbox::without_text(&mut done)).changed() {
                    action = Some(Action::Toggle(todo.id));
                }

                let mut title = egui::RichText::new(&todo.title).strong();
                if todo.completed {
                    title = title.strikethrough();
                }
                ui.label(title);
                if !todo.description.is_empty() {
                    ui.weak(&todo.description);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let deleting = state.todos.is_pending(&TodoMutation::Delete(todo.id));
                    if ui.add_enabled(!deleting, egui::Button::new("Delete")).clicked() {
                        action = Some(Action::Delete(todo.id));
                    }
                    let updating = state.todos.is_pending(&TodoMutation::Update(todo.id));
                    if ui.add_enabled(!updating, egui::Button::new("Edit")).clicked() {
                        action = Some(Action::Edit(todo.id));
                    }
                });
            });
        }

        render_edit(ui, state);
    });

    match action {
        Some(Action::Toggle(id)) => state.todos.toggle(id),
        Some(Action::Edit(id)) => state.start_edit(id),
        Some(Action::Delete(id)) => state.todos.delete(id),
        None => {}
    }

    if state.todos.is_loading() {
        ui.spinner();
    }
}

fn render_form(ui: &mut egui::Ui, state: &mut AppState) {
    let creating = state.todos.is_pending(&TodoMutation::Create);

    ui.horizontal(|ui| {
        ui.add(egui::TextEdit::singleline(&mut state.todo_form.title).hint_text("Title"));
        ui.add(egui::TextEdit::singleline(&mut state.todo_form.description).hint_text("Description"));
        if ui.add_enabled(!creating, egui::Button::new("Add")).clicked() {
            state.handle_create_todo();
        }
        if creating {
            ui.spinner();
        }
    });
}

fn render_edit(ui: &mut egui::Ui, state: &mut AppState) {
    let mut save = false;
    let mut cancel = false;

    if let Some(edit) = state.todo_edit.as_mut() {
        ui.separator();
        ui.horizontal(|ui| {
            ui.label(format!("Editing #{}", edit.id));
            ui.text_edit_singleline(&mut edit.title);
            ui.text_edit_singleline(&mut edit.description);
            save = ui.button("Save").clicked();
            cancel = ui.button("Cancel").clicked();
        });
    }

    if save {
        state.handle_save_edit();
    } else if cancel {
        state.todo_edit = None;
    }
}
