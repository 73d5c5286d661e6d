use egui::Ui;
use mc_core::{Choice, DayOfWeek, FieldId, MachineType, MaterialGrade, Shift};
use mc_form::{FormFields, RequestState, format_prediction};

/// What the user asked for this frame; the app applies it after drawing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FormActions {
    pub submit: bool,
    pub reset: bool,
}

#[derive(Default)]
pub struct FormView;

impl FormView {
    pub fn show(
        &mut self,
        ui: &mut Ui,
        fields: &mut FormFields,
        request: &RequestState,
    ) -> FormActions {
        let mut actions = FormActions::default();

        ui.heading("Injection Molding Predictor");
        ui.label("Forecast hourly parts output from the current process parameters.");
        ui.add_space(8.0);

        ui.group(|ui| {
            ui.strong("1 · Injection & Material Parameters");
            egui::Grid::new("group_injection")
                .num_columns(2)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    numeric_row(ui, fields, FieldId::InjectionTemperature);
                    numeric_row(ui, fields, FieldId::InjectionPressure);
                    choice_row::<MaterialGrade>(ui, fields, FieldId::MaterialGrade, "Select grade");
                    numeric_row(ui, fields, FieldId::MaterialViscosity);
                    numeric_row(ui, fields, FieldId::TemperaturePressureRatio);
                });
        });

        ui.add_space(6.0);
        ui.group(|ui| {
            ui.strong("2 · Time & Environment");
            egui::Grid::new("group_time")
                .num_columns(2)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    numeric_row(ui, fields, FieldId::CycleTime);
                    numeric_row(ui, fields, FieldId::CoolingTime);
                    numeric_row(ui, fields, FieldId::TotalCycleTime);
                    numeric_row(ui, fields, FieldId::AmbientTemperature);
                    choice_row::<Shift>(ui, fields, FieldId::Shift, "Select shift");
                    choice_row::<DayOfWeek>(ui, fields, FieldId::DayOfWeek, "Select day");
                });
        });

        ui.add_space(6.0);
        ui.group(|ui| {
            ui.strong("3 · Machine & Operator");
            egui::Grid::new("group_machine")
                .num_columns(2)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    numeric_row(ui, fields, FieldId::MachineAge);
                    choice_row::<MachineType>(ui, fields, FieldId::MachineType, "Select type");
                    numeric_row(ui, fields, FieldId::MaintenanceHours);
                    numeric_row(ui, fields, FieldId::MachineUtilization);
                    numeric_row(ui, fields, FieldId::OperatorExperience);
                    numeric_row(ui, fields, FieldId::EfficiencyScore);
                });
        });

        if let Some(message) = request.error() {
            ui.add_space(6.0);
            ui.group(|ui| {
                ui.colored_label(egui::Color32::RED, format!("⚠ {message}"));
            });
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if request.is_loading() {
                ui.add(egui::Spinner::new());
                ui.add_enabled(false, egui::Button::new("Processing…"));
            } else {
                let ready = fields.is_complete();
                if ui
                    .add_enabled(ready, egui::Button::new("Calculate Prediction"))
                    .clicked()
                {
                    actions.submit = true;
                }
                if !ready {
                    ui.label("Fill in every parameter to enable prediction");
                }
            }

            if ui.button("Reset").clicked() {
                actions.reset = true;
            }
        });

        if let Some(value) = request.value() {
            ui.add_space(10.0);
            ui.group(|ui| {
                ui.vertical_centered(|ui| {
                    ui.label("Predicted Hourly Output");
                    ui.label(
                        egui::RichText::new(format_prediction(value))
                            .size(44.0)
                            .strong(),
                    );
                    ui.label("Parts Per Hour");
                });
            });
        }

        actions
    }
}

fn numeric_row(ui: &mut Ui, fields: &mut FormFields, field: FieldId) {
    ui.label(field.label());
    ui.add(egui::TextEdit::singleline(fields.raw_mut(field)).desired_width(160.0));
    ui.end_row();
}

fn choice_row<C: Choice>(ui: &mut Ui, fields: &mut FormFields, field: FieldId, placeholder: &str) {
    ui.label(field.label());

    let selected = C::from_wire(fields.get(field));
    let selected_text = selected.map(C::label).unwrap_or(placeholder);

    egui::ComboBox::from_id_salt(field.as_str())
        .selected_text(selected_text)
        .width(160.0)
        .show_ui(ui, |ui| {
            for option in C::ALL {
                let checked = selected == Some(*option);
                if ui.selectable_label(checked, option.label()).clicked() {
                    fields.set(field, option.as_str());
                }
            }
        });
    ui.end_row();
}
