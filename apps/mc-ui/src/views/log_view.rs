use mc_core::Choice;
use mc_form::{SessionLog, format_prediction};

#[derive(Default)]
pub struct LogView;

impl LogView {
    /// Returns the newest-first index of a record the user wants recalled
    /// into the form.
    pub fn show(&mut self, ui: &mut egui::Ui, log: &SessionLog) -> Option<usize> {
        use egui_extras::{Column, TableBuilder};

        ui.heading("Session Predictions");

        if log.is_empty() {
            ui.label("No predictions yet this session");
            ui.separator();
            ui.label("Submit the form to record one");
            return None;
        }

        ui.label(format!("{} prediction(s) this session", log.len()));
        ui.separator();

        let mut recall = None;

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::initial(170.0).at_least(140.0)) // Timestamp
            .column(Column::initial(90.0).at_least(70.0)) // Material grade
            .column(Column::initial(70.0).at_least(60.0)) // Shift
            .column(Column::initial(90.0).at_least(70.0)) // Machine type
            .column(Column::initial(100.0).at_least(80.0)) // Prediction
            .column(Column::exact(70.0)) // Recall button
            .header(22.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Time (UTC)");
                });
                header.col(|ui| {
                    ui.strong("Grade");
                });
                header.col(|ui| {
                    ui.strong("Shift");
                });
                header.col(|ui| {
                    ui.strong("Machine");
                });
                header.col(|ui| {
                    ui.strong("Parts/h");
                });
                header.col(|ui| {
                    ui.strong("");
                });
            })
            .body(|mut body| {
                for (index, record) in log.newest_first().enumerate() {
                    body.row(24.0, |mut row| {
                        row.col(|ui| {
                            ui.monospace(short_timestamp(&record.timestamp));
                        });
                        row.col(|ui| {
                            ui.label(record.input.material_grade.label());
                        });
                        row.col(|ui| {
                            ui.label(record.input.shift.label());
                        });
                        row.col(|ui| {
                            ui.label(record.input.machine_type.label());
                        });
                        row.col(|ui| {
                            ui.monospace(format_prediction(record.predicted));
                        });
                        row.col(|ui| {
                            if ui.button("Recall").clicked() {
                                recall = Some(index);
                            }
                        });
                    });
                }
            });

        recall
    }
}

fn short_timestamp(rfc3339: &str) -> String {
    match rfc3339.get(..19) {
        Some(prefix) => prefix.replace('T', " "),
        None => rfc3339.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_shortened_for_display() {
        assert_eq!(
            short_timestamp("2026-08-06T09:14:03.123456789+00:00"),
            "2026-08-06 09:14:03"
        );
    }

    #[test]
    fn malformed_timestamps_pass_through() {
        assert_eq!(short_timestamp("soon"), "soon");
    }
}
