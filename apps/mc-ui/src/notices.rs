use std::time::{Duration, Instant};

use mc_form::Notifier;

const NOTICE_TTL: Duration = Duration::from_secs(4);

struct Notice {
    created: Instant,
    title: String,
    detail: String,
    failed: bool,
}

/// Transient notice surface fed by the submission pipeline's `Notifier`
/// capability. Notices expire after a few seconds.
#[derive(Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn show(&mut self, ui: &mut egui::Ui) {
        self.notices.retain(|n| n.created.elapsed() < NOTICE_TTL);
        if self.notices.is_empty() {
            return;
        }

        ui.separator();
        for notice in &self.notices {
            ui.group(|ui| {
                let color = if notice.failed {
                    egui::Color32::RED
                } else {
                    egui::Color32::from_rgb(0, 160, 60)
                };
                ui.colored_label(color, &notice.title);
                ui.label(&notice.detail);
            });
        }

        // Notices expire without any input event, so keep repainting
        // while one is visible.
        ui.ctx().request_repaint_after(Duration::from_millis(250));
    }

    fn push(&mut self, title: &str, detail: &str, failed: bool) {
        self.notices.push(Notice {
            created: Instant::now(),
            title: title.to_string(),
            detail: detail.to_string(),
            failed,
        });
    }
}

impl Notifier for NoticeBoard {
    fn success(&mut self, title: &str, detail: &str) {
        self.push(title, detail, false);
    }

    fn failure(&mut self, title: &str, detail: &str) {
        self.push(title, detail, true);
    }
}
