use std::time::Duration;

use mc_client::DEFAULT_ENDPOINT;
use mc_core::PredictionInput;
use mc_form::{FormFields, RequestState, SessionLog, resolve};

use crate::notices::NoticeBoard;
use crate::predict_worker::{PredictWorker, WorkerMessage};
use crate::views::{FormView, LogView};

pub struct MoldcastApp {
    fields: FormFields,
    request: RequestState,
    session_log: SessionLog,
    worker: Option<PredictWorker>,
    notices: NoticeBoard,
    endpoint: String,
    active_view: ViewTab,
    // Payload of the in-flight request, logged once the forecast lands.
    pending_input: Option<PredictionInput>,
    form_view: FormView,
    log_view: LogView,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewTab {
    Form,
    Log,
}

impl MoldcastApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            fields: FormFields::new(),
            request: RequestState::default(),
            session_log: SessionLog::new(),
            worker: None,
            notices: NoticeBoard::default(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            active_view: ViewTab::Form,
            pending_input: None,
            form_view: FormView::default(),
            log_view: LogView::default(),
        }
    }

    fn poll_worker(&mut self) {
        let mut done = None;

        if let Some(worker) = &self.worker {
            while let Ok(msg) = worker.result_rx.try_recv() {
                match msg {
                    WorkerMessage::Done { result } => {
                        done = Some(result);
                        break;
                    }
                }
            }
        }

        if let Some(result) = done {
            self.worker = None;
            if let (Ok(value), Some(input)) = (&result, self.pending_input.take()) {
                self.session_log.record(input, *value);
            }
            resolve(&mut self.request, &mut self.notices, result);
        }
    }

    fn start_prediction(&mut self) {
        if self.worker.is_some() || !self.fields.is_complete() {
            return;
        }
        if !self.request.begin() {
            return;
        }

        match self.fields.to_input() {
            Ok(input) => {
                self.pending_input = Some(input.clone());
                self.worker = Some(PredictWorker::start(self.endpoint.clone(), input));
            }
            Err(e) => {
                // Unreachable through the form's closed choices, but the
                // lifecycle still resolves cleanly if it ever happens.
                resolve(&mut self.request, &mut self.notices, Err(e.to_string()));
            }
        }
    }

    fn recall_record(&mut self, newest_first_index: usize) {
        if let Some(record) = self.session_log.get(newest_first_index) {
            let input = record.input.clone();
            self.fields.apply_input(&input);
            self.active_view = ViewTab::Form;
        }
    }
}

impl eframe::App for MoldcastApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();

        if self.worker.is_some() {
            // The worker has no way to wake the UI; keep polling.
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.active_view, ViewTab::Form, "Form");
                ui.selectable_value(&mut self.active_view, ViewTab::Log, "Session Log");
            });
            ui.separator();

            match self.active_view {
                ViewTab::Form => {
                    let actions = egui::ScrollArea::vertical()
                        .show(ui, |ui| self.form_view.show(ui, &mut self.fields, &self.request))
                        .inner;
                    if actions.submit {
                        self.start_prediction();
                    }
                    if actions.reset {
                        self.fields.clear();
                    }
                }
                ViewTab::Log => {
                    if let Some(index) = self.log_view.show(ui, &self.session_log) {
                        self.recall_record(index);
                    }
                }
            }

            self.notices.show(ui);
        });
    }
}
