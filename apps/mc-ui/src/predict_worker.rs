use std::sync::mpsc::{Receiver, channel};
use std::thread::{self, JoinHandle};

use mc_client::PredictionClient;
use mc_core::PredictionInput;

/// One background prediction request. The UI thread polls `result_rx`
/// each frame; the worker sends exactly one message and exits.
pub struct PredictWorker {
    pub result_rx: Receiver<WorkerMessage>,
    _handle: JoinHandle<()>,
}

#[derive(Debug, Clone)]
pub enum WorkerMessage {
    Done { result: Result<f64, String> },
}

impl PredictWorker {
    pub fn start(endpoint: String, input: PredictionInput) -> Self {
        let (tx, rx) = channel();

        let handle = thread::spawn(move || {
            let result = Self::run_request(&endpoint, &input);
            let _ = tx.send(WorkerMessage::Done { result });
        });

        Self {
            result_rx: rx,
            _handle: handle,
        }
    }

    fn run_request(endpoint: &str, input: &PredictionInput) -> Result<f64, String> {
        let client = PredictionClient::with_endpoint(endpoint).map_err(|e| e.to_string())?;
        client.predict(input).map_err(|e| e.to_string())
    }
}
