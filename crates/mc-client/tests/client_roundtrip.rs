use std::cell::RefCell;

use mc_client::{ClientError, HttpReply, PredictionClient, Transport, TransportError};
use mc_core::{DayOfWeek, FieldId, MachineType, MaterialGrade, PredictionInput, Shift};

/// Test double that records every POST and answers from a script.
struct CannedTransport {
    reply: Result<HttpReply, String>,
    posts: RefCell<Vec<(String, String)>>,
}

impl CannedTransport {
    fn replying(status: u16, status_text: &str, body: &str) -> Self {
        Self {
            reply: Ok(HttpReply {
                status,
                status_text: status_text.to_string(),
                body: body.to_string(),
            }),
            posts: RefCell::new(Vec::new()),
        }
    }

    fn unreachable(detail: &str) -> Self {
        Self {
            reply: Err(detail.to_string()),
            posts: RefCell::new(Vec::new()),
        }
    }

    fn post_count(&self) -> usize {
        self.posts.borrow().len()
    }

    fn last_body(&self) -> String {
        self.posts.borrow().last().map(|(_, b)| b.clone()).unwrap()
    }
}

impl Transport for &CannedTransport {
    fn post_json(&self, url: &str, body: &str) -> Result<HttpReply, TransportError> {
        self.posts
            .borrow_mut()
            .push((url.to_string(), body.to_string()));
        self.reply.clone().map_err(TransportError::new)
    }
}

fn sample_input() -> PredictionInput {
    PredictionInput {
        injection_temperature: 221.3,
        cycle_time: 30.0,
        machine_age: 5.0,
        injection_pressure: 130.0,
        cooling_time: 12.5,
        maintenance_hours: 48.0,
        temperature_pressure_ratio: 1.702,
        total_cycle_time: 42.5,
        operator_experience: 9.0,
        material_viscosity: 350.0,
        ambient_temperature: 24.0,
        machine_utilization: 0.87,
        material_grade: MaterialGrade::GradeA,
        shift: Shift::Day,
        efficiency_score: 0.91,
        machine_type: MachineType::TypeB,
        day_of_week: DayOfWeek::Friday,
    }
}

#[test]
fn successful_prediction_returns_the_forecast() {
    let transport = CannedTransport::replying(200, "OK", r#"{"predicted_parts_per_hour": 142.5}"#);
    let client = PredictionClient::with_transport("http://canned/predict", &transport);

    let value = client.predict(&sample_input()).unwrap();
    assert_eq!(value, 142.5);
    assert_eq!(transport.post_count(), 1);
}

#[test]
fn request_body_carries_every_field_verbatim() {
    let transport = CannedTransport::replying(200, "OK", r#"{"predicted_parts_per_hour": 1.0}"#);
    let client = PredictionClient::with_transport("http://canned/predict", &transport);
    let input = sample_input();

    client.predict(&input).unwrap();

    let body: serde_json::Value = serde_json::from_str(&transport.last_body()).unwrap();
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), FieldId::COUNT);
    assert_eq!(body["Injection_Temperature"], 221.3);
    assert_eq!(body["Temperature_Pressure_Ratio"], 1.702);
    assert_eq!(body["Material_Grade"], "Grade_A");
    assert_eq!(body["Shift"], "Day");
    assert_eq!(body["Machine_Type"], "Type_B");
    assert_eq!(body["Day_of_Week"], "Friday");
}

#[test]
fn http_failure_surfaces_status_and_text() {
    let transport = CannedTransport::replying(500, "Internal Server Error", "model exploded");
    let client = PredictionClient::with_transport("http://canned/predict", &transport);

    let err = client.predict(&sample_input()).unwrap_err();
    match &err {
        ClientError::Api { status, .. } => assert_eq!(*status, 500),
        other => panic!("expected Api error, got {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains("500"));
    assert!(message.contains("Internal Server Error"));
}

#[test]
fn transport_failure_names_the_configured_endpoint() {
    let transport = CannedTransport::unreachable("connection refused");
    let client = PredictionClient::with_transport("http://10.0.0.9:9999/predict", &transport);

    let err = client.predict(&sample_input()).unwrap_err();
    assert!(matches!(err, ClientError::Unreachable { .. }));
    let message = err.to_string();
    assert!(message.contains("http://10.0.0.9:9999/predict"));
    assert!(message.contains("connection refused"));
}

#[test]
fn missing_prediction_field_is_a_malformed_response() {
    let transport = CannedTransport::replying(200, "OK", r#"{"status": "done"}"#);
    let client = PredictionClient::with_transport("http://canned/predict", &transport);

    let err = client.predict(&sample_input()).unwrap_err();
    assert!(matches!(err, ClientError::MalformedResponse(_)));
    assert!(err.to_string().contains("predicted_parts_per_hour"));
}

#[test]
fn unparseable_body_is_a_malformed_response() {
    let transport = CannedTransport::replying(200, "OK", "<html>definitely not json</html>");
    let client = PredictionClient::with_transport("http://canned/predict", &transport);

    let err = client.predict(&sample_input()).unwrap_err();
    assert!(matches!(err, ClientError::MalformedResponse(_)));
}

#[test]
fn identical_inputs_produce_identical_request_bodies() {
    let transport = CannedTransport::replying(200, "OK", r#"{"predicted_parts_per_hour": 99.0}"#);
    let client = PredictionClient::with_transport("http://canned/predict", &transport);
    let input = sample_input();

    client.predict(&input).unwrap();
    let first = transport.last_body();
    client.predict(&input).unwrap();
    let second = transport.last_body();

    assert_eq!(transport.post_count(), 2);
    assert_eq!(first, second);
}

#[test]
fn non_finite_numerics_reach_the_wire_as_null() {
    let transport = CannedTransport::replying(200, "OK", r#"{"predicted_parts_per_hour": 1.0}"#);
    let client = PredictionClient::with_transport("http://canned/predict", &transport);
    let mut input = sample_input();
    input.cooling_time = f64::NAN;

    client.predict(&input).unwrap();

    let body: serde_json::Value = serde_json::from_str(&transport.last_body()).unwrap();
    assert!(body["Cooling_Time"].is_null());
}
