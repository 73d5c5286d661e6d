//! Session-local record of completed predictions.
//!
//! Lives in memory and dies with the frontend instance; nothing here
//! touches disk.

use mc_core::PredictionInput;

#[derive(Debug, Clone)]
pub struct PredictionRecord {
    /// RFC 3339 UTC timestamp of when the forecast arrived.
    pub timestamp: String,
    pub input: PredictionInput,
    pub predicted: f64,
}

#[derive(Debug, Default)]
pub struct SessionLog {
    records: Vec<PredictionRecord>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, input: PredictionInput, predicted: f64) {
        self.records.push(PredictionRecord {
            timestamp: chrono::Utc::now().to_rfc3339(),
            input,
            predicted,
        });
    }

    /// Records, most recent first.
    pub fn newest_first(&self) -> impl Iterator<Item = &PredictionRecord> {
        self.records.iter().rev()
    }

    pub fn get(&self, newest_first_index: usize) -> Option<&PredictionRecord> {
        let len = self.records.len();
        if newest_first_index >= len {
            return None;
        }
        self.records.get(len - 1 - newest_first_index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_core::{DayOfWeek, MachineType, MaterialGrade, Shift};

    fn input(temp: f64) -> PredictionInput {
        PredictionInput {
            injection_temperature: temp,
            cycle_time: 30.0,
            machine_age: 5.0,
            injection_pressure: 130.0,
            cooling_time: 12.0,
            maintenance_hours: 48.0,
            temperature_pressure_ratio: 1.7,
            total_cycle_time: 42.0,
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
    fn records_accumulate_newest_first() {
        let mut log = SessionLog::new();
        assert!(log.is_empty());

        log.record(input(200.0), 100.0);
        log.record(input(210.0), 110.0);
        log.record(input(220.0), 120.0);

        assert_eq!(log.len(), 3);
        let predicted: Vec<f64> = log.newest_first().map(|r| r.predicted).collect();
        assert_eq!(predicted, vec![120.0, 110.0, 100.0]);
    }

    #[test]
    fn indexed_access_follows_newest_first_order() {
        let mut log = SessionLog::new();
        log.record(input(200.0), 100.0);
        log.record(input(210.0), 110.0);

        assert_eq!(log.get(0).unwrap().predicted, 110.0);
        assert_eq!(log.get(1).unwrap().predicted, 100.0);
        assert!(log.get(2).is_none());
    }

    #[test]
    fn records_carry_a_timestamp() {
        let mut log = SessionLog::new();
        log.record(input(200.0), 100.0);
        let record = log.get(0).unwrap();
        assert!(!record.timestamp.is_empty());
        assert!(record.timestamp.contains('T'));
    }
}
