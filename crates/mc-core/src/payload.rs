//! The JSON document sent to the prediction service.

use serde::{Deserialize, Serialize};

use crate::fields::{DayOfWeek, FieldId, MachineType, MaterialGrade, Shift};

/// One complete set of process parameters, typed for the wire.
///
/// Field order matches the payload the original frontend builds, so the
/// serialized document is key-for-key identical. Non-finite numerics
/// serialize as `null`; the service side owns what to do with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    #[serde(rename = "Injection_Temperature")]
    pub injection_temperature: f64,
    #[serde(rename = "Cycle_Time")]
    pub cycle_time: f64,
    #[serde(rename = "Machine_Age")]
    pub machine_age: f64,
    #[serde(rename = "Injection_Pressure")]
    pub injection_pressure: f64,
    #[serde(rename = "Cooling_Time")]
    pub cooling_time: f64,
    #[serde(rename = "Maintenance_Hours")]
    pub maintenance_hours: f64,
    #[serde(rename = "Temperature_Pressure_Ratio")]
    pub temperature_pressure_ratio: f64,
    #[serde(rename = "Total_Cycle_Time")]
    pub total_cycle_time: f64,
    #[serde(rename = "Operator_Experience")]
    pub operator_experience: f64,
    #[serde(rename = "Material_Viscosity")]
    pub material_viscosity: f64,
    #[serde(rename = "Ambient_Temperature")]
    pub ambient_temperature: f64,
    #[serde(rename = "Machine_Utilization")]
    pub machine_utilization: f64,
    #[serde(rename = "Material_Grade")]
    pub material_grade: MaterialGrade,
    #[serde(rename = "Shift")]
    pub shift: Shift,
    #[serde(rename = "Efficiency_Score")]
    pub efficiency_score: f64,
    #[serde(rename = "Machine_Type")]
    pub machine_type: MachineType,
    #[serde(rename = "Day_of_Week")]
    pub day_of_week: DayOfWeek,
}

impl PredictionInput {
    /// Numeric value for a numeric field, `None` for categorical fields.
    pub fn numeric(&self, field: FieldId) -> Option<f64> {
        match field {
            FieldId::InjectionTemperature => Some(self.injection_temperature),
            FieldId::InjectionPressure => Some(self.injection_pressure),
            FieldId::MaterialViscosity => Some(self.material_viscosity),
            FieldId::TemperaturePressureRatio => Some(self.temperature_pressure_ratio),
            FieldId::CycleTime => Some(self.cycle_time),
            FieldId::CoolingTime => Some(self.cooling_time),
            FieldId::TotalCycleTime => Some(self.total_cycle_time),
            FieldId::AmbientTemperature => Some(self.ambient_temperature),
            FieldId::MachineAge => Some(self.machine_age),
            FieldId::MaintenanceHours => Some(self.maintenance_hours),
            FieldId::MachineUtilization => Some(self.machine_utilization),
            FieldId::OperatorExperience => Some(self.operator_experience),
            FieldId::EfficiencyScore => Some(self.efficiency_score),
            FieldId::MaterialGrade
            | FieldId::Shift
            | FieldId::MachineType
            | FieldId::DayOfWeek => None,
        }
    }

    /// Wire spelling of a categorical field, `None` for numeric fields.
    pub fn choice_wire(&self, field: FieldId) -> Option<&'static str> {
        use crate::fields::Choice;
        match field {
            FieldId::MaterialGrade => Some(self.material_grade.as_str()),
            FieldId::Shift => Some(self.shift.as_str()),
            FieldId::MachineType => Some(self.machine_type.as_str()),
            FieldId::DayOfWeek => Some(self.day_of_week.as_str()),
            _ => None,
        }
    }
}
