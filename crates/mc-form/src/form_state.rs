//! Raw form state: seventeen verbatim strings, one per field.
//!
//! Values stay exactly as typed or selected until submission. A partial
//! entry like "12." is preserved, not rejected; conversion happens once,
//! in [`FormFields::to_input`].

use mc_core::{
    Choice, CoreError, CoreResult, DayOfWeek, FieldId, MachineType, MaterialGrade, PredictionInput,
    Shift, lenient_number,
};

#[derive(Debug, Clone, PartialEq)]
pub struct FormFields {
    values: [String; FieldId::COUNT],
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            values: std::array::from_fn(|_| String::new()),
        }
    }
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verbatim stored text for a field.
    pub fn get(&self, field: FieldId) -> &str {
        &self.values[field.index()]
    }

    /// Store verbatim text for a field. No trimming, no coercion, no
    /// validation; other fields and the request lifecycle are untouched.
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Direct mutable access to a field's slot, for UI text bindings.
    pub fn raw_mut(&mut self, field: FieldId) -> &mut String {
        &mut self.values[field.index()]
    }

    /// The required-field gate: true once every field holds something.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|v| !v.is_empty())
    }

    pub fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
    }

    /// Convert the stored text into a wire payload.
    ///
    /// Numeric fields go through the lenient parse (invalid text becomes
    /// NaN and is forwarded as-is); categorical fields must match their
    /// closed set. Empty fields are rejected as a second line of defense
    /// behind [`FormFields::is_complete`].
    pub fn to_input(&self) -> CoreResult<PredictionInput> {
        for field in FieldId::ALL {
            if self.get(field).is_empty() {
                return Err(CoreError::MissingValue(field));
            }
        }

        Ok(PredictionInput {
            injection_temperature: self.number(FieldId::InjectionTemperature),
            cycle_time: self.number(FieldId::CycleTime),
            machine_age: self.number(FieldId::MachineAge),
            injection_pressure: self.number(FieldId::InjectionPressure),
            cooling_time: self.number(FieldId::CoolingTime),
            maintenance_hours: self.number(FieldId::MaintenanceHours),
            temperature_pressure_ratio: self.number(FieldId::TemperaturePressureRatio),
            total_cycle_time: self.number(FieldId::TotalCycleTime),
            operator_experience: self.number(FieldId::OperatorExperience),
            material_viscosity: self.number(FieldId::MaterialViscosity),
            ambient_temperature: self.number(FieldId::AmbientTemperature),
            machine_utilization: self.number(FieldId::MachineUtilization),
            material_grade: self.choice::<MaterialGrade>(FieldId::MaterialGrade)?,
            shift: self.choice::<Shift>(FieldId::Shift)?,
            efficiency_score: self.number(FieldId::EfficiencyScore),
            machine_type: self.choice::<MachineType>(FieldId::MachineType)?,
            day_of_week: self.choice::<DayOfWeek>(FieldId::DayOfWeek)?,
        })
    }

    /// Fill every field from a typed payload, e.g. when recalling a
    /// session-log entry back into the form.
    pub fn apply_input(&mut self, input: &PredictionInput) {
        for field in FieldId::ALL {
            if let Some(value) = input.numeric(field) {
                self.set(field, value.to_string());
            } else if let Some(wire) = input.choice_wire(field) {
                self.set(field, wire);
            }
        }
    }

    fn number(&self, field: FieldId) -> f64 {
        lenient_number(self.get(field))
    }

    fn choice<C: Choice>(&self, field: FieldId) -> CoreResult<C> {
        let raw = self.get(field);
        C::from_wire(raw).ok_or_else(|| CoreError::UnknownChoice {
            field,
            value: raw.to_string(),
        })
    }
}
