//! The seventeen process parameters collected by the prediction form.
//!
//! Thirteen are free numeric inputs; four are closed categorical choices.
//! Wire names (`as_str`) are the exact JSON keys the prediction service
//! expects; labels are what frontends show next to each input.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    InjectionTemperature,
    InjectionPressure,
    MaterialGrade,
    MaterialViscosity,
    TemperaturePressureRatio,
    CycleTime,
    CoolingTime,
    TotalCycleTime,
    AmbientTemperature,
    Shift,
    DayOfWeek,
    MachineAge,
    MachineType,
    MaintenanceHours,
    MachineUtilization,
    OperatorExperience,
    EfficiencyScore,
}

impl FieldId {
    pub const COUNT: usize = 17;

    pub const ALL: [FieldId; Self::COUNT] = [
        FieldId::InjectionTemperature,
        FieldId::InjectionPressure,
        FieldId::MaterialGrade,
        FieldId::MaterialViscosity,
        FieldId::TemperaturePressureRatio,
        FieldId::CycleTime,
        FieldId::CoolingTime,
        FieldId::TotalCycleTime,
        FieldId::AmbientTemperature,
        FieldId::Shift,
        FieldId::DayOfWeek,
        FieldId::MachineAge,
        FieldId::MachineType,
        FieldId::MaintenanceHours,
        FieldId::MachineUtilization,
        FieldId::OperatorExperience,
        FieldId::EfficiencyScore,
    ];

    /// JSON key used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::InjectionTemperature => "Injection_Temperature",
            FieldId::InjectionPressure => "Injection_Pressure",
            FieldId::MaterialGrade => "Material_Grade",
            FieldId::MaterialViscosity => "Material_Viscosity",
            FieldId::TemperaturePressureRatio => "Temperature_Pressure_Ratio",
            FieldId::CycleTime => "Cycle_Time",
            FieldId::CoolingTime => "Cooling_Time",
            FieldId::TotalCycleTime => "Total_Cycle_Time",
            FieldId::AmbientTemperature => "Ambient_Temperature",
            FieldId::Shift => "Shift",
            FieldId::DayOfWeek => "Day_of_Week",
            FieldId::MachineAge => "Machine_Age",
            FieldId::MachineType => "Machine_Type",
            FieldId::MaintenanceHours => "Maintenance_Hours",
            FieldId::MachineUtilization => "Machine_Utilization",
            FieldId::OperatorExperience => "Operator_Experience",
            FieldId::EfficiencyScore => "Efficiency_Score",
        }
    }

    /// Human-facing label, units included where the parameter has them.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::InjectionTemperature => "Injection Temperature (°C)",
            FieldId::InjectionPressure => "Injection Pressure (bar)",
            FieldId::MaterialGrade => "Material Grade",
            FieldId::MaterialViscosity => "Material Viscosity",
            FieldId::TemperaturePressureRatio => "Temperature/Pressure Ratio",
            FieldId::CycleTime => "Cycle Time (s)",
            FieldId::CoolingTime => "Cooling Time (s)",
            FieldId::TotalCycleTime => "Total Cycle Time (s)",
            FieldId::AmbientTemperature => "Ambient Temperature (°C)",
            FieldId::Shift => "Shift",
            FieldId::DayOfWeek => "Day of Week",
            FieldId::MachineAge => "Machine Age (years)",
            FieldId::MachineType => "Machine Type",
            FieldId::MaintenanceHours => "Maintenance Hours",
            FieldId::MachineUtilization => "Machine Utilization (%)",
            FieldId::OperatorExperience => "Operator Experience (years)",
            FieldId::EfficiencyScore => "Efficiency Score",
        }
    }

    pub fn is_categorical(self) -> bool {
        matches!(
            self,
            FieldId::MaterialGrade | FieldId::Shift | FieldId::MachineType | FieldId::DayOfWeek
        )
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A closed categorical value set.
///
/// `as_str` is the wire spelling, `label` the display spelling; `from_wire`
/// resolves raw text against the set and rejects anything outside it.
pub trait Choice: Copy + PartialEq + Sized + 'static {
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn label(self) -> &'static str;

    fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialGrade {
    #[serde(rename = "Grade_A")]
    GradeA,
    #[serde(rename = "Grade_B")]
    GradeB,
    #[serde(rename = "Grade_C")]
    GradeC,
}

impl Choice for MaterialGrade {
    const ALL: &'static [Self] = &[Self::GradeA, Self::GradeB, Self::GradeC];

    fn as_str(self) -> &'static str {
        match self {
            Self::GradeA => "Grade_A",
            Self::GradeB => "Grade_B",
            Self::GradeC => "Grade_C",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::GradeA => "Grade A",
            Self::GradeB => "Grade B",
            Self::GradeC => "Grade C",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shift {
    Day,
    Night,
    Swing,
}

impl Choice for Shift {
    const ALL: &'static [Self] = &[Self::Day, Self::Night, Self::Swing];

    fn as_str(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Night => "Night",
            Self::Swing => "Swing",
        }
    }

    fn label(self) -> &'static str {
        self.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineType {
    #[serde(rename = "Type_A")]
    TypeA,
    #[serde(rename = "Type_B")]
    TypeB,
    #[serde(rename = "Type_C")]
    TypeC,
}

impl Choice for MachineType {
    const ALL: &'static [Self] = &[Self::TypeA, Self::TypeB, Self::TypeC];

    fn as_str(self) -> &'static str {
        match self {
            Self::TypeA => "Type_A",
            Self::TypeB => "Type_B",
            Self::TypeC => "Type_C",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::TypeA => "Type A",
            Self::TypeB => "Type B",
            Self::TypeC => "Type C",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Choice for DayOfWeek {
    const ALL: &'static [Self] = &[
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    fn label(self) -> &'static str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_ids_are_distinct_and_complete() {
        assert_eq!(FieldId::ALL.len(), FieldId::COUNT);
        for (i, field) in FieldId::ALL.iter().enumerate() {
            assert_eq!(field.index(), i, "ALL must follow declaration order");
            for other in &FieldId::ALL[i + 1..] {
                assert_ne!(field.as_str(), other.as_str());
            }
        }
    }

    #[test]
    fn categorical_split() {
        let categorical = FieldId::ALL.iter().filter(|f| f.is_categorical()).count();
        assert_eq!(categorical, 4);
        assert_eq!(FieldId::COUNT - categorical, 13);
    }

    #[test]
    fn wire_names_match_service_schema() {
        assert_eq!(FieldId::InjectionTemperature.as_str(), "Injection_Temperature");
        assert_eq!(FieldId::TemperaturePressureRatio.as_str(), "Temperature_Pressure_Ratio");
        assert_eq!(FieldId::DayOfWeek.as_str(), "Day_of_Week");
    }

    #[test]
    fn choices_roundtrip_through_wire_names() {
        for grade in MaterialGrade::ALL {
            assert_eq!(MaterialGrade::from_wire(grade.as_str()), Some(*grade));
        }
        for shift in Shift::ALL {
            assert_eq!(Shift::from_wire(shift.as_str()), Some(*shift));
        }
        for machine in MachineType::ALL {
            assert_eq!(MachineType::from_wire(machine.as_str()), Some(*machine));
        }
        for day in DayOfWeek::ALL {
            assert_eq!(DayOfWeek::from_wire(day.as_str()), Some(*day));
        }
    }

    #[test]
    fn off_set_values_are_rejected() {
        assert_eq!(MaterialGrade::from_wire("Grade A"), None);
        assert_eq!(Shift::from_wire("day"), None);
        assert_eq!(DayOfWeek::from_wire(""), None);
    }
}
