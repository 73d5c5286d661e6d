use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use mc_client::PredictionClient;
use mc_core::{FieldId, PredictionInput};
use mc_form::format_prediction;

#[derive(Parser)]
#[command(name = "mc-cli")]
#[command(about = "Moldcast CLI - injection molding output prediction client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request a prediction for a parameter file
    Predict {
        /// Path to the parameter YAML file
        file: PathBuf,
        /// Override the prediction endpoint URL
        #[arg(long)]
        endpoint: Option<String>,
    },
    /// Check a parameter file without sending it
    Validate {
        /// Path to the parameter YAML file
        file: PathBuf,
    },
    /// Write a starter parameter file
    Template {
        /// Output path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Failed to read parameter file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write parameter file: {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse parameter file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error(transparent)]
    Client(#[from] mc_client::ClientError),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Predict { file, endpoint } => cmd_predict(&file, endpoint.as_deref()),
        Commands::Validate { file } => cmd_validate(&file),
        Commands::Template { output } => cmd_template(output.as_deref()),
    }
}

fn cmd_predict(path: &Path, endpoint: Option<&str>) -> CliResult<()> {
    let input = load_params(path)?;
    for warning in check_input(&input) {
        println!("⚠ {warning}");
    }

    let client = match endpoint {
        Some(url) => PredictionClient::with_endpoint(url)?,
        None => PredictionClient::new()?,
    };

    println!("Submitting parameters to {}", client.endpoint());
    let value = client.predict(&input)?;
    println!("✓ Predicted output: {} parts/hour", format_prediction(value));
    Ok(())
}

fn cmd_validate(path: &Path) -> CliResult<()> {
    println!("Validating parameter file: {}", path.display());
    let input = load_params(path)?;

    let warnings = check_input(&input);
    if warnings.is_empty() {
        println!("✓ Parameter file is valid");
    } else {
        println!("Parameter file parses, with {} warning(s):", warnings.len());
        for warning in &warnings {
            println!("  ⚠ {warning}");
        }
    }
    Ok(())
}

fn cmd_template(output: Option<&Path>) -> CliResult<()> {
    match output {
        Some(path) => {
            std::fs::write(path, TEMPLATE).map_err(|source| CliError::FileWrite {
                path: path.to_path_buf(),
                source,
            })?;
            println!("✓ Wrote parameter template to {}", path.display());
        }
        None => print!("{TEMPLATE}"),
    }
    Ok(())
}

fn load_params(path: &Path) -> CliResult<PredictionInput> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_yaml::from_str(&text)?)
}

/// Per-field problems worth telling the user about. Non-finite numerics
/// are forwarded as `null`, so they warn instead of failing.
fn check_input(input: &PredictionInput) -> Vec<String> {
    let mut warnings = Vec::new();
    for field in FieldId::ALL {
        if let Some(value) = input.numeric(field) {
            if !value.is_finite() {
                warnings.push(format!(
                    "{field} is not a finite number; the service will receive null"
                ));
            }
        }
    }
    warnings
}

const TEMPLATE: &str = "\
# Moldcast parameter file. Every field is required.
# Material_Grade: Grade_A | Grade_B | Grade_C
# Shift: Day | Night | Swing
# Machine_Type: Type_A | Type_B | Type_C
# Day_of_Week: Monday .. Sunday
Injection_Temperature: 220.5
Cycle_Time: 30.0
Machine_Age: 5.0
Injection_Pressure: 130.0
Cooling_Time: 12.5
Maintenance_Hours: 48.0
Temperature_Pressure_Ratio: 1.696
Total_Cycle_Time: 42.5
Operator_Experience: 9.0
Material_Viscosity: 350.0
Ambient_Temperature: 24.0
Machine_Utilization: 0.87
Material_Grade: Grade_A
Shift: Day
Efficiency_Score: 0.91
Machine_Type: Type_B
Day_of_Week: Friday
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_into_a_complete_input() {
        let input: PredictionInput = serde_yaml::from_str(TEMPLATE).unwrap();
        assert_eq!(input.injection_temperature, 220.5);
        assert_eq!(input.machine_utilization, 0.87);
        assert!(check_input(&input).is_empty());
    }

    #[test]
    fn non_finite_values_warn_but_do_not_fail() {
        let text = TEMPLATE.replace("Cooling_Time: 12.5", "Cooling_Time: .nan");
        let input: PredictionInput = serde_yaml::from_str(&text).unwrap();

        let warnings = check_input(&input);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Cooling_Time"));
    }

    #[test]
    fn missing_fields_are_a_parse_error() {
        let text = TEMPLATE.replace("Shift: Day\n", "");
        let result: Result<PredictionInput, _> = serde_yaml::from_str(&text);
        assert!(result.is_err());
    }

    #[test]
    fn off_set_choices_are_a_parse_error() {
        let text = TEMPLATE.replace("Material_Grade: Grade_A", "Material_Grade: Grade_Z");
        let result: Result<PredictionInput, _> = serde_yaml::from_str(&text);
        assert!(result.is_err());
    }
}
