use clap::Subcommand;
use serde_json::json;

use kaizen_core::exclusions::compute_dietary_exclusions;
use kaizen_core::scheduling::scheduling_hints;
use kaizen_core::unlocks::compute_unlocks;
use kaizen_core::validator::validate_onboarding;
use kaizen_core::workouts::build_workouts;

use crate::util::{exit_error, print_json, read_json_from_file};

#[derive(Subcommand)]
pub enum OnboardingCommands {
    /// Validate an onboarding payload file ("-" for stdin)
    Validate {
        #[arg(long)]
        file: String,
    },
    /// Validate a payload and print unlocks, exclusions, hints, and workouts
    Plan {
        #[arg(long)]
        file: String,
    },
}

pub fn run(command: OnboardingCommands) -> i32 {
    match command {
        OnboardingCommands::Validate { file } => {
            let record = validate_file(&file);
            print_json(&json!({
                "valid": true,
                "daysPerWeek": record.time_frequency.days_per_week,
                "minutesPerSession": record.time_frequency.minutes_per_session
            }));
            0
        }
        OnboardingCommands::Plan { file } => {
            let record = validate_file(&file);
            print_json(&json!({
                "unlockEvaluation": compute_unlocks(&record),
                "dietaryExclusions": compute_dietary_exclusions(&record),
                "schedulingHints": scheduling_hints(&record),
                "workoutPlan": build_workouts(&record)
            }));
            0
        }
    }
}

fn validate_file(path: &str) -> kaizen_core::onboarding::OnboardingRecord {
    let raw = match read_json_from_file(path) {
        Ok(raw) => raw,
        Err(message) => exit_error(&message, None),
    };
    match validate_onboarding(&raw) {
        Ok(record) => record,
        Err(err) => exit_error(
            &err.to_string(),
            Some("userProfile, goals, and timeFrequency are required; age must be 13-100."),
        ),
    }
}
