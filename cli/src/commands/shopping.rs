use clap::Args;

use kaizen_core::shopping::{Meal, build_shopping_list};

use crate::util::{exit_error, print_json, read_json_from_file};

#[derive(Args)]
pub struct ShoppingArgs {
    /// Meal plan JSON file: an array of { name, ingredients: [{ item, qty }] }
    #[arg(long)]
    pub file: String,

    /// Pantry item to exclude (repeatable)
    #[arg(long = "pantry")]
    pub pantry: Vec<String>,

    /// Retailer tag attached to every line
    #[arg(long)]
    pub retailer: Option<String>,

    /// Apply the static ingredient substitution table
    #[arg(long)]
    pub allow_substitutions: bool,
}

pub fn run(args: ShoppingArgs) -> i32 {
    let raw = match read_json_from_file(&args.file) {
        Ok(raw) => raw,
        Err(message) => exit_error(&message, None),
    };
    let meals: Vec<Meal> = match serde_json::from_value(raw) {
        Ok(meals) => meals,
        Err(err) => exit_error(
            &format!("Meal plan file is not a meal array: {err}"),
            Some("Expected [{ \"name\": ..., \"ingredients\": [{ \"item\": ..., \"qty\": ... }] }]"),
        ),
    };

    let lines = build_shopping_list(
        &meals,
        &args.pantry,
        args.retailer.as_deref(),
        args.allow_substitutions,
    );
    print_json(&lines);
    0
}
