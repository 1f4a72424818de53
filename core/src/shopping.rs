//! Shopping list aggregation across a generated meal plan.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub item: String,
    /// Opaque display quantity ("2 cups", "500 g"). Never parsed or summed.
    pub qty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingLine {
    pub item: String,
    /// Quantities from multiple meals are joined with `" + "`.
    pub quantity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_retailer: Option<String>,
    /// Set to the replacement item when a substitution was applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitution: Option<String>,
}

/// Static ingredient substitutions, keyed by lowercased item name.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("basmati", "jasmine rice"),
    ("greek_yogurt", "plain yogurt"),
];

fn substitute(key: &str) -> Option<&'static str> {
    SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| *to)
}

/// Aggregate one shopping line per distinct (possibly substituted) ingredient.
///
/// Pantry-owned items are skipped; matching is case-insensitive throughout.
/// Lines appear in first-seen order and carry the caller's retailer on every
/// entry.
pub fn build_shopping_list(
    meals: &[Meal],
    pantry: &[String],
    retailer: Option<&str>,
    allow_substitutions: bool,
) -> Vec<ShoppingLine> {
    let pantry: HashSet<String> = pantry.iter().map(|item| item.to_lowercase()).collect();
    let mut lines: Vec<ShoppingLine> = Vec::new();

    for meal in meals {
        for ingredient in &meal.ingredients {
            let key = ingredient.item.to_lowercase();
            if pantry.contains(&key) {
                continue;
            }

            let substitution = if allow_substitutions {
                substitute(&key)
            } else {
                None
            };
            let item = substitution.unwrap_or(&ingredient.item);

            match lines
                .iter_mut()
                .find(|line| line.item.eq_ignore_ascii_case(item))
            {
                Some(line) => {
                    line.quantity = format!("{} + {}", line.quantity, ingredient.qty);
                }
                None => lines.push(ShoppingLine {
                    item: item.to_string(),
                    quantity: ingredient.qty.clone(),
                    preferred_retailer: retailer.map(str::to_string),
                    substitution: substitution.map(str::to_string),
                }),
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::{Ingredient, Meal, build_shopping_list};

    fn meal(name: &str, ingredients: &[(&str, &str)]) -> Meal {
        Meal {
            name: name.to_string(),
            ingredients: ingredients
                .iter()
                .map(|(item, qty)| Ingredient {
                    item: item.to_string(),
                    qty: qty.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn pantry_items_are_skipped_case_insensitively() {
        let meals = [meal("pilaf", &[("Basmati Rice", "2 cups"), ("onion", "1")])];
        let pantry = vec!["basmati rice".to_string()];
        let lines = build_shopping_list(&meals, &pantry, None, false);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].item, "onion");
    }

    #[test]
    fn substitution_replaces_item_and_records_the_replacement() {
        let meals = [meal("bowl", &[("basmati", "1 cup")])];
        let lines = build_shopping_list(&meals, &[], Some("trader_joes"), true);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].item, "jasmine rice");
        assert_eq!(lines[0].substitution.as_deref(), Some("jasmine rice"));
        assert_eq!(lines[0].preferred_retailer.as_deref(), Some("trader_joes"));
    }

    #[test]
    fn substitutions_are_ignored_when_not_allowed() {
        let meals = [meal("bowl", &[("basmati", "1 cup")])];
        let lines = build_shopping_list(&meals, &[], None, false);
        assert_eq!(lines[0].item, "basmati");
        assert!(lines[0].substitution.is_none());
    }

    #[test]
    fn repeated_items_merge_with_concatenated_quantities() {
        let meals = [
            meal("breakfast", &[("greek_yogurt", "150 g")]),
            meal("snack", &[("Greek_Yogurt", "100 g")]),
        ];
        let lines = build_shopping_list(&meals, &[], Some("kroger"), true);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].item, "plain yogurt");
        assert_eq!(lines[0].quantity, "150 g + 100 g");
        assert_eq!(lines[0].substitution.as_deref(), Some("plain yogurt"));
    }

    #[test]
    fn lines_keep_first_seen_order() {
        let meals = [
            meal("a", &[("eggs", "6"), ("spinach", "200 g")]),
            meal("b", &[("eggs", "2"), ("feta", "100 g")]),
        ];
        let lines = build_shopping_list(&meals, &[], None, false);
        let items: Vec<&str> = lines.iter().map(|l| l.item.as_str()).collect();
        assert_eq!(items, vec!["eggs", "spinach", "feta"]);
        assert_eq!(lines[0].quantity, "6 + 2");
    }
}
