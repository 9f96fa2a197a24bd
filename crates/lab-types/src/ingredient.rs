//! Ingredient identifiers for the pancake catalog.
//!
//! Ingredients are classified as either base ingredients (batter components
//! such as flour or milk) or custom toppings. The classification is intrinsic
//! to the ingredient; whether an ingredient is actually orderable, and at what
//! price, is decided by the catalog it is looked up in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ingredient that can appear in a pancake recipe.
///
/// Serialized using the catalog's external spelling (`DARK_CHOCOLATE`, ...),
/// which is also the spelling used for price overrides in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ingredient {
	DarkChocolate,
	WhippedCream,
	Hazelnut,
	MilkChocolate,
	Milk,
	Flour,
	Egg,
	SoyMilk,
}

impl Ingredient {
	/// Every known ingredient, in catalog order. Used to seed default menus.
	pub const ALL: [Ingredient; 8] = [
		Ingredient::DarkChocolate,
		Ingredient::WhippedCream,
		Ingredient::Hazelnut,
		Ingredient::MilkChocolate,
		Ingredient::Milk,
		Ingredient::Flour,
		Ingredient::Egg,
		Ingredient::SoyMilk,
	];

	/// Returns true for batter components that may form the base of a recipe.
	///
	/// Toppings (chocolate, cream, hazelnut) are custom-only and can never be
	/// used as a base ingredient.
	pub fn is_base(&self) -> bool {
		matches!(
			self,
			Ingredient::Milk | Ingredient::Flour | Ingredient::Egg | Ingredient::SoyMilk
		)
	}

	/// The catalog spelling of this ingredient.
	pub fn as_str(&self) -> &'static str {
		match self {
			Ingredient::DarkChocolate => "DARK_CHOCOLATE",
			Ingredient::WhippedCream => "WHIPPED_CREAM",
			Ingredient::Hazelnut => "HAZELNUT",
			Ingredient::MilkChocolate => "MILK_CHOCOLATE",
			Ingredient::Milk => "MILK",
			Ingredient::Flour => "FLOUR",
			Ingredient::Egg => "EGG",
			Ingredient::SoyMilk => "SOY_MILK",
		}
	}
}

impl fmt::Display for Ingredient {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
