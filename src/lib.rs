//! # Gizi - Nutrition Inference and Recommendation Engine
//!
//! **Gizi** derives personalized nutrition targets and food recommendations
//! from a user's anthropometric data and a set of boolean health/preference
//! facts, evaluated against a declarative knowledge base of rules.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical in-memory
//! [`kb::KnowledgeBase`] and never parses raw rule formats itself:
//!
//! 1. **Load the knowledge base**: parse your rule format into your own Rust
//!    structs and implement [`kb::IntoKnowledgeBase`], or use the built-in
//!    JSON interchange format via [`kb::KnowledgeBase::from_json`].
//! 2. **Build a profile**: a [`profile::UserProfile`] carries height, weight
//!    and the boolean fact maps.
//! 3. **Evaluate**: an [`engine::Recommender`] borrows the knowledge base and
//!    runs the full pipeline — BMI and ideal body weight, bracket selection,
//!    rule inference, food filtering — producing an
//!    [`engine::Recommendation`].
//!
//! ## Quick Start
//!
//! ```rust
//! use gizi::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let kb = KnowledgeBase::from_json(
//!         r#"{
//!         "bmi_rules": [
//!             { "id": "obese", "bmi_min": 30.0,
//!               "protein_g_per_kg_ibw": 1.5,
//!               "calories_kcal_per_kg_ibw_min": 20.0,
//!               "calories_kcal_per_kg_ibw_max": 25.0 }
//!         ],
//!         "condition_rules": [
//!             { "fact": "diabetes", "expected": true,
//!               "diet_tags_add": ["low_sugar", "low_glycemic"],
//!               "tips": ["Prefer low-glycemic staples over refined carbs"] }
//!         ],
//!         "preference_rules": [],
//!         "foods": [
//!             { "id": "f1", "name": "Steamed tempeh",
//!               "per_100g": { "calories_kcal": 192.0, "protein_g": 20.3,
//!                             "carbs_g": 7.6, "fat_g": 10.8 },
//!               "tags": ["vegetarian"] }
//!         ]
//!     }"#,
//!     )?;
//!
//!     let profile = UserProfile::new(165.0, 90.0).with_health_fact("diabetes", true);
//!
//!     let recommender = Recommender::new(&kb);
//!     let result = recommender.evaluate(&profile)?;
//!
//!     println!("BMI {} ({})", result.bmi, result.bmi_category);
//!     println!("Protein target: {} g/day", result.protein_grams_per_day);
//!     for food in &result.recommended_foods {
//!         println!("  - {}", food.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod anthropometry;
pub mod engine;
pub mod error;
pub mod kb;
pub mod prelude;
pub mod profile;
