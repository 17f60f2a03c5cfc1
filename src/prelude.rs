//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the gizi crate. Import this
//! module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use gizi::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let kb = KnowledgeBase::from_file("path/to/knowledge_base.json")?;
//! for issue in kb.validate() {
//!     eprintln!("warning: {issue}");
//! }
//!
//! let profile = UserProfile::new(170.0, 62.5).with_preference_fact("vegetarian", true);
//! let result = Recommender::new(&kb).evaluate(&profile)?;
//! println!("{result:?}");
//! # Ok(())
//! # }
//! ```

// Core evaluation
pub use crate::engine::{
    Inference, MacroTargets, Recommendation, RecommendedFood, Recommender, TagSet,
};

// Anthropometric math
pub use crate::anthropometry::{BmiCategory, TARGET_BMI, bmi, ibw};

// Knowledge base structures
pub use crate::kb::{
    BmiRule, FactRule, Food, IntoKnowledgeBase, KnowledgeBase, Nutrients, ValidationIssue,
};
pub use crate::profile::UserProfile;

// Error types
pub use crate::error::{KnowledgeBaseError, ProfileError};

// Hashing collections used throughout the crate's API
pub use ahash::{AHashMap, AHashSet};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
