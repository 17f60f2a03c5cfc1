use super::KnowledgeBase;
use crate::error::KnowledgeBaseError;

/// A trait for custom data models that can be converted into a [`KnowledgeBase`].
///
/// The engine does not parse raw rule formats itself; it consumes an
/// already-structured knowledge base. Implement this trait on your own
/// configuration structs to provide the translation layer from whatever
/// format your rules are authored in.
///
/// # Example
///
/// ```rust
/// use gizi::kb::{BmiRule, IntoKnowledgeBase, KnowledgeBase};
/// use gizi::error::KnowledgeBaseError;
///
/// struct MyBracket { label: String, from: Option<f64>, to: Option<f64> }
/// struct MyConfig { brackets: Vec<MyBracket> }
///
/// impl IntoKnowledgeBase for MyConfig {
///     fn into_knowledge_base(self) -> Result<KnowledgeBase, KnowledgeBaseError> {
///         let bmi_rules = self
///             .brackets
///             .into_iter()
///             .map(|b| BmiRule {
///                 id: b.label,
///                 bmi_min: b.from,
///                 bmi_max: b.to,
///                 protein_g_per_kg_ibw: 1.2,
///                 calories_kcal_per_kg_ibw_min: 25.0,
///                 calories_kcal_per_kg_ibw_max: 30.0,
///             })
///             .collect();
///
///         Ok(KnowledgeBase { bmi_rules, ..KnowledgeBase::default() })
///     }
/// }
/// ```
pub trait IntoKnowledgeBase {
    /// Consumes the object and produces the engine's canonical rule tables.
    fn into_knowledge_base(self) -> Result<KnowledgeBase, KnowledgeBaseError>;
}
