use clap::Parser;
use gizi::prelude::*;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

// --- JSON Deserialization (Input Format Specific) ---
// The CLI also accepts the legacy "flat" profile format, where every boolean
// key sits next to height/weight instead of inside the fact maps.

/// Preference fact names the food filter interprets directly. Flat-profile
/// booleans with these names land in `preference_facts`; everything else is
/// treated as a health fact.
const PREFERENCE_FACT_NAMES: &[&str] =
    &["vegetarian", "halal", "lactose_free", "no_seafood", "gluten_free"];

/// A rule-based nutrition inference and food recommendation CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the knowledge base JSON file
    kb_path: String,
    /// Optional path to a user profile JSON file (structured or flat format)
    profile_path: Option<String>,

    /// Report knowledge base well-formedness issues before evaluating
    #[arg(long)]
    validate: bool,

    /// Pretty-print the resulting recommendation JSON
    #[arg(short, long)]
    pretty: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. Knowledge base ---
    let load_start = Instant::now();
    let kb = KnowledgeBase::from_file(&cli.kb_path)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let load_duration = load_start.elapsed();

    if cli.validate {
        let issues = kb.validate();
        if issues.is_empty() {
            eprintln!("Knowledge base is well-formed.");
        } else {
            for issue in &issues {
                eprintln!("warning: {issue}");
            }
        }
    }

    // --- 2. Profile ---
    let profile = match &cli.profile_path {
        Some(path) => load_profile(path),
        None => {
            eprintln!("No profile file provided. Using default sample profile.");
            default_profile()
        }
    };

    // --- 3. Evaluation ---
    let eval_start = Instant::now();
    let result = Recommender::new(&kb)
        .evaluate(&profile)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let eval_duration = eval_start.elapsed();

    let json = if cli.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize result: {e}")));
    println!("{json}");

    eprintln!("\n--- Performance Summary ---");
    eprintln!("KB Loading:  {load_duration:?}");
    eprintln!("Evaluation:  {eval_duration:?}");
    eprintln!("Total:       {:?}", total_start.elapsed());
}

/// Loads a profile from either the structured `UserProfile` format or the
/// flat legacy format (`{"height_cm": .., "weight_kg": .., "diabetes": true}`).
fn load_profile(path: &str) -> UserProfile {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read profile file '{path}': {e}")));
    let value: serde_json::Value = serde_json::from_str(&content)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse profile JSON: {e}")));

    let is_structured = value
        .as_object()
        .is_some_and(|obj| obj.contains_key("health_facts") || obj.contains_key("preference_facts"));

    if is_structured {
        serde_json::from_value(value)
            .unwrap_or_else(|e| exit_with_error(&format!("Invalid profile: {e}")))
    } else {
        flat_profile(&value)
    }
}

fn flat_profile(value: &serde_json::Value) -> UserProfile {
    let obj = value
        .as_object()
        .unwrap_or_else(|| exit_with_error("Profile JSON must be an object"));

    let number = |key: &str| -> f64 {
        obj.get(key)
            .and_then(serde_json::Value::as_f64)
            .unwrap_or_else(|| exit_with_error(&format!("Profile is missing numeric field '{key}'")))
    };

    let mut profile = UserProfile::new(number("height_cm"), number("weight_kg"));
    for (key, val) in obj {
        if let Some(flag) = val.as_bool() {
            if PREFERENCE_FACT_NAMES.contains(&key.as_str()) {
                profile.preference_facts.insert(key.clone(), flag);
            } else {
                profile.health_facts.insert(key.clone(), flag);
            }
        }
    }
    profile
}

fn default_profile() -> UserProfile {
    UserProfile::new(165.0, 90.0).with_health_fact("diabetes", true)
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {message}");
    std::process::exit(1);
}
