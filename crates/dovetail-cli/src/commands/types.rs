//! `dovetail types`: print the canonical joint type table.

use dovetail_types::{SignatureResolver, TypeRegistry};
use termcolor::ColorChoice;

use crate::output::StyledOutput;

pub fn execute(json: bool, choice: ColorChoice) -> anyhow::Result<()> {
    let registry = TypeRegistry::global();
    let resolver = SignatureResolver::new(registry);

    if json {
        let rows: Vec<serde_json::Value> = registry
            .canonical_types()
            .iter()
            .map(|joint| {
                serde_json::json!({
                    "token": joint.to_string(),
                    "java": joint.java_name(),
                    "native": resolver.native_type(joint, 0),
                    "descriptor": resolver.descriptor(joint, 0),
                    "primitive": joint.is_primitive(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let mut out = StyledOutput::new(choice);
    out.heading(&format!(
        "{:<18} {:<18} {:<10} {:<20} {}",
        "TOKEN", "JAVA", "NATIVE", "DESCRIPTOR", "KIND"
    ));
    for joint in registry.canonical_types() {
        let kind = if joint.is_primitive() {
            "primitive"
        } else {
            "object"
        };
        out.line(&format!(
            "{:<18} {:<18} {:<10} {:<20} {}",
            joint.to_string(),
            joint.java_name(),
            resolver.native_type(&joint, 0),
            resolver.descriptor(&joint, 0),
            kind
        ));
    }
    Ok(())
}
