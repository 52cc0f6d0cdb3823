//! `dovetail resolve`: resolve raw type names into bridge artifacts.

use anyhow::bail;
use dovetail_types::{Dispatch, SignatureResolver, TypeRegistry};
use termcolor::ColorChoice;

use crate::output::StyledOutput;

pub fn execute(
    types: &[String],
    is_static: bool,
    json: bool,
    choice: ColorChoice,
) -> anyhow::Result<()> {
    let registry = TypeRegistry::global();
    let resolver = SignatureResolver::new(registry);
    let dispatch = if is_static {
        Dispatch::Static
    } else {
        Dispatch::Instance
    };

    let mut out = StyledOutput::new(choice);
    let mut rows = Vec::new();
    let mut failures = 0;

    for raw in types {
        match registry.parse_type(raw) {
            Ok(parsed) => {
                let native = resolver.native_type(&parsed.joint, parsed.dimension);
                let selector = resolver.selector(&parsed.joint, parsed.dimension, dispatch);
                let descriptor = resolver.descriptor(&parsed.joint, parsed.dimension);

                if json {
                    rows.push(serde_json::json!({
                        "input": raw,
                        "joint": parsed.joint.to_string(),
                        "java": parsed.to_string(),
                        "dimension": parsed.dimension,
                        "native": native,
                        "selector": selector,
                        "descriptor": descriptor,
                    }));
                } else {
                    out.heading(raw);
                    out.field("joint", &parsed.joint.to_string());
                    out.field("java", &parsed.to_string());
                    out.field("dimension", &parsed.dimension.to_string());
                    out.field("native", native);
                    out.field("selector", selector);
                    out.field("descriptor", &descriptor);
                    out.newline();
                }
            }
            Err(e) => {
                if json {
                    rows.push(serde_json::json!({
                        "input": raw,
                        "error": e.to_string(),
                    }));
                } else {
                    out.error(&e.to_string());
                }
                failures += 1;
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    }
    if failures > 0 {
        bail!("{} of {} type names failed to resolve", failures, types.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_execute_resolves_valid_names() {
        let types = names(&["int", "java.lang.String[]", "com.example.Foo"]);
        assert!(execute(&types, false, true, ColorChoice::Never).is_ok());
    }

    #[test]
    fn test_execute_reports_failures_after_all_inputs() {
        // A malformed name mid-list must not stop the remaining names
        let types = names(&["int", "int[", "java.lang.String[]"]);
        let err = execute(&types, false, true, ColorChoice::Never).unwrap_err();
        assert_eq!(err.to_string(), "1 of 3 type names failed to resolve");
    }

    #[test]
    fn test_execute_counts_every_failure() {
        let types = names(&["[]", "int[", "long"]);
        let err = execute(&types, true, true, ColorChoice::Never).unwrap_err();
        assert_eq!(err.to_string(), "2 of 3 type names failed to resolve");
    }
}
