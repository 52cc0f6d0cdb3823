//! `dovetail method`: assemble a full method descriptor.

use dovetail_types::{Dispatch, ParsedType, SignatureResolver, TypeRegistry};
use termcolor::ColorChoice;

use crate::output::StyledOutput;

pub fn execute(
    ret: &str,
    params: &[String],
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

    let ret_slot = registry.parse_type(ret)?;
    let mut param_slots = Vec::with_capacity(params.len());
    for raw in params {
        param_slots.push(registry.parse_type(raw)?);
    }

    let descriptor = resolver.method_descriptor(&param_slots, &ret_slot);
    let selector = resolver.selector(&ret_slot.joint, ret_slot.dimension, dispatch);

    if json {
        let value = serde_json::json!({
            "descriptor": descriptor,
            "selector": selector,
            "return": slot_json(&ret_slot),
            "params": param_slots.iter().map(slot_json).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let mut out = StyledOutput::new(choice);
    out.field("descriptor", &descriptor);
    out.field("selector", selector);
    out.field("returns", &format!("{} ({})", ret_slot, ret_slot.joint));
    for (i, slot) in param_slots.iter().enumerate() {
        out.field(&format!("param {}", i), &format!("{} ({})", slot, slot.joint));
    }
    Ok(())
}

fn slot_json(slot: &ParsedType) -> serde_json::Value {
    serde_json::json!({
        "joint": slot.joint.to_string(),
        "java": slot.to_string(),
        "dimension": slot.dimension,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_assembles_descriptor() {
        let params = ["java.lang.String".to_string(), "int[]".to_string()];
        assert!(execute("void", &params, false, true, ColorChoice::Never).is_ok());
    }

    #[test]
    fn test_execute_rejects_malformed_return() {
        let err = execute("int[", &[], false, true, ColorChoice::Never).unwrap_err();
        assert!(err.to_string().contains("Malformed array brackets"));
    }

    #[test]
    fn test_execute_rejects_malformed_param() {
        let params = ["[]".to_string()];
        let err = execute("void", &params, true, true, ColorChoice::Never).unwrap_err();
        assert!(err.to_string().contains("Empty type name"));
    }
}
