use serde_json::Value;

/// Fill absent instance fields from the defaults declared in `properties`.
///
/// `properties` is a schema `properties` object mapping property names to
/// child schema nodes. A key the instance lacks whose node carries a
/// `default` member gets a clone of that default — the check is member
/// presence, so an explicit `"default": null` is applied. Keys already
/// present keep their value, including explicit `null`, `0`, `false`, and
/// `""`.
///
/// Every declared property is recursed into, whether its value was
/// pre-existing or just defaulted, so nested defaults are filled at all
/// depths in one pass. A non-object instance or absent `properties` is a
/// no-op.
pub fn apply_defaults(instance: &mut Value, properties: Option<&Value>) {
    let Some(Value::Object(properties)) = properties else {
        return;
    };
    let Value::Object(fields) = instance else {
        return;
    };

    for (name, node) in properties {
        if !fields.contains_key(name) {
            if let Some(default) = node.get("default") {
                // Clone per assignment: declared defaults are never
                // aliased between defaulted instances.
                fields.insert(name.clone(), default.clone());
            }
        }
        if let Some(child) = fields.get_mut(name) {
            apply_defaults(child, node.get("properties"));
        }
    }
}

/// Apply defaults from a full schema document's top-level `properties`.
pub fn apply_schema_defaults(instance: &mut Value, schema: &Value) {
    apply_defaults(instance, schema.get("properties"));
}
