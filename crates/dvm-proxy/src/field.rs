//! Field resolution
//!
//! Fields have no overloads, so lookup is by name only: the class's own
//! fields of any visibility first, then public fields including inherited
//! ones.

use dvm_proxy_sdk::{BridgeError, BridgeResult, ClassId, FieldRef, HostModel};
use tracing::debug;

/// Resolve field `name` on `class`
pub fn resolve_field(model: &dyn HostModel, class: ClassId, name: &str) -> BridgeResult<FieldRef> {
    let class_name = model
        .class_name(class)
        .ok_or(BridgeError::UnknownClass(class))?;

    if let Some(field) = model.declared_field(class, name) {
        debug!(
            class = class_name,
            field = name,
            tier = "declared",
            "resolved field"
        );
        return Ok(field);
    }
    if let Some(field) = model.public_field(class, name) {
        debug!(
            class = class_name,
            field = name,
            tier = "public",
            "resolved field"
        );
        return Ok(field);
    }

    Err(BridgeError::NoSuchField {
        class: class_name.to_string(),
        name: name.to_string(),
    })
}
