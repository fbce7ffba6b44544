//! Constructor and method resolution
//!
//! Resolution has two passes, chosen by whether any argument type was
//! erased by a null reference:
//!
//! 1. **Exact** (every type known): look for a member whose parameter list
//!    equals the decoded types among the declared members, then among the
//!    public (declared or inherited) members.
//! 2. **Wildcard** (at least one `None`): collect declared members followed
//!    by public members with the right name and arity, drop duplicates, and
//!    take the first one whose known positions match exactly. Erased
//!    positions match anything.
//!
//! Types are compared by identity. There is no widening and no subtype
//! matching: an argument of class `B` does not match a parameter of its
//! superclass `A`.

use dvm_proxy_sdk::{
    BridgeError, BridgeResult, Callable, ClassId, HostModel, ValueType, CONSTRUCTOR_NAME,
};
use tracing::{debug, warn};

use crate::alias::AliasTable;

/// What is being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target<'n> {
    Constructor,
    Method(&'n str),
}

/// Resolves constructors and methods against a [`HostModel`].
pub struct CallableMatcher<'a> {
    model: &'a dyn HostModel,
    aliases: &'a AliasTable,
}

impl<'a> CallableMatcher<'a> {
    /// Matcher reading members from `model` and rewriting names via `aliases`
    pub fn new(model: &'a dyn HostModel, aliases: &'a AliasTable) -> Self {
        Self { model, aliases }
    }

    /// Resolve a constructor of `class` for the decoded argument types
    pub fn resolve_constructor(
        &self,
        class: ClassId,
        types: &[Option<ValueType>],
    ) -> BridgeResult<Callable> {
        self.class_name(class)?;
        self.resolve(class, Target::Constructor, types)
    }

    /// Resolve method `name` of `class` for the decoded argument types.
    ///
    /// Alias rules for `class` are applied to `name` first.
    pub fn resolve_method(
        &self,
        class: ClassId,
        name: &str,
        types: &[Option<ValueType>],
    ) -> BridgeResult<Callable> {
        let class_name = self.class_name(class)?;
        let real = self.aliases.rewrite(class_name, name);
        if real != name {
            debug!(
                class = class_name,
                alias = name,
                target = real,
                "rewrote aliased method name"
            );
        }
        self.resolve(class, Target::Method(real), types)
    }

    fn resolve(
        &self,
        class: ClassId,
        target: Target<'_>,
        types: &[Option<ValueType>],
    ) -> BridgeResult<Callable> {
        let known: Option<Vec<ValueType>> = types.iter().copied().collect();
        let found = match known {
            Some(known) => self.exact(class, target, &known),
            None => self.wildcard(class, target, types),
        };

        match found {
            Some(callable) => Ok(callable),
            None => Err(self.no_such_callable(class, target, types)),
        }
    }

    /// Exact pass: declared members first, then the public surface.
    fn exact(&self, class: ClassId, target: Target<'_>, known: &[ValueType]) -> Option<Callable> {
        let arity = known.len();
        let hit = self
            .declared(class, target, arity)
            .into_iter()
            .find(|c| c.parameter_types == known);
        if hit.is_some() {
            debug!(class = %class, ?target, pass = "declared", "resolved callable");
            return hit;
        }

        let hit = self
            .public(class, target, arity)
            .into_iter()
            .find(|c| c.parameter_types == known);
        if hit.is_some() {
            debug!(class = %class, ?target, pass = "public", "resolved callable");
        }
        hit
    }

    /// Wildcard pass over declared-then-public candidates.
    fn wildcard(
        &self,
        class: ClassId,
        target: Target<'_>,
        types: &[Option<ValueType>],
    ) -> Option<Callable> {
        let arity = types.len();
        let mut candidates = self.declared(class, target, arity);
        for callable in self.public(class, target, arity) {
            if !candidates.contains(&callable) {
                candidates.push(callable);
            }
        }

        let mut matching = candidates
            .into_iter()
            .filter(|c| matches_types(&c.parameter_types, types));
        let first = matching.next()?;
        let others = matching.count();
        if others > 0 {
            warn!(
                class = %class,
                ?target,
                candidates = others + 1,
                "null argument leaves overloads ambiguous; taking the first in enumeration order"
            );
        } else {
            debug!(class = %class, ?target, pass = "wildcard", "resolved callable");
        }
        Some(first)
    }

    fn declared(&self, class: ClassId, target: Target<'_>, arity: usize) -> Vec<Callable> {
        match target {
            Target::Constructor => self.model.declared_constructors(class, arity),
            Target::Method(name) => self.model.declared_methods(class, name, arity),
        }
    }

    fn public(&self, class: ClassId, target: Target<'_>, arity: usize) -> Vec<Callable> {
        match target {
            Target::Constructor => self.model.public_constructors(class, arity),
            Target::Method(name) => self.model.public_methods(class, name, arity),
        }
    }

    fn class_name(&self, class: ClassId) -> BridgeResult<&'a str> {
        self.model
            .class_name(class)
            .ok_or(BridgeError::UnknownClass(class))
    }

    fn no_such_callable(
        &self,
        class: ClassId,
        target: Target<'_>,
        types: &[Option<ValueType>],
    ) -> BridgeError {
        let name = match target {
            Target::Constructor => CONSTRUCTOR_NAME,
            Target::Method(name) => name,
        };
        BridgeError::NoSuchCallable {
            class: self.model.class_name(class).unwrap_or("?").to_string(),
            name: name.to_string(),
            signature: render_types(self.model, types),
        }
    }
}

/// Position-wise match where `None` is a wildcard.
pub fn matches_types(parameters: &[ValueType], types: &[Option<ValueType>]) -> bool {
    parameters.len() == types.len()
        && parameters
            .iter()
            .zip(types)
            .all(|(param, ty)| ty.is_none_or(|ty| ty == *param))
}

/// Render a decoded type list as `[int, null, java.lang.String]`
pub fn render_types(model: &dyn HostModel, types: &[Option<ValueType>]) -> String {
    let names: Vec<String> = types
        .iter()
        .map(|ty| match ty {
            None => "null".to_string(),
            Some(ty) => match ty.class_id() {
                Some(id) => model
                    .class_name(id)
                    .map_or_else(|| id.to_string(), str::to_string),
                None => ty.primitive_name().unwrap_or("?").to_string(),
            },
        })
        .collect();
    format!("[{}]", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dvm_proxy_sdk::ClassId;

    #[test]
    fn test_matches_types_wildcards() {
        let params = [ValueType::Int, ValueType::Object(ClassId(4))];
        assert!(matches_types(&params, &[Some(ValueType::Int), None]));
        assert!(matches_types(&params, &[None, None]));
        let exact = [Some(ValueType::Int), Some(ValueType::Object(ClassId(4)))];
        assert!(matches_types(&params, &exact));
        assert!(!matches_types(&params, &[Some(ValueType::Long), None]));
        assert!(!matches_types(&params, &[None]));
        let other = [None, Some(ValueType::Object(ClassId(5)))];
        assert!(!matches_types(&params, &other));
    }

    #[test]
    fn test_matches_types_empty() {
        assert!(matches_types(&[], &[]));
    }
}
