//! Capability traits implemented by the surrounding runtime
//!
//! The bridge never owns classes, objects, or invocation. It reads member
//! tables through [`HostModel`], turns raw references into objects through
//! [`ReferenceTable`], and hands resolved calls to a [`CallInvoker`].

use crate::error::BridgeResult;
use crate::types::{Callable, ClassId, FieldRef};
use crate::value::{ArgValue, ObjectHandle};

/// Read-only view of a host object model.
///
/// # Enumeration order
///
/// Every `Vec` returned here is ordered, and the order is observable: the
/// wildcard resolution pass picks the first candidate that fits.
///
/// - `declared_*`: members declared on `class` itself, any visibility, in
///   declaration order.
/// - `public_*`: public members of `class` in declaration order, then public
///   members of each superclass walking up. A signature overridden in a
///   subclass is reported once, by the most derived declaration.
///
/// Resolutions may be issued from several threads against one model.
pub trait HostModel: Send + Sync {
    /// Fully qualified class name (e.g. `java.util.UUID`)
    fn class_name(&self, class: ClassId) -> Option<&str>;

    /// Constructors declared on `class` taking `arity` parameters
    fn declared_constructors(&self, class: ClassId, arity: usize) -> Vec<Callable>;

    /// Public constructors of `class` taking `arity` parameters
    fn public_constructors(&self, class: ClassId, arity: usize) -> Vec<Callable>;

    /// Methods named `name` declared on `class` taking `arity` parameters
    fn declared_methods(&self, class: ClassId, name: &str, arity: usize) -> Vec<Callable>;

    /// Public methods named `name` on `class` or its superclasses
    fn public_methods(&self, class: ClassId, name: &str, arity: usize) -> Vec<Callable>;

    /// Field declared on `class` itself, any visibility
    fn declared_field(&self, class: ClassId, name: &str) -> Option<FieldRef>;

    /// Public field on `class` or its nearest superclass declaring one
    fn public_field(&self, class: ClassId, name: &str) -> Option<FieldRef>;
}

/// Object identities owned by the runtime.
///
/// Cursors only see raw 32-bit references; this maps them to live objects.
pub trait ReferenceTable: Send + Sync {
    /// Resolve a raw reference. `None` is the null reference.
    fn resolve(&self, reference: u32) -> Option<ObjectHandle>;
}

/// The layer that actually performs calls once resolution succeeded.
pub trait CallInvoker {
    /// Call a method; `receiver` is `None` for static calls
    fn invoke_method(
        &self,
        method: &Callable,
        receiver: Option<&ObjectHandle>,
        args: &[ArgValue],
    ) -> BridgeResult<ArgValue>;

    /// Run a constructor and return the new instance
    fn invoke_constructor(
        &self,
        constructor: &Callable,
        args: &[ArgValue],
    ) -> BridgeResult<ArgValue>;

    /// Read a field; `receiver` is `None` for static fields
    fn get_field(
        &self,
        field: &FieldRef,
        receiver: Option<&ObjectHandle>,
    ) -> BridgeResult<ArgValue>;

    /// Write a field; `receiver` is `None` for static fields
    fn set_field(
        &self,
        field: &FieldRef,
        receiver: Option<&ObjectHandle>,
        value: ArgValue,
    ) -> BridgeResult<()>;
}
