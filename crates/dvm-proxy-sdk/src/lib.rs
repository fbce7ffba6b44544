//! dvm-proxy SDK - types and traits for host object models
//!
//! This crate provides the minimal types and traits a runtime implements to
//! plug its object model into the `dvm-proxy` call bridge, without
//! depending on the bridge itself.
//!
//! # Example
//!
//! ```ignore
//! use dvm_proxy_sdk::{HostModel, ReferenceTable, ObjectHandle};
//!
//! struct Heap { /* ... */ }
//!
//! impl ReferenceTable for Heap {
//!     fn resolve(&self, reference: u32) -> Option<ObjectHandle> {
//!         self.objects.get(&reference).copied()
//!     }
//! }
//! ```

#![warn(missing_docs)]

pub mod context;
pub mod error;
pub mod types;
pub mod value;

pub use context::{CallInvoker, HostModel, ReferenceTable};
pub use error::{BridgeError, BridgeResult};
pub use types::{Callable, CallableKind, ClassId, FieldRef, TypeCode, ValueType, Visibility};
pub use value::{ArgValue, ObjectHandle};

/// Name reserved for constructors in call descriptors
pub const CONSTRUCTOR_NAME: &str = "<init>";

/// Value a 32-bit boolean argument must hold to decode as `true`
pub const JNI_TRUE: i32 = 1;
