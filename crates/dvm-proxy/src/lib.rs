//! dvm-proxy - native-call bridge onto a host object model
//!
//! Code running under emulation calls host methods, constructors, and
//! fields given only a type signature and a raw argument source. This crate
//! decodes the arguments and resolves the single matching member.
//!
//! ## Flow
//!
//! ```text
//! CallDescriptor + ArgumentCursor
//!     -> ArgumentDecoder   (types, values)
//!     -> CallableMatcher   (Callable)
//!     -> ProxyCall         (handed to the invocation layer)
//! ```
//!
//! Field access is a separate path through [`field::resolve_field`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! let bridge = ProxyBridge::new(&registry, &BridgeConfig::default());
//! let cursor = ByteCursor::new(&stack_bytes, &objects);
//! let descriptor = CallDescriptor::new("createString", "L");
//! let call = bridge.find_method(uuid_class, &descriptor, &cursor)?;
//! let result = call.invoke(&invoker, Some(&receiver))?;
//! ```

pub mod alias;
pub mod call;
pub mod config;
pub mod cursor;
pub mod decode;
pub mod field;
pub mod matcher;
pub mod registry;
pub mod shorty;

pub use alias::{AliasRule, AliasTable};
pub use call::{ProxyCall, ProxyConstructor, ProxyField, ProxyMethod};
pub use config::{BridgeConfig, ConfigError};
pub use cursor::{ArgumentCursor, ByteCursor, SlotCursor};
pub use decode::{ArgumentDecoder, DecodedArguments};
pub use matcher::CallableMatcher;
pub use registry::{ClassDefiner, ClassRegistry, ObjectTable};

pub use dvm_proxy_sdk::{
    ArgValue, BridgeError, BridgeResult, CallInvoker, Callable, CallableKind, ClassId, FieldRef,
    HostModel, ObjectHandle, ReferenceTable, TypeCode, ValueType, Visibility,
};

use tracing::debug;

/// Name and argument shorty of a requested call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallDescriptor {
    name: String,
    shorty: String,
}

impl CallDescriptor {
    /// Descriptor from a member name and an argument shorty (`"ILZ"`)
    pub fn new(name: impl Into<String>, shorty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shorty: shorty.into(),
        }
    }

    /// Descriptor from a member name and a full method descriptor
    /// (`"(ILjava/lang/String;Z)V"`)
    pub fn from_method_descriptor(name: impl Into<String>, descriptor: &str) -> BridgeResult<Self> {
        Ok(Self {
            name: name.into(),
            shorty: shorty::from_descriptor(descriptor)?,
        })
    }

    /// Member name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Argument shorty
    pub fn shorty(&self) -> &str {
        &self.shorty
    }
}

/// Entry point: decode arguments and resolve members against one host model.
///
/// Holds no per-call state; one bridge can serve any number of requests,
/// each with its own cursor.
pub struct ProxyBridge<'a> {
    model: &'a dyn HostModel,
    aliases: AliasTable,
    decoder: ArgumentDecoder,
    constructor_name: String,
}

impl<'a> ProxyBridge<'a> {
    /// Bridge over `model` using `config`
    pub fn new(model: &'a dyn HostModel, config: &BridgeConfig) -> Self {
        Self {
            model,
            aliases: config.alias_table(),
            decoder: ArgumentDecoder::new(config.jni_true),
            constructor_name: config.constructor_name.clone(),
        }
    }

    /// Bridge with default settings and only the built-in aliases
    pub fn with_defaults(model: &'a dyn HostModel) -> Self {
        Self::new(model, &BridgeConfig::default())
    }

    /// The alias rules in effect
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Decode the arguments of `descriptor` without resolving anything
    pub fn decode(
        &self,
        descriptor: &CallDescriptor,
        cursor: &dyn ArgumentCursor,
    ) -> BridgeResult<DecodedArguments> {
        self.decoder.decode(descriptor.shorty(), cursor)
    }

    /// Resolve a constructor of `class`.
    ///
    /// `descriptor` must carry the constructor name.
    pub fn find_constructor(
        &self,
        class: ClassId,
        descriptor: &CallDescriptor,
        cursor: &dyn ArgumentCursor,
    ) -> BridgeResult<ProxyCall> {
        if descriptor.name() != self.constructor_name {
            return Err(BridgeError::NotAConstructor {
                name: descriptor.name().to_string(),
            });
        }

        let decoded = self.decode(descriptor, cursor)?;
        let erased = decoded.has_erased();
        let (types, args) = decoded.into_parts();
        let constructor = self.matcher().resolve_constructor(class, &types)?;
        debug!(class = %class, slot = constructor.slot, erased, "found constructor");
        Ok(ProxyConstructor::new(constructor, args).into())
    }

    /// Resolve method `descriptor.name()` of `class`
    pub fn find_method(
        &self,
        class: ClassId,
        descriptor: &CallDescriptor,
        cursor: &dyn ArgumentCursor,
    ) -> BridgeResult<ProxyCall> {
        let decoded = self.decode(descriptor, cursor)?;
        let erased = decoded.has_erased();
        let (types, args) = decoded.into_parts();
        let method = self
            .matcher()
            .resolve_method(class, descriptor.name(), &types)?;
        debug!(
            class = %class,
            method = %method.name,
            slot = method.slot,
            erased,
            "found method"
        );
        Ok(ProxyMethod::new(method, args).into())
    }

    /// Resolve field `name` of `class`
    pub fn find_field(&self, class: ClassId, name: &str) -> BridgeResult<ProxyField> {
        field::resolve_field(self.model, class, name).map(ProxyField::new)
    }

    fn matcher(&self) -> CallableMatcher<'_> {
        CallableMatcher::new(self.model, &self.aliases)
    }
}
