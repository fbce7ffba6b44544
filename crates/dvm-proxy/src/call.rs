//! Resolved, ready-to-invoke calls
//!
//! A [`ProxyCall`] pairs a resolved callable with the exact argument values
//! decoded for it. It is immutable; invocation is delegated to a
//! [`CallInvoker`] supplied by the runtime.

use dvm_proxy_sdk::{ArgValue, BridgeResult, CallInvoker, Callable, FieldRef, ObjectHandle};

/// A resolved method with its arguments
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyMethod {
    method: Callable,
    args: Vec<ArgValue>,
}

impl ProxyMethod {
    /// Bundle a method handle with its arguments
    pub fn new(method: Callable, args: Vec<ArgValue>) -> Self {
        Self { method, args }
    }

    /// The resolved method
    pub fn method(&self) -> &Callable {
        &self.method
    }

    /// Arguments in call order
    pub fn args(&self) -> &[ArgValue] {
        &self.args
    }
}

/// A resolved constructor with its arguments
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyConstructor {
    constructor: Callable,
    args: Vec<ArgValue>,
}

impl ProxyConstructor {
    /// Bundle a constructor handle with its arguments
    pub fn new(constructor: Callable, args: Vec<ArgValue>) -> Self {
        Self { constructor, args }
    }

    /// The resolved constructor
    pub fn constructor(&self) -> &Callable {
        &self.constructor
    }

    /// Arguments in call order
    pub fn args(&self) -> &[ArgValue] {
        &self.args
    }
}

/// Either kind of resolved call
#[derive(Debug, Clone, PartialEq)]
pub enum ProxyCall {
    /// Bound or static method call
    Method(ProxyMethod),
    /// Constructor call
    Constructor(ProxyConstructor),
}

impl ProxyCall {
    /// The resolved callable
    pub fn callable(&self) -> &Callable {
        match self {
            ProxyCall::Method(m) => m.method(),
            ProxyCall::Constructor(c) => c.constructor(),
        }
    }

    /// Arguments in call order
    pub fn args(&self) -> &[ArgValue] {
        match self {
            ProxyCall::Method(m) => m.args(),
            ProxyCall::Constructor(c) => c.args(),
        }
    }

    /// Check if this is a constructor call
    pub fn is_constructor(&self) -> bool {
        matches!(self, ProxyCall::Constructor(_))
    }

    /// Hand the call to the invocation layer.
    ///
    /// `receiver` is ignored for constructors.
    pub fn invoke(
        &self,
        invoker: &dyn CallInvoker,
        receiver: Option<&ObjectHandle>,
    ) -> BridgeResult<ArgValue> {
        match self {
            ProxyCall::Method(m) => invoker.invoke_method(&m.method, receiver, &m.args),
            ProxyCall::Constructor(c) => invoker.invoke_constructor(&c.constructor, &c.args),
        }
    }
}

impl From<ProxyMethod> for ProxyCall {
    fn from(method: ProxyMethod) -> Self {
        ProxyCall::Method(method)
    }
}

impl From<ProxyConstructor> for ProxyCall {
    fn from(constructor: ProxyConstructor) -> Self {
        ProxyCall::Constructor(constructor)
    }
}

/// A resolved field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyField {
    field: FieldRef,
}

impl ProxyField {
    /// Wrap a field handle
    pub fn new(field: FieldRef) -> Self {
        Self { field }
    }

    /// The resolved field
    pub fn field(&self) -> &FieldRef {
        &self.field
    }

    /// Read the field through the invocation layer
    pub fn get(
        &self,
        invoker: &dyn CallInvoker,
        receiver: Option<&ObjectHandle>,
    ) -> BridgeResult<ArgValue> {
        invoker.get_field(&self.field, receiver)
    }

    /// Write the field through the invocation layer
    pub fn set(
        &self,
        invoker: &dyn CallInvoker,
        receiver: Option<&ObjectHandle>,
        value: ArgValue,
    ) -> BridgeResult<()> {
        invoker.set_field(&self.field, receiver, value)
    }
}
