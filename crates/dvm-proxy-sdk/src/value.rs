//! Decoded argument values
//!
//! Values read off an argument cursor keep the exact width requested by
//! the signature: a `B` argument is an `i8` even though the cursor handed
//! back a full 32-bit word.

use std::fmt;

use crate::types::{ClassId, ValueType};

/// A live host object referenced by an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle {
    /// Raw reference as it appeared in the argument source
    pub reference: u32,
    /// Concrete runtime class of the object
    pub class: ClassId,
}

impl ObjectHandle {
    /// Create a handle
    pub const fn new(reference: u32, class: ClassId) -> Self {
        Self { reference, class }
    }

    /// Runtime type of the referenced object
    pub const fn value_type(&self) -> ValueType {
        ValueType::Object(self.class)
    }
}

/// One decoded argument value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArgValue {
    /// byte
    Byte(i8),
    /// char (UTF-16 code unit)
    Char(u16),
    /// int
    Int(i32),
    /// short
    Short(i16),
    /// boolean
    Boolean(bool),
    /// float
    Float(f32),
    /// double
    Double(f64),
    /// long
    Long(i64),
    /// Non-null object reference
    Object(ObjectHandle),
    /// Null object reference
    Null,
}

impl ArgValue {
    /// Check if value is a null reference
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, ArgValue::Null)
    }

    /// Runtime type of this value, `None` for null
    pub const fn value_type(&self) -> Option<ValueType> {
        match self {
            ArgValue::Byte(_) => Some(ValueType::Byte),
            ArgValue::Char(_) => Some(ValueType::Char),
            ArgValue::Int(_) => Some(ValueType::Int),
            ArgValue::Short(_) => Some(ValueType::Short),
            ArgValue::Boolean(_) => Some(ValueType::Boolean),
            ArgValue::Float(_) => Some(ValueType::Float),
            ArgValue::Double(_) => Some(ValueType::Double),
            ArgValue::Long(_) => Some(ValueType::Long),
            ArgValue::Object(handle) => Some(handle.value_type()),
            ArgValue::Null => None,
        }
    }

    /// Extract i32 value
    #[inline]
    pub const fn as_int(&self) -> Option<i32> {
        match self {
            ArgValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract i64 value
    #[inline]
    pub const fn as_long(&self) -> Option<i64> {
        match self {
            ArgValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract boolean value
    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            ArgValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract f32 value
    #[inline]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            ArgValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract f64 value
    #[inline]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            ArgValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract object handle
    #[inline]
    pub const fn as_object(&self) -> Option<&ObjectHandle> {
        match self {
            ArgValue::Object(handle) => Some(handle),
            _ => None,
        }
    }

    /// Get type name for debugging
    pub const fn type_name(&self) -> &'static str {
        match self {
            ArgValue::Byte(_) => "byte",
            ArgValue::Char(_) => "char",
            ArgValue::Int(_) => "int",
            ArgValue::Short(_) => "short",
            ArgValue::Boolean(_) => "boolean",
            ArgValue::Float(_) => "float",
            ArgValue::Double(_) => "double",
            ArgValue::Long(_) => "long",
            ArgValue::Object(_) => "object",
            ArgValue::Null => "null",
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Byte(v) => write!(f, "{}", v),
            ArgValue::Char(v) => match char::from_u32(u32::from(*v)) {
                Some(c) => write!(f, "{:?}", c),
                None => write!(f, "\\u{:04x}", v),
            },
            ArgValue::Int(v) => write!(f, "{}", v),
            ArgValue::Short(v) => write!(f, "{}", v),
            ArgValue::Boolean(v) => write!(f, "{}", v),
            ArgValue::Float(v) => write!(f, "{}", v),
            ArgValue::Double(v) => write!(f, "{}", v),
            ArgValue::Long(v) => write!(f, "{}", v),
            ArgValue::Object(handle) => write!(f, "@{:#x}", handle.reference),
            ArgValue::Null => write!(f, "null"),
        }
    }
}
