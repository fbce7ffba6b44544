//! Argument decoding
//!
//! Walks a shorty left to right and reads each argument off a cursor,
//! producing two parallel lists: the type of each argument (erased to
//! `None` for null references) and its value.

use dvm_proxy_sdk::{ArgValue, BridgeResult, TypeCode, ValueType, JNI_TRUE};
use tracing::trace;

use crate::cursor::ArgumentCursor;
use crate::shorty;

/// Output of [`ArgumentDecoder::decode`].
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedArguments {
    /// Runtime type per argument; `None` where a reference was null
    pub types: Vec<Option<ValueType>>,
    /// Value per argument
    pub values: Vec<ArgValue>,
    /// Cursor position after the last argument
    pub end: usize,
}

impl DecodedArguments {
    /// Number of decoded arguments
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no arguments
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether any argument type was erased by a null reference
    pub fn has_erased(&self) -> bool {
        self.types.iter().any(Option::is_none)
    }

    /// Split into `(types, values)`
    pub fn into_parts(self) -> (Vec<Option<ValueType>>, Vec<ArgValue>) {
        (self.types, self.values)
    }
}

/// Drives a signature and a cursor together.
#[derive(Debug, Clone, Copy)]
pub struct ArgumentDecoder {
    jni_true: i32,
}

impl Default for ArgumentDecoder {
    fn default() -> Self {
        Self::new(JNI_TRUE)
    }
}

impl ArgumentDecoder {
    /// Decoder treating `jni_true` as the only true boolean encoding
    pub fn new(jni_true: i32) -> Self {
        Self { jni_true }
    }

    /// Decode `signature` starting at cursor position 0.
    pub fn decode(
        &self,
        signature: &str,
        cursor: &dyn ArgumentCursor,
    ) -> BridgeResult<DecodedArguments> {
        let codes = shorty::parse(signature)?;
        self.decode_codes(&codes, cursor, 0)
    }

    /// Decode already-parsed codes starting at `start`.
    pub fn decode_codes(
        &self,
        codes: &[TypeCode],
        cursor: &dyn ArgumentCursor,
        start: usize,
    ) -> BridgeResult<DecodedArguments> {
        let mut types = Vec::with_capacity(codes.len());
        let mut values = Vec::with_capacity(codes.len());
        let mut position = start;

        for &code in codes {
            let (value, next) = self.read_one(code, cursor, position)?;
            trace!(
                cursor = cursor.convention(),
                position,
                code = %code,
                value = %value,
                "decoded argument"
            );
            types.push(value.value_type());
            values.push(value);
            position = next;
        }

        Ok(DecodedArguments {
            types,
            values,
            end: position,
        })
    }

    fn read_one(
        &self,
        code: TypeCode,
        cursor: &dyn ArgumentCursor,
        position: usize,
    ) -> BridgeResult<(ArgValue, usize)> {
        // Narrow kinds are plain truncations of the 32-bit word.
        let decoded = match code {
            TypeCode::Byte => {
                let (v, next) = cursor.read_int(position)?;
                (ArgValue::Byte(v as i8), next)
            }
            TypeCode::Char => {
                let (v, next) = cursor.read_int(position)?;
                (ArgValue::Char(v as u16), next)
            }
            TypeCode::Short => {
                let (v, next) = cursor.read_int(position)?;
                (ArgValue::Short(v as i16), next)
            }
            TypeCode::Int => {
                let (v, next) = cursor.read_int(position)?;
                (ArgValue::Int(v), next)
            }
            TypeCode::Boolean => {
                let (v, next) = cursor.read_int(position)?;
                (ArgValue::Boolean(v == self.jni_true), next)
            }
            TypeCode::Float => {
                let (v, next) = cursor.read_float(position)?;
                (ArgValue::Float(v), next)
            }
            TypeCode::Double => {
                let (v, next) = cursor.read_double(position)?;
                (ArgValue::Double(v), next)
            }
            TypeCode::Long => {
                let (v, next) = cursor.read_long(position)?;
                (ArgValue::Long(v), next)
            }
            TypeCode::Object => {
                let (handle, next) = cursor.read_object_ref(position)?;
                let value = match handle {
                    Some(handle) => ArgValue::Object(handle),
                    None => ArgValue::Null,
                };
                (value, next)
            }
        };
        Ok(decoded)
    }
}
