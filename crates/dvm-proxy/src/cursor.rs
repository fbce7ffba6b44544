//! Argument cursors
//!
//! Two calling conventions deliver native-call arguments:
//!
//! - **slot**: one register/stack slot per argument regardless of width.
//!   Only 32-bit integer and reference reads exist here; wide and
//!   floating-point kinds fail with `UnsupportedArgumentKind`.
//! - **byte**: arguments packed by natural width in a little-endian buffer,
//!   4 bytes for 32-bit kinds and 8 bytes for 64-bit kinds.
//!
//! Every read takes the current logical position and returns the value
//! together with the next position.

use dvm_proxy_sdk::{BridgeError, BridgeResult, ObjectHandle, ReferenceTable, TypeCode};

/// Typed reads over a raw argument source.
pub trait ArgumentCursor {
    /// Convention name used in diagnostics ("slot" or "byte")
    fn convention(&self) -> &'static str;

    /// Read a 32-bit integer
    fn read_int(&self, position: usize) -> BridgeResult<(i32, usize)>;

    /// Read a 32-bit float
    fn read_float(&self, position: usize) -> BridgeResult<(f32, usize)>;

    /// Read a 64-bit float
    fn read_double(&self, position: usize) -> BridgeResult<(f64, usize)>;

    /// Read a 64-bit integer
    fn read_long(&self, position: usize) -> BridgeResult<(i64, usize)>;

    /// Read an object reference; `None` is the null reference
    fn read_object_ref(&self, position: usize) -> BridgeResult<(Option<ObjectHandle>, usize)>;
}

// ============================================================================
// SlotCursor
// ============================================================================

/// Fixed-slot cursor: position is a slot index, every read advances by one.
pub struct SlotCursor<'a> {
    slots: &'a [u64],
    references: &'a dyn ReferenceTable,
}

impl<'a> SlotCursor<'a> {
    /// Cursor over `slots`, positioned by the caller (usually at 0)
    pub fn new(slots: &'a [u64], references: &'a dyn ReferenceTable) -> Self {
        Self { slots, references }
    }

    /// Number of slots available
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if there are no slots
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn slot(&self, position: usize) -> BridgeResult<u64> {
        self.slots
            .get(position)
            .copied()
            .ok_or(BridgeError::CursorExhausted {
                position,
                needed: 1,
                available: self.slots.len().saturating_sub(position),
            })
    }

    fn unsupported(&self, code: TypeCode) -> BridgeError {
        BridgeError::UnsupportedArgumentKind {
            kind: code.as_char(),
            cursor: self.convention(),
        }
    }
}

impl ArgumentCursor for SlotCursor<'_> {
    fn convention(&self) -> &'static str {
        "slot"
    }

    fn read_int(&self, position: usize) -> BridgeResult<(i32, usize)> {
        let raw = self.slot(position)?;
        Ok((raw as u32 as i32, position + 1))
    }

    fn read_float(&self, _position: usize) -> BridgeResult<(f32, usize)> {
        Err(self.unsupported(TypeCode::Float))
    }

    fn read_double(&self, _position: usize) -> BridgeResult<(f64, usize)> {
        Err(self.unsupported(TypeCode::Double))
    }

    fn read_long(&self, _position: usize) -> BridgeResult<(i64, usize)> {
        Err(self.unsupported(TypeCode::Long))
    }

    fn read_object_ref(&self, position: usize) -> BridgeResult<(Option<ObjectHandle>, usize)> {
        let raw = self.slot(position)?;
        Ok((self.references.resolve(raw as u32), position + 1))
    }
}

// ============================================================================
// ByteCursor
// ============================================================================

/// Packed cursor: position is a byte offset into a little-endian buffer.
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    references: &'a dyn ReferenceTable,
}

impl<'a> ByteCursor<'a> {
    /// Cursor over `bytes`
    pub fn new(bytes: &'a [u8], references: &'a dyn ReferenceTable) -> Self {
        Self { bytes, references }
    }

    /// Number of bytes available
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn take<const N: usize>(&self, position: usize) -> BridgeResult<[u8; N]> {
        position
            .checked_add(N)
            .and_then(|end| self.bytes.get(position..end))
            .and_then(|window| window.try_into().ok())
            .ok_or(BridgeError::CursorExhausted {
                position,
                needed: N,
                available: self.bytes.len().saturating_sub(position),
            })
    }
}

impl ArgumentCursor for ByteCursor<'_> {
    fn convention(&self) -> &'static str {
        "byte"
    }

    fn read_int(&self, position: usize) -> BridgeResult<(i32, usize)> {
        let raw = self.take::<4>(position)?;
        Ok((i32::from_le_bytes(raw), position + 4))
    }

    fn read_float(&self, position: usize) -> BridgeResult<(f32, usize)> {
        let raw = self.take::<4>(position)?;
        Ok((f32::from_le_bytes(raw), position + 4))
    }

    fn read_double(&self, position: usize) -> BridgeResult<(f64, usize)> {
        let raw = self.take::<8>(position)?;
        Ok((f64::from_le_bytes(raw), position + 8))
    }

    fn read_long(&self, position: usize) -> BridgeResult<(i64, usize)> {
        let raw = self.take::<8>(position)?;
        Ok((i64::from_le_bytes(raw), position + 8))
    }

    fn read_object_ref(&self, position: usize) -> BridgeResult<(Option<ObjectHandle>, usize)> {
        let raw = self.take::<4>(position)?;
        let handle = self.references.resolve(u32::from_le_bytes(raw));
        Ok((handle, position + 4))
    }
}
