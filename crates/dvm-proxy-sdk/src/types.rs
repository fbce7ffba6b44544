//! Type and member descriptors shared between the bridge and host models
//!
//! A call signature is a string of single-character type codes. Decoding
//! turns each code into a [`ValueType`] (or nothing, when an object
//! reference was null), and resolution hands back [`Callable`] and
//! [`FieldRef`] handles owned by the host model.

use std::fmt;

// ============================================================================
// TypeCode
// ============================================================================

/// One argument kind in a signature string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    /// `B` - signed 8-bit
    Byte,
    /// `C` - unsigned 16-bit character
    Char,
    /// `I` - signed 32-bit
    Int,
    /// `S` - signed 16-bit
    Short,
    /// `Z` - boolean
    Boolean,
    /// `F` - 32-bit float
    Float,
    /// `L` - object reference
    Object,
    /// `D` - 64-bit float
    Double,
    /// `J` - signed 64-bit
    Long,
}

impl TypeCode {
    /// All codes, in alphabet order
    pub const ALL: [TypeCode; 9] = [
        TypeCode::Byte,
        TypeCode::Char,
        TypeCode::Int,
        TypeCode::Short,
        TypeCode::Boolean,
        TypeCode::Float,
        TypeCode::Object,
        TypeCode::Double,
        TypeCode::Long,
    ];

    /// Parse a single signature character
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'B' => Some(TypeCode::Byte),
            'C' => Some(TypeCode::Char),
            'I' => Some(TypeCode::Int),
            'S' => Some(TypeCode::Short),
            'Z' => Some(TypeCode::Boolean),
            'F' => Some(TypeCode::Float),
            'L' => Some(TypeCode::Object),
            'D' => Some(TypeCode::Double),
            'J' => Some(TypeCode::Long),
            _ => None,
        }
    }

    /// The signature character for this code
    pub const fn as_char(self) -> char {
        match self {
            TypeCode::Byte => 'B',
            TypeCode::Char => 'C',
            TypeCode::Int => 'I',
            TypeCode::Short => 'S',
            TypeCode::Boolean => 'Z',
            TypeCode::Float => 'F',
            TypeCode::Object => 'L',
            TypeCode::Double => 'D',
            TypeCode::Long => 'J',
        }
    }

    /// Width in bytes under the packed (byte-cursor) convention
    pub const fn byte_width(self) -> usize {
        if self.is_wide() {
            8
        } else {
            4
        }
    }

    /// 64-bit kinds (`D`, `J`)
    pub const fn is_wide(self) -> bool {
        matches!(self, TypeCode::Double | TypeCode::Long)
    }

    /// Primitive type denoted by this code, `None` for object references
    pub const fn primitive_type(self) -> Option<ValueType> {
        match self {
            TypeCode::Byte => Some(ValueType::Byte),
            TypeCode::Char => Some(ValueType::Char),
            TypeCode::Int => Some(ValueType::Int),
            TypeCode::Short => Some(ValueType::Short),
            TypeCode::Boolean => Some(ValueType::Boolean),
            TypeCode::Float => Some(ValueType::Float),
            TypeCode::Double => Some(ValueType::Double),
            TypeCode::Long => Some(ValueType::Long),
            TypeCode::Object => None,
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ============================================================================
// ClassId / ValueType
// ============================================================================

/// Opaque identity of a host class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub u32);

impl ClassId {
    /// Raw index
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Concrete type of a decoded argument or a declared parameter.
///
/// Decoded type lists are `Vec<Option<ValueType>>`: `None` marks an object
/// reference that was null, whose type is therefore unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// byte
    Byte,
    /// char
    Char,
    /// int
    Int,
    /// short
    Short,
    /// boolean
    Boolean,
    /// float
    Float,
    /// double
    Double,
    /// long
    Long,
    /// Instance of a host class
    Object(ClassId),
}

impl ValueType {
    /// Name of a primitive type; `None` for class types
    pub const fn primitive_name(&self) -> Option<&'static str> {
        match self {
            ValueType::Byte => Some("byte"),
            ValueType::Char => Some("char"),
            ValueType::Int => Some("int"),
            ValueType::Short => Some("short"),
            ValueType::Boolean => Some("boolean"),
            ValueType::Float => Some("float"),
            ValueType::Double => Some("double"),
            ValueType::Long => Some("long"),
            ValueType::Object(_) => None,
        }
    }

    /// Class identity for object types
    pub const fn class_id(&self) -> Option<ClassId> {
        match self {
            ValueType::Object(id) => Some(*id),
            _ => None,
        }
    }

    /// Check if this is a primitive type
    pub const fn is_primitive(&self) -> bool {
        !matches!(self, ValueType::Object(_))
    }
}

// ============================================================================
// Members
// ============================================================================

/// Member visibility as reported by the host model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Visible everywhere, inherited by lookups on subclasses
    Public,
    /// Subclass-visible
    Protected,
    /// Visible within the declaring package
    Package,
    /// Visible only to the declaring class
    Private,
}

impl Visibility {
    /// Check if the member is public
    pub const fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// Constructor or ordinary method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallableKind {
    /// Instance constructor
    Constructor,
    /// Named method
    Method,
}

/// Handle to a constructor or method on a host class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Callable {
    /// Constructor or method
    pub kind: CallableKind,
    /// Class that declares the member
    pub declaring_class: ClassId,
    /// Member name (the constructor sentinel for constructors)
    pub name: String,
    /// Declared parameter types, in order
    pub parameter_types: Vec<ValueType>,
    /// Declared visibility
    pub visibility: Visibility,
    /// Index among the declaring class's members of the same kind
    pub slot: usize,
}

impl Callable {
    /// Number of declared parameters
    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }

    /// Check if this is a constructor
    pub fn is_constructor(&self) -> bool {
        self.kind == CallableKind::Constructor
    }

    /// Same name and parameter list (used to collapse overrides)
    pub fn same_signature(&self, other: &Callable) -> bool {
        self.kind == other.kind
            && self.name == other.name
            && self.parameter_types == other.parameter_types
    }
}

/// Handle to a field on a host class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldRef {
    /// Class that declares the field
    pub declaring_class: ClassId,
    /// Field name
    pub name: String,
    /// Declared field type
    pub field_type: ValueType,
    /// Declared visibility
    pub visibility: Visibility,
    /// Index among the declaring class's fields
    pub slot: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_code_chars() {
        for code in TypeCode::ALL {
            assert_eq!(TypeCode::from_char(code.as_char()), Some(code));
        }
        assert_eq!(TypeCode::from_char('V'), None);
        assert_eq!(TypeCode::from_char('['), None);
        assert_eq!(TypeCode::from_char('i'), None);
    }

    #[test]
    fn test_byte_widths() {
        let widths: Vec<usize> = TypeCode::ALL.iter().map(|c| c.byte_width()).collect();
        assert_eq!(widths, vec![4, 4, 4, 4, 4, 4, 4, 8, 8]);
    }

    #[test]
    fn test_primitive_type_of_object_code() {
        assert_eq!(TypeCode::Object.primitive_type(), None);
        assert_eq!(TypeCode::Short.primitive_type(), Some(ValueType::Short));
    }

    #[test]
    fn test_value_type_classification() {
        let object = ValueType::Object(ClassId(4));
        assert!(!object.is_primitive());
        assert_eq!(object.class_id(), Some(ClassId(4)));
        assert_eq!(object.primitive_name(), None);

        assert!(ValueType::Char.is_primitive());
        assert_eq!(ValueType::Char.class_id(), None);
        assert_eq!(ValueType::Char.primitive_name(), Some("char"));
    }

    #[test]
    fn test_same_signature_ignores_declaring_class() {
        let a = Callable {
            kind: CallableKind::Method,
            declaring_class: ClassId(1),
            name: "run".to_string(),
            parameter_types: vec![ValueType::Int],
            visibility: Visibility::Public,
            slot: 0,
        };
        let mut b = a.clone();
        b.declaring_class = ClassId(2);
        b.slot = 3;
        assert!(a.same_signature(&b));

        b.parameter_types = vec![ValueType::Long];
        assert!(!a.same_signature(&b));
    }
}
