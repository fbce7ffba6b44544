//! Shared class fixture for integration tests

#![allow(dead_code)]

use dvm_proxy::{ClassId, ClassRegistry, ObjectHandle, ObjectTable, ValueType, Visibility};

/// A small class hierarchy plus a few live objects
pub struct World {
    pub registry: ClassRegistry,
    pub objects: ObjectTable,

    pub object: ClassId,
    pub string: ClassId,
    pub integer: ClassId,
    pub uuid: ClassId,
    pub widget: ClassId,
    pub base: ClassId,
    pub derived: ClassId,

    pub a_string: ObjectHandle,
    pub an_integer: ObjectHandle,
    pub a_uuid: ObjectHandle,
}

pub fn obj(class: ClassId) -> ValueType {
    ValueType::Object(class)
}

impl World {
    pub fn new() -> Self {
        let mut registry = ClassRegistry::new();

        let object = registry.declare("java.lang.Object", None).unwrap();
        let string = registry.declare("java.lang.String", Some(object)).unwrap();
        let integer = registry.declare("java.lang.Integer", Some(object)).unwrap();
        let uuid = registry.declare("java.util.UUID", Some(object)).unwrap();
        let widget = registry
            .declare("com.example.Widget", Some(object))
            .unwrap();
        let base = registry.declare("com.example.Base", Some(object)).unwrap();
        let derived = registry.declare("com.example.Derived", Some(base)).unwrap();

        registry
            .define(object)
            .unwrap()
            .constructor(Visibility::Public, &[])
            .method("toString", Visibility::Public, &[])
            .method("equals", Visibility::Public, &[obj(object)])
            .method("hashCode", Visibility::Public, &[]);

        registry
            .define(string)
            .unwrap()
            .constructor(Visibility::Public, &[])
            .method("length", Visibility::Public, &[])
            .method("toString", Visibility::Public, &[]);

        registry
            .define(integer)
            .unwrap()
            .constructor(Visibility::Public, &[ValueType::Int])
            .method("intValue", Visibility::Public, &[]);

        registry
            .define(uuid)
            .unwrap()
            .constructor(Visibility::Public, &[ValueType::Long, ValueType::Long])
            .method("getMostSignificantBits", Visibility::Public, &[])
            .method("toString", Visibility::Public, &[])
            .field("mostSigBits", Visibility::Private, ValueType::Long);

        registry
            .define(widget)
            .unwrap()
            .constructor(Visibility::Public, &[ValueType::Int])
            .constructor(Visibility::Public, &[ValueType::Int, obj(string)])
            .constructor(Visibility::Public, &[ValueType::Int, obj(integer)])
            .constructor(Visibility::Private, &[obj(string)])
            .method("put", Visibility::Public, &[obj(string), ValueType::Int])
            .method("put", Visibility::Public, &[obj(integer), ValueType::Int])
            .method("label", Visibility::Private, &[obj(string)])
            .method(
                "mix",
                Visibility::Public,
                &[ValueType::Int, obj(string), ValueType::Boolean],
            )
            .method(
                "scale",
                Visibility::Public,
                &[ValueType::Double, ValueType::Long],
            )
            .method("describe", Visibility::Public, &[])
            .field("name", Visibility::Private, obj(string))
            .field("count", Visibility::Public, ValueType::Int);

        registry
            .define(base)
            .unwrap()
            .constructor(Visibility::Public, &[])
            .method("greet", Visibility::Public, &[obj(string)])
            .method("inherited", Visibility::Public, &[ValueType::Int])
            .field("name", Visibility::Public, obj(string))
            .field("shared", Visibility::Public, ValueType::Int)
            .field("secret", Visibility::Private, ValueType::Int);

        registry
            .define(derived)
            .unwrap()
            .constructor(Visibility::Public, &[])
            .method("greet", Visibility::Public, &[obj(string)])
            .field("name", Visibility::Private, obj(string));

        let mut objects = ObjectTable::new();
        let a_string = objects.insert(string).unwrap();
        let an_integer = objects.insert(integer).unwrap();
        let a_uuid = objects.insert(uuid).unwrap();

        Self {
            registry,
            objects,
            object,
            string,
            integer,
            uuid,
            widget,
            base,
            derived,
            a_string,
            an_integer,
            a_uuid,
        }
    }
}

/// Little-endian packed argument buffer
#[derive(Default)]
pub struct Packed(pub Vec<u8>);

impl Packed {
    pub fn int(mut self, v: i32) -> Self {
        self.0.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn float(mut self, v: f32) -> Self {
        self.0.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn long(mut self, v: i64) -> Self {
        self.0.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn double(mut self, v: f64) -> Self {
        self.0.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn reference(mut self, handle: Option<ObjectHandle>) -> Self {
        let raw = handle.map_or(0, |h| h.reference);
        self.0.extend_from_slice(&raw.to_le_bytes());
        self
    }
}
