//! In-memory host model
//!
//! [`ClassRegistry`] is a small class table with single inheritance that
//! implements [`HostModel`] with the enumeration order the matcher relies
//! on. [`ObjectTable`] hands out raw references for live objects. Both are
//! used by runtimes that describe their classes up front, and by tests.

use rustc_hash::FxHashMap;

use dvm_proxy_sdk::{
    BridgeError, BridgeResult, Callable, CallableKind, ClassId, FieldRef, HostModel, ObjectHandle,
    ReferenceTable, ValueType, Visibility, CONSTRUCTOR_NAME,
};

#[derive(Debug, Clone)]
struct ClassDef {
    name: String,
    parent: Option<ClassId>,
    constructors: Vec<Callable>,
    methods: Vec<Callable>,
    fields: Vec<FieldRef>,
}

/// Class table keyed by [`ClassId`].
///
/// Read-only once built; share it behind `&` or `Arc` across threads.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: Vec<ClassDef>,
    by_name: FxHashMap<String, ClassId>,
}

impl ClassRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a class, or return the existing id if `name` is already
    /// declared with the same `parent`.
    ///
    /// `parent` must already be declared, so superclass chains cannot cycle.
    pub fn declare(&mut self, name: &str, parent: Option<ClassId>) -> BridgeResult<ClassId> {
        if let Some(&id) = self.by_name.get(name) {
            let existing = self.classes[id.index()].parent;
            if existing != parent {
                return Err(BridgeError::ClassRedeclared {
                    name: name.to_string(),
                    existing,
                    requested: parent,
                });
            }
            return Ok(id);
        }
        if let Some(parent) = parent {
            self.def(parent)?;
        }

        let id = ClassId(self.classes.len() as u32);
        self.classes.push(ClassDef {
            name: name.to_string(),
            parent,
            constructors: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
        });
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Start adding members to `class`
    pub fn define(&mut self, class: ClassId) -> BridgeResult<ClassDefiner<'_>> {
        self.def(class)?;
        Ok(ClassDefiner {
            registry: self,
            class,
        })
    }

    /// Find a class by name
    pub fn lookup(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    /// Direct superclass
    pub fn parent(&self, class: ClassId) -> Option<ClassId> {
        self.classes.get(class.index()).and_then(|c| c.parent)
    }

    /// `class` followed by each superclass up to the root
    pub fn ancestry(&self, class: ClassId) -> impl Iterator<Item = ClassId> + '_ {
        let start = self.classes.get(class.index()).map(|_| class);
        std::iter::successors(start, move |&c| self.parent(c))
    }

    /// Number of declared classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if no class is declared
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    fn def(&self, class: ClassId) -> BridgeResult<&ClassDef> {
        self.classes
            .get(class.index())
            .ok_or(BridgeError::UnknownClass(class))
    }

    fn def_mut(&mut self, class: ClassId) -> &mut ClassDef {
        // Only reachable through `define`, which validated the id.
        &mut self.classes[class.index()]
    }
}

/// Chained member definitions for one class, in declaration order.
pub struct ClassDefiner<'r> {
    registry: &'r mut ClassRegistry,
    class: ClassId,
}

impl ClassDefiner<'_> {
    /// Add a constructor
    pub fn constructor(self, visibility: Visibility, params: &[ValueType]) -> Self {
        let class = self.class;
        let def = self.registry.def_mut(class);
        let slot = def.constructors.len();
        def.constructors.push(Callable {
            kind: CallableKind::Constructor,
            declaring_class: class,
            name: CONSTRUCTOR_NAME.to_string(),
            parameter_types: params.to_vec(),
            visibility,
            slot,
        });
        self
    }

    /// Add a method
    pub fn method(self, name: &str, visibility: Visibility, params: &[ValueType]) -> Self {
        let class = self.class;
        let def = self.registry.def_mut(class);
        let slot = def.methods.len();
        def.methods.push(Callable {
            kind: CallableKind::Method,
            declaring_class: class,
            name: name.to_string(),
            parameter_types: params.to_vec(),
            visibility,
            slot,
        });
        self
    }

    /// Add a field
    pub fn field(self, name: &str, visibility: Visibility, field_type: ValueType) -> Self {
        let class = self.class;
        let def = self.registry.def_mut(class);
        let slot = def.fields.len();
        def.fields.push(FieldRef {
            declaring_class: class,
            name: name.to_string(),
            field_type,
            visibility,
            slot,
        });
        self
    }

    /// The class being defined
    pub fn id(&self) -> ClassId {
        self.class
    }
}

impl HostModel for ClassRegistry {
    fn class_name(&self, class: ClassId) -> Option<&str> {
        self.classes.get(class.index()).map(|c| c.name.as_str())
    }

    fn declared_constructors(&self, class: ClassId, arity: usize) -> Vec<Callable> {
        let Ok(def) = self.def(class) else {
            return Vec::new();
        };
        def.constructors
            .iter()
            .filter(|c| c.arity() == arity)
            .cloned()
            .collect()
    }

    fn public_constructors(&self, class: ClassId, arity: usize) -> Vec<Callable> {
        let Ok(def) = self.def(class) else {
            return Vec::new();
        };
        def.constructors
            .iter()
            .filter(|c| c.arity() == arity && c.visibility.is_public())
            .cloned()
            .collect()
    }

    fn declared_methods(&self, class: ClassId, name: &str, arity: usize) -> Vec<Callable> {
        let Ok(def) = self.def(class) else {
            return Vec::new();
        };
        def.methods
            .iter()
            .filter(|m| m.name == name && m.arity() == arity)
            .cloned()
            .collect()
    }

    fn public_methods(&self, class: ClassId, name: &str, arity: usize) -> Vec<Callable> {
        let mut found: Vec<Callable> = Vec::new();
        for ancestor in self.ancestry(class) {
            let def = &self.classes[ancestor.index()];
            for method in &def.methods {
                let wanted = method.name == name && method.arity() == arity;
                if !wanted || !method.visibility.is_public() {
                    continue;
                }
                // Overridden further down the chain
                if found.iter().any(|f| f.same_signature(method)) {
                    continue;
                }
                found.push(method.clone());
            }
        }
        found
    }

    fn declared_field(&self, class: ClassId, name: &str) -> Option<FieldRef> {
        self.def(class)
            .ok()?
            .fields
            .iter()
            .find(|f| f.name == name)
            .cloned()
    }

    fn public_field(&self, class: ClassId, name: &str) -> Option<FieldRef> {
        self.ancestry(class).find_map(|ancestor| {
            self.classes[ancestor.index()]
                .fields
                .iter()
                .find(|f| f.name == name && f.visibility.is_public())
                .cloned()
        })
    }
}

// ============================================================================
// ObjectTable
// ============================================================================

/// Live objects by raw reference. Reference `0` is always null.
#[derive(Debug, Clone)]
pub struct ObjectTable {
    objects: FxHashMap<u32, ObjectHandle>,
    next_reference: u32,
}

impl Default for ObjectTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            objects: FxHashMap::default(),
            next_reference: 1,
        }
    }

    /// Register a new object of `class` and return its handle.
    ///
    /// References wrap around after `u32::MAX`, skipping 0 and any
    /// reference still held by a live object.
    pub fn insert(&mut self, class: ClassId) -> BridgeResult<ObjectHandle> {
        if self.objects.len() >= u32::MAX as usize {
            return Err(BridgeError::ReferencesExhausted);
        }
        let mut reference = self.next_reference;
        while reference == 0 || self.objects.contains_key(&reference) {
            reference = reference.wrapping_add(1);
        }
        self.next_reference = reference.wrapping_add(1);
        let handle = ObjectHandle::new(reference, class);
        self.objects.insert(reference, handle);
        Ok(handle)
    }

    /// Drop an object; later reads of its reference decode as null
    pub fn remove(&mut self, reference: u32) -> Option<ObjectHandle> {
        self.objects.remove(&reference)
    }

    /// Number of live objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if no object is live
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ReferenceTable for ObjectTable {
    fn resolve(&self, reference: u32) -> Option<ObjectHandle> {
        if reference == 0 {
            return None;
        }
        self.objects.get(&reference).copied()
    }
}
