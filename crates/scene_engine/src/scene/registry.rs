//! Id-keyed registries for primitives and groups

use std::collections::HashMap;

use crate::primitive::Primitive;

/// Primitives keyed by object id
///
/// Iteration follows first registration. Replacing an id keeps its slot.
#[derive(Debug, Clone, Default)]
pub struct ObjectRegistry {
    objects: HashMap<String, Primitive>,
    order: Vec<String>,
}

impl ObjectRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a primitive, returning the one it replaced
    pub fn insert(&mut self, id: impl Into<String>, primitive: Primitive) -> Option<Primitive> {
        let id = id.into();
        if !self.objects.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.objects.insert(id, primitive)
    }

    /// Look up a primitive
    pub fn get(&self, id: &str) -> Option<&Primitive> {
        self.objects.get(id)
    }

    /// Look up a primitive mutably
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Primitive> {
        self.objects.get_mut(id)
    }

    /// Whether `id` is registered
    pub fn contains(&self, id: &str) -> bool {
        self.objects.contains_key(id)
    }

    /// All entries, in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Primitive)> {
        self.order
            .iter()
            .filter_map(|id| self.objects.get_key_value(id))
            .map(|(id, primitive)| (id.as_str(), primitive))
    }

    /// All primitives mutably, in no particular order
    pub fn primitives_mut(&mut self) -> impl Iterator<Item = &mut Primitive> {
        self.objects.values_mut()
    }

    /// Entries whose id starts with `prefix`
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a Primitive)> {
        self.iter().filter(move |(id, _)| id.starts_with(prefix))
    }

    /// Number of primitives
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// Ordered member lists keyed by group id
///
/// Members are not checked against the object registry.
#[derive(Debug, Clone, Default)]
pub struct GroupRegistry {
    groups: HashMap<String, Vec<String>>,
}

impl GroupRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a group, replacing any previous one with the same id
    pub fn insert(&mut self, id: impl Into<String>, members: Vec<String>) {
        self.groups.insert(id.into(), members);
    }

    /// Members of a group, if it exists
    pub fn get(&self, id: &str) -> Option<&[String]> {
        self.groups.get(id).map(Vec::as_slice)
    }

    /// All groups, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups.iter().map(|(id, members)| (id.as_str(), members.as_slice()))
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
