// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)

mod property_key;

use core::ops::{Index, IndexMut};

use ahash::AHashMap;

use crate::{
    ecmascript::execution::Agent,
    heap::indexes::ObjectIndex,
};

use super::Value;

pub use property_key::PropertyKey;

/// A handle to an ordinary object's heap data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Object(pub(crate) ObjectIndex);

impl Object {
    /// ### [10.1.8 \[\[Get\]\] ( P )](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-get-p-receiver)
    ///
    /// Returns the value of the named own property, or None if the object
    /// has no such property.
    pub fn internal_get(self, agent: &Agent, property_key: &PropertyKey) -> Option<Value> {
        agent[self]
            .property_storage
            .get(property_key)
            .map(|descriptor| descriptor.value)
    }

    /// ### [10.1.9 \[\[Set\]\] ( P, V )](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-set-p-v-receiver)
    ///
    /// Writes the named property, creating it if necessary. Returns false if
    /// the write was rejected because an existing property is non-writable.
    pub fn internal_set(self, agent: &mut Agent, property_key: PropertyKey, value: Value) -> bool {
        match agent[self].property_storage.get_mut(&property_key) {
            Some(descriptor) => {
                if !descriptor.writable {
                    return false;
                }
                descriptor.value = value;
                true
            }
            None => {
                agent[self]
                    .property_storage
                    .insert(property_key, PropertyDescriptor::new(value));
                true
            }
        }
    }

    /// ### [10.1.10 \[\[Delete\]\] ( P )](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-delete-p)
    ///
    /// Removes the named property. Returns false if the property exists and
    /// is non-configurable; deleting an absent property succeeds.
    pub fn internal_delete(self, agent: &mut Agent, property_key: &PropertyKey) -> bool {
        if let Some(descriptor) = agent[self].property_storage.get(property_key) {
            if !descriptor.configurable {
                return false;
            }
            agent[self].property_storage.remove(property_key);
        }
        true
    }

    /// Install a property with explicit attributes. This is the seam used
    /// to set up non-writable or non-configurable properties.
    pub fn internal_define_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        descriptor: PropertyDescriptor,
    ) {
        agent[self].property_storage.insert(property_key, descriptor);
    }
}

/// ### [6.2.6 The Property Descriptor Specification Type](https://tc39.es/ecma262/#sec-property-descriptor-specification-type)
///
/// Only data properties exist in this object model; accessor pairs are not
/// represented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyDescriptor {
    /// ### \[\[Value\]\]
    pub value: Value,
    /// ### \[\[Writable\]\]
    pub writable: bool,
    /// ### \[\[Configurable\]\]
    pub configurable: bool,
}

impl PropertyDescriptor {
    /// Descriptor for a plain assignment-created property.
    pub fn new(value: Value) -> Self {
        Self {
            value,
            writable: true,
            configurable: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ObjectHeapData {
    pub(crate) property_storage: AHashMap<PropertyKey, PropertyDescriptor>,
}

impl ObjectHeapData {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Index<Object> for Agent {
    type Output = ObjectHeapData;

    fn index(&self, index: Object) -> &Self::Output {
        self.heap
            .objects
            .get(index.0.into_index())
            .expect("Object out of bounds")
            .as_ref()
            .expect("Object slot empty")
    }
}

impl IndexMut<Object> for Agent {
    fn index_mut(&mut self, index: Object) -> &mut Self::Output {
        self.heap
            .objects
            .get_mut(index.0.into_index())
            .expect("Object out of bounds")
            .as_mut()
            .expect("Object slot empty")
    }
}
