// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod language;
pub mod spec;

pub use language::{
    HeapString, Object, ObjectHeapData, PropertyDescriptor, PropertyKey, StringHeapData, Symbol,
    SymbolHeapData, Value,
};
pub use spec::{
    Base, Reference, delete_reference, get_this_value, get_value, is_property_reference,
    is_super_reference, is_unresolvable_reference, put_value,
};
