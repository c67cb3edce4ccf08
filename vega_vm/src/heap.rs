// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod indexes;

use crate::ecmascript::{
    execution::Environments,
    types::{
        HeapString, Object, ObjectHeapData, StringHeapData, Symbol, SymbolHeapData,
    },
};

use indexes::{ObjectIndex, StringIndex, SymbolIndex};

/// Arena storage for everything that outlives a single evaluation step.
///
/// Slots are `Option`s so that future garbage collection can vacate them
/// without shifting the indexes handed out to live values.
#[derive(Debug, Default)]
pub struct Heap {
    pub(crate) strings: Vec<Option<StringHeapData>>,
    pub(crate) symbols: Vec<Option<SymbolHeapData>>,
    pub(crate) objects: Vec<Option<ObjectHeapData>>,
    pub(crate) environments: Environments,
}

impl Heap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_string(&mut self, data: &str) -> HeapString {
        self.strings.push(Some(StringHeapData::from_str(data)));
        HeapString(StringIndex::last(&self.strings))
    }

    pub fn create_symbol(&mut self, descriptor: Option<HeapString>) -> Symbol {
        self.symbols.push(Some(SymbolHeapData::new(descriptor)));
        Symbol(SymbolIndex::last(&self.symbols))
    }

    pub fn create_object(&mut self) -> Object {
        self.objects.push(Some(ObjectHeapData::new()));
        Object(ObjectIndex::last(&self.objects))
    }
}
