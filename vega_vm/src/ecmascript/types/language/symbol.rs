// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::ops::{Index, IndexMut};

use crate::{
    ecmascript::execution::Agent,
    heap::indexes::SymbolIndex,
};

use super::HeapString;

/// ### [6.1.5 The Symbol Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-symbol-type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(pub(crate) SymbolIndex);

impl Symbol {
    /// Render the symbol the way a developer console would, without calling
    /// into user code.
    pub fn to_display_string(self, agent: &Agent) -> String {
        match agent[self].descriptor {
            Some(descriptor) => format!("Symbol({})", descriptor.as_str(agent)),
            None => "Symbol()".to_string(),
        }
    }
}

/// ### [\[\[Description\]\]](https://tc39.es/ecma262/#sec-properties-of-symbol-instances)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolHeapData {
    pub(crate) descriptor: Option<HeapString>,
}

impl SymbolHeapData {
    pub fn new(descriptor: Option<HeapString>) -> Self {
        Self { descriptor }
    }
}

impl Index<Symbol> for Agent {
    type Output = SymbolHeapData;

    fn index(&self, index: Symbol) -> &Self::Output {
        self.heap
            .symbols
            .get(index.0.into_index())
            .expect("Symbol out of bounds")
            .as_ref()
            .expect("Symbol slot empty")
    }
}

impl IndexMut<Symbol> for Agent {
    fn index_mut(&mut self, index: Symbol) -> &mut Self::Output {
        self.heap
            .symbols
            .get_mut(index.0.into_index())
            .expect("Symbol out of bounds")
            .as_mut()
            .expect("Symbol slot empty")
    }
}
