// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::ops::{Index, IndexMut};

use crate::{
    ecmascript::execution::Agent,
    heap::indexes::StringIndex,
};

/// ### [6.1.4 The String Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-string-type)
///
/// A heap-allocated string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapString(pub(crate) StringIndex);

impl HeapString {
    pub fn as_str(self, agent: &Agent) -> &str {
        agent[self].as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringHeapData {
    data: Box<str>,
}

impl StringHeapData {
    pub fn from_str(data: &str) -> Self {
        Self { data: data.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }
}

impl Index<HeapString> for Agent {
    type Output = StringHeapData;

    fn index(&self, index: HeapString) -> &Self::Output {
        self.heap
            .strings
            .get(index.0.into_index())
            .expect("HeapString out of bounds")
            .as_ref()
            .expect("HeapString slot empty")
    }
}

impl IndexMut<HeapString> for Agent {
    fn index_mut(&mut self, index: HeapString) -> &mut Self::Output {
        self.heap
            .strings
            .get_mut(index.0.into_index())
            .expect("HeapString out of bounds")
            .as_mut()
            .expect("HeapString slot empty")
    }
}
