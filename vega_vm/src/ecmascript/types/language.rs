// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod object;
mod string;
mod symbol;
mod value;

pub use object::{Object, ObjectHeapData, PropertyDescriptor, PropertyKey};
pub use string::{HeapString, StringHeapData};
pub use symbol::{Symbol, SymbolHeapData};
pub use value::Value;
