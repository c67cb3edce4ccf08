// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{execution::Agent, types::Symbol};

/// ### [Property key](https://tc39.es/ecma262/#sec-object-type)
///
/// A property key is either a String or a Symbol. Integer-indexed keys are
/// stored as strings in this simplified property model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    String(Box<str>),
    Symbol(Symbol),
}

impl PropertyKey {
    pub fn is_symbol(&self) -> bool {
        matches!(self, PropertyKey::Symbol(_))
    }

    /// The key as it should appear in error messages and diagnostics.
    pub fn to_display_string(&self, agent: &Agent) -> String {
        match self {
            PropertyKey::String(data) => data.to_string(),
            PropertyKey::Symbol(symbol) => symbol.to_display_string(agent),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(value: &str) -> Self {
        PropertyKey::String(value.into())
    }
}

impl From<Symbol> for PropertyKey {
    fn from(value: Symbol) -> Self {
        PropertyKey::Symbol(value)
    }
}
