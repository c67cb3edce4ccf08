// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ahash::AHashMap;

use super::{Binding, OuterEnv};

/// ### [9.1.1.1 Declarative Environment Records](https://tc39.es/ecma262/#sec-declarative-environment-records)
///
/// A Declarative Environment Record is used to define the effect of
/// ECMAScript language syntactic elements such as FunctionDeclarations,
/// VariableDeclarations, and Catch clauses that directly associate
/// identifier bindings with ECMAScript language values.
#[derive(Debug, Clone)]
pub struct DeclarativeEnvironment {
    /// ### \[\[OuterEnv\]\]
    pub(super) outer_env: OuterEnv,

    /// The environment's bindings.
    bindings: AHashMap<Box<str>, Binding>,
}

impl DeclarativeEnvironment {
    pub(crate) fn new(outer_env: OuterEnv) -> Self {
        Self {
            outer_env,
            bindings: AHashMap::default(),
        }
    }

    pub(super) fn has_binding(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub(super) fn get_binding(&self, name: &str) -> Option<Binding> {
        self.bindings.get(name).copied()
    }

    /// Insert or update a binding. Declarative bindings are map entries
    /// with no writability attribute, so the write always succeeds.
    pub(super) fn put_binding(&mut self, name: &str, binding: Binding) -> bool {
        self.bindings.insert(name.into(), binding);
        true
    }

    pub(super) fn delete_binding(&mut self, name: &str) -> bool {
        self.bindings.remove(name).is_some()
    }
}
