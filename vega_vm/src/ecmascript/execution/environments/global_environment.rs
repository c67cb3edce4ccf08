// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ahash::AHashMap;

use super::Binding;

/// ### [9.1.1.4 Global Environment Records](https://tc39.es/ecma262/#sec-global-environment-records)
///
/// The outermost scope. Besides ordinary declarations it receives the
/// bindings created implicitly by sloppy-mode assignment to undeclared
/// names. Its \[\[OuterEnv\]\] is always null.
#[derive(Debug, Clone, Default)]
pub struct GlobalEnvironment {
    bindings: AHashMap<Box<str>, Binding>,
}

impl GlobalEnvironment {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(super) fn has_binding(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub(super) fn get_binding(&self, name: &str) -> Option<Binding> {
        self.bindings.get(name).copied()
    }

    pub(super) fn put_binding(&mut self, name: &str, binding: Binding) -> bool {
        self.bindings.insert(name.into(), binding);
        true
    }

    pub(super) fn delete_binding(&mut self, name: &str) -> bool {
        self.bindings.remove(name).is_some()
    }
}
