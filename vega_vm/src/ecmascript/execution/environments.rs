// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [9.1 Environment Records](https://tc39.es/ecma262/#sec-environment-records)
//!
//! Environment Record is a specification type used to define the association
//! of Identifiers to specific variables and functions, based upon the
//! lexical nesting structure of ECMAScript code. Every Environment Record
//! has an \[\[OuterEnv\]\] field, which is either null or a reference to an
//! outer Environment Record, modelling the logical nesting of environments.

use core::{fmt::Debug, marker::PhantomData, num::NonZeroU32};

mod declarative_environment;
mod global_environment;

pub(crate) use declarative_environment::DeclarativeEnvironment;
pub(crate) use global_environment::GlobalEnvironment;

use crate::ecmascript::types::{PropertyKey, Reference, Value};

use super::{Agent, JsResult};

/// ### [\[\[OuterEnv\]\]](https://tc39.es/ecma262/#sec-environment-records)
pub(crate) type OuterEnv = Option<EnvironmentIndex>;

/// The declaration form a binding was introduced by. Assignment through a
/// reference must not overwrite `Const` bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Var,
    Let,
    Const,
}

/// A single name → value association held by an environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binding {
    pub value: Value,
    pub kind: DeclarationKind,
}

macro_rules! create_environment_index {
    ($record: ident, $index: ident, $entry: ident) => {
        /// An index used to access an environment from [`Environments`].
        /// Internally, we store the index in a [`NonZeroU32`] with the index
        /// plus one. This allows us to not use an empty value in storage for
        /// the zero index while still saving room for a [`None`] value when
        /// stored in an [`Option`].
        #[derive(Clone, Copy, PartialEq, Eq)]
        pub struct $index(NonZeroU32, PhantomData<$record>);

        impl Debug for $index {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, concat!(stringify!($index), "({:?})"), self.0.get() - 1)
            }
        }

        impl $index {
            /// Creates a new index from a u32.
            ///
            /// ## Panics
            /// - If the value is equal to 0.
            pub(crate) const fn from_u32(value: u32) -> Self {
                assert!(value != 0);
                // SAFETY: Number is not 0 and will not overflow to zero.
                // This check is done manually to allow const context.
                Self(unsafe { NonZeroU32::new_unchecked(value) }, PhantomData)
            }

            pub(crate) const fn into_index(self) -> usize {
                self.0.get() as usize - 1
            }

            pub(crate) fn last(vec: &[Option<$record>]) -> Self {
                Self::from_u32(vec.len() as u32)
            }
        }

        impl core::ops::Index<$index> for Agent {
            type Output = $record;

            fn index(&self, index: $index) -> &Self::Output {
                self.heap
                    .environments
                    .$entry
                    .get(index.into_index())
                    .expect("Environment out of bounds")
                    .as_ref()
                    .expect("Environment slot empty")
            }
        }

        impl core::ops::IndexMut<$index> for Agent {
            fn index_mut(&mut self, index: $index) -> &mut Self::Output {
                self.heap
                    .environments
                    .$entry
                    .get_mut(index.into_index())
                    .expect("Environment out of bounds")
                    .as_mut()
                    .expect("Environment slot empty")
            }
        }
    };
}

create_environment_index!(
    DeclarativeEnvironment,
    DeclarativeEnvironmentIndex,
    declarative
);
create_environment_index!(GlobalEnvironment, GlobalEnvironmentIndex, global);

/// Arena storage of all environments owned by the agent's heap. Environments
/// are only ever handed out as indexes; a reference to one never owns it.
#[derive(Debug, Default)]
pub struct Environments {
    declarative: Vec<Option<DeclarativeEnvironment>>,
    global: Vec<Option<GlobalEnvironment>>,
}

impl Environments {
    pub(crate) fn push_declarative_environment(
        &mut self,
        record: DeclarativeEnvironment,
    ) -> DeclarativeEnvironmentIndex {
        self.declarative.push(Some(record));
        DeclarativeEnvironmentIndex::last(&self.declarative)
    }

    pub(crate) fn push_global_environment(
        &mut self,
        record: GlobalEnvironment,
    ) -> GlobalEnvironmentIndex {
        self.global.push(Some(record));
        GlobalEnvironmentIndex::last(&self.global)
    }
}

/// ### [9.1.1 The Environment Record Type Hierarchy](https://tc39.es/ecma262/#sec-the-environment-record-type-hierarchy)
///
/// The environment kinds this engine models form a closed sum. References
/// hold one of these indexes as their base when they denote a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentIndex {
    Declarative(DeclarativeEnvironmentIndex),
    Global(GlobalEnvironmentIndex),
}

impl EnvironmentIndex {
    pub fn class_name(self) -> &'static str {
        match self {
            EnvironmentIndex::Declarative(_) => "DeclarativeEnvironment",
            EnvironmentIndex::Global(_) => "GlobalEnvironment",
        }
    }

    pub fn get_outer_env(self, agent: &Agent) -> OuterEnv {
        match self {
            EnvironmentIndex::Declarative(index) => agent[index].outer_env,
            EnvironmentIndex::Global(_) => None,
        }
    }

    /// ### [HasBinding(N)](https://tc39.es/ecma262/#table-abstract-methods-of-environment-records)
    pub fn has_binding(self, agent: &Agent, name: &str) -> bool {
        match self {
            EnvironmentIndex::Declarative(index) => agent[index].has_binding(name),
            EnvironmentIndex::Global(index) => agent[index].has_binding(name),
        }
    }

    /// Look up the binding for `name` in this environment. Resolution of
    /// which environment in a chain owns a name happens before a reference
    /// is built; by the time this is called the environment is already the
    /// owner.
    pub fn get_binding(self, agent: &Agent, name: &str) -> Option<Binding> {
        match self {
            EnvironmentIndex::Declarative(index) => agent[index].get_binding(name),
            EnvironmentIndex::Global(index) => agent[index].get_binding(name),
        }
    }

    /// Insert or update the binding for `name`. Returns false if the store
    /// refused the write because the binding is not writable. Map-backed
    /// stores never refuse; object-backed environments in the full engine
    /// can, and can also fail outright, which is why the result is a
    /// [`JsResult`].
    pub fn put_binding(self, agent: &mut Agent, name: &str, binding: Binding) -> JsResult<bool> {
        Ok(match self {
            EnvironmentIndex::Declarative(index) => agent[index].put_binding(name, binding),
            EnvironmentIndex::Global(index) => agent[index].put_binding(name, binding),
        })
    }

    /// Remove the binding for `name`, returning whether a binding was
    /// removed. Bindings in this model carry no deletability flag; removal
    /// is always permitted.
    pub fn delete_binding(self, agent: &mut Agent, name: &str) -> bool {
        match self {
            EnvironmentIndex::Declarative(index) => agent[index].delete_binding(name),
            EnvironmentIndex::Global(index) => agent[index].delete_binding(name),
        }
    }
}

/// ### [9.1.2.2 NewDeclarativeEnvironment ( E )](https://tc39.es/ecma262/#sec-newdeclarativeenvironment)
pub fn new_declarative_environment(
    agent: &mut Agent,
    outer_env: OuterEnv,
) -> DeclarativeEnvironmentIndex {
    agent
        .heap
        .environments
        .push_declarative_environment(DeclarativeEnvironment::new(outer_env))
}

/// ### [9.1.2.1 GetIdentifierReference ( env, name, strict )](https://tc39.es/ecma262/#sec-getidentifierreference)
///
/// Walks the environment chain looking for the environment that binds
/// `name` and builds the reference the evaluator will consume. When no
/// environment binds the name the result is an unresolvable reference
/// carrying the name.
pub fn get_identifier_reference(
    agent: &Agent,
    env: OuterEnv,
    name: &str,
    strict: bool,
) -> Reference {
    // 1. If env is null, then
    let Some(env) = env else {
        // a. Return the Reference Record {
        //      [[Base]]: UNRESOLVABLE, [[ReferencedName]]: name,
        //      [[Strict]]: strict, [[ThisValue]]: EMPTY
        //    }.
        return Reference::new_unresolvable_reference(Some(PropertyKey::from(name)), strict);
    };
    // 2. Let exists be ? env.HasBinding(name).
    if env.has_binding(agent, name) {
        // 3. If exists is true, then
        // a. Return the Reference Record {
        //      [[Base]]: env, [[ReferencedName]]: name,
        //      [[Strict]]: strict, [[ThisValue]]: EMPTY
        //    }.
        Reference::new_variable_reference(env, PropertyKey::from(name), strict)
    } else {
        // 4. Else,
        // a. Let outer be env.[[OuterEnv]].
        // b. Return ? GetIdentifierReference(outer, name, strict).
        get_identifier_reference(agent, env.get_outer_env(agent), name, strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::types::{Base, is_unresolvable_reference};

    #[test]
    fn binding_round_trip() {
        let mut agent = Agent::new();
        let env = EnvironmentIndex::Declarative(new_declarative_environment(&mut agent, None));
        assert!(!env.has_binding(&agent, "x"));
        let binding = Binding {
            value: Value::Number(1.0),
            kind: DeclarationKind::Let,
        };
        assert_eq!(env.put_binding(&mut agent, "x", binding), Ok(true));
        assert_eq!(env.get_binding(&agent, "x"), Some(binding));
        assert!(env.delete_binding(&mut agent, "x"));
        assert!(!env.delete_binding(&mut agent, "x"));
    }

    #[test]
    fn identifier_resolution_walks_the_chain() {
        let mut agent = Agent::new();
        let outer = EnvironmentIndex::Declarative(new_declarative_environment(&mut agent, None));
        outer
            .put_binding(
                &mut agent,
                "x",
                Binding {
                    value: Value::Number(1.0),
                    kind: DeclarationKind::Var,
                },
            )
            .unwrap();
        let inner =
            EnvironmentIndex::Declarative(new_declarative_environment(&mut agent, Some(outer)));

        let reference = get_identifier_reference(&agent, Some(inner), "x", false);
        assert_eq!(*reference.base(), Base::Environment(outer));

        let missing = get_identifier_reference(&agent, Some(inner), "y", false);
        assert!(is_unresolvable_reference(&missing));
    }

    #[test]
    fn global_environment_is_reachable_from_the_agent() {
        let mut agent = Agent::new();
        let global = EnvironmentIndex::Global(agent.global_env());
        assert_eq!(global.class_name(), "GlobalEnvironment");
        assert_eq!(global.get_outer_env(&agent), None);
        global
            .put_binding(
                &mut agent,
                "answer",
                Binding {
                    value: Value::Number(42.0),
                    kind: DeclarationKind::Var,
                },
            )
            .unwrap();
        assert!(global.has_binding(&agent, "answer"));
    }
}
