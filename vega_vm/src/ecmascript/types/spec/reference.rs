// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [6.2.5 The Reference Record Specification Type](https://tc39.es/ecma262/#sec-reference-record-specification-type)
//!
//! The Reference Record type is used to explain the behaviour of such
//! operators as delete, typeof, the assignment operators, the super keyword
//! and other language features. A Reference Record is a resolved name or
//! property binding; it is not itself a language value.

use crate::ecmascript::{
    abstract_operations::type_conversion::to_object,
    execution::{Agent, Binding, DeclarationKind, EnvironmentIndex, ErrorType, JsError, JsResult},
    types::{PropertyKey, Value},
};

/// ### \[\[Base\]\]
///
/// The value or Environment Record which holds the binding. A \[\[Base\]\]
/// of UNRESOLVABLE indicates that the binding could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Base {
    /// A property binding: the property named \[\[ReferencedName\]\] of this
    /// value.
    Value(Value),
    /// A variable binding: the binding named \[\[ReferencedName\]\] in this
    /// environment.
    Environment(EnvironmentIndex),
    /// The binding could not be resolved.
    Unresolvable,
}

/// ### [6.2.5 The Reference Record Specification Type](https://tc39.es/ecma262/#sec-reference-record-specification-type)
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    /// ### \[\[Base\]\]
    base: Base,

    /// ### \[\[ReferencedName\]\]
    ///
    /// The name of the binding. `None` corresponds to the spec's "invalid"
    /// name and only ever appears on unresolvable references produced
    /// internally, never on references built from source-level identifiers.
    referenced_name: Option<PropertyKey>,

    /// ### \[\[Strict\]\]
    ///
    /// true if the Reference Record originated in strict mode code, false
    /// otherwise.
    strict: bool,

    /// ### \[\[ThisValue\]\]
    ///
    /// If not EMPTY, the Reference Record represents a property binding that
    /// was expressed using the super keyword; this field holds the this value
    /// of the environment the reference was created in.
    this_value: Option<Value>,
}

impl Reference {
    pub fn new_unresolvable_reference(
        referenced_name: Option<PropertyKey>,
        strict: bool,
    ) -> Self {
        Self {
            base: Base::Unresolvable,
            referenced_name,
            strict,
            this_value: None,
        }
    }

    pub fn new_variable_reference(
        env: EnvironmentIndex,
        referenced_name: PropertyKey,
        strict: bool,
    ) -> Self {
        Self {
            base: Base::Environment(env),
            referenced_name: Some(referenced_name),
            strict,
            this_value: None,
        }
    }

    pub fn new_property_reference(base: Value, referenced_name: PropertyKey, strict: bool) -> Self {
        Self {
            base: Base::Value(base),
            referenced_name: Some(referenced_name),
            strict,
            this_value: None,
        }
    }

    /// ### [13.3.7.3 MakeSuperPropertyReference ( actualThis, propertyKey, strict )](https://tc39.es/ecma262/#sec-makesuperpropertyreference)
    pub fn new_super_reference(
        base: Value,
        referenced_name: PropertyKey,
        this_value: Value,
        strict: bool,
    ) -> Self {
        Self {
            base: Base::Value(base),
            referenced_name: Some(referenced_name),
            strict,
            this_value: Some(this_value),
        }
    }

    pub(crate) fn base(&self) -> &Base {
        &self.base
    }

    pub fn strict(&self) -> bool {
        self.strict
    }

    fn referenced_name(&self) -> &PropertyKey {
        let Some(referenced_name) = &self.referenced_name else {
            unreachable!("Reference with an invalid name")
        };
        referenced_name
    }

    /// Environment bindings are keyed by string; symbols only ever name
    /// properties.
    fn referenced_name_str(&self) -> &str {
        let PropertyKey::String(name) = self.referenced_name() else {
            unreachable!("environment binding named by a symbol")
        };
        name
    }

    /// Render the record for diagnostics. Environment bases print their
    /// record kind, value bases print without running user code.
    pub fn describe(&self, agent: &Agent) -> String {
        let base = match self.base {
            Base::Value(value) => value.to_string_without_side_effects(agent),
            Base::Environment(env) => env.class_name().to_string(),
            Base::Unresolvable => "Unresolvable".to_string(),
        };
        let referenced_name = match &self.referenced_name {
            Some(name) => name.to_display_string(agent),
            None => "<invalid>".to_string(),
        };
        let this_value = match self.this_value {
            Some(value) => value.to_string_without_side_effects(agent),
            None => "<empty>".to_string(),
        };
        format!(
            "Reference {{ Base={base}, ReferencedName={referenced_name}, Strict={}, ThisValue={this_value} }}",
            self.strict
        )
    }
}

/// ### [6.2.5.1 IsPropertyReference ( V )](https://tc39.es/ecma262/#sec-ispropertyreference)
pub fn is_property_reference(reference: &Reference) -> bool {
    matches!(reference.base, Base::Value(_))
}

/// ### [6.2.5.2 IsUnresolvableReference ( V )](https://tc39.es/ecma262/#sec-isunresolvablereference)
pub fn is_unresolvable_reference(reference: &Reference) -> bool {
    matches!(reference.base, Base::Unresolvable)
}

/// ### [6.2.5.3 IsSuperReference ( V )](https://tc39.es/ecma262/#sec-issuperreference)
pub fn is_super_reference(reference: &Reference) -> bool {
    reference.this_value.is_some()
}

/// ### [6.2.5.7 GetThisValue ( V )](https://tc39.es/ecma262/#sec-getthisvalue)
pub fn get_this_value(reference: &Reference) -> Value {
    // 1. Assert: IsPropertyReference(V) is true.
    debug_assert!(is_property_reference(reference));
    // 2. If IsSuperReference(V) is true, return V.[[ThisValue]];
    //    otherwise return V.[[Base]].
    reference.this_value.unwrap_or_else(|| match reference.base {
        Base::Value(value) => value,
        _ => unreachable!(),
    })
}

fn throw_reference_error(agent: &mut Agent, reference: &Reference) -> JsError {
    match &reference.referenced_name {
        Some(name) => {
            let name = name.to_display_string(agent);
            agent.throw_exception(ErrorType::UnknownIdentifier(name.into()))
        }
        None => agent.throw_exception(ErrorType::ReferenceUnresolvable),
    }
}

/// ### [6.2.5.5 GetValue ( V )](https://tc39.es/ecma262/#sec-getvalue)
///
/// Reads the value the reference denotes. `throw_if_undefined` is false only
/// on the `typeof` path, where an environment binding that does not exist
/// yields undefined instead of a ReferenceError.
pub fn get_value(
    agent: &mut Agent,
    reference: &Reference,
    throw_if_undefined: bool,
) -> JsResult<Value> {
    match reference.base {
        // 2. If IsUnresolvableReference(V) is true, throw a ReferenceError
        //    exception.
        Base::Unresolvable => Err(throw_reference_error(agent, reference)),
        // 3. If IsPropertyReference(V) is true, then
        Base::Value(base) => {
            // a. Let baseObj be ? ToObject(V.[[Base]]).
            let base_object = to_object(agent, base)?;
            // b. Return ? baseObj.[[Get]](V.[[ReferencedName]],
            //    GetThisValue(V)).
            Ok(base_object
                .internal_get(agent, reference.referenced_name())
                .unwrap_or(Value::Undefined))
        }
        // 4. Else,
        Base::Environment(env) => {
            let name = reference.referenced_name_str();
            // a. Return ? base.GetBindingValue(V.[[ReferencedName]],
            //    V.[[Strict]]).
            match env.get_binding(agent, name) {
                Some(binding) => Ok(binding.value),
                None if !throw_if_undefined => Ok(Value::Undefined),
                None => Err(throw_reference_error(agent, reference)),
            }
        }
    }
}

/// ### [6.2.5.6 PutValue ( V, W )](https://tc39.es/ecma262/#sec-putvalue)
pub fn put_value(agent: &mut Agent, reference: &Reference, value: Value) -> JsResult<()> {
    match reference.base {
        // 3. If IsUnresolvableReference(V) is true, then
        Base::Unresolvable => {
            // a. If V.[[Strict]] is true, throw a ReferenceError exception.
            if reference.strict {
                return Err(throw_reference_error(agent, reference));
            }
            // b. Let globalObj be GetGlobalObject().
            // c. Perform ? Set(globalObj, V.[[ReferencedName]], W, false).
            let global = EnvironmentIndex::Global(agent.global_env());
            let name = reference.referenced_name_str();
            let kind = global
                .get_binding(agent, name)
                .map_or(DeclarationKind::Var, |binding| binding.kind);
            global.put_binding(agent, name, Binding { value, kind })?;
            // d. Return UNUSED.
            Ok(())
        }
        // 4. If IsPropertyReference(V) is true, then
        Base::Value(base) => {
            if !base.is_object() && reference.strict {
                let property = reference.referenced_name().to_display_string(agent);
                let error_type = if base.is_nullish() {
                    ErrorType::ReferenceNullishSetProperty {
                        property: property.into(),
                        base: base.to_string_without_side_effects(agent).into(),
                    }
                } else {
                    ErrorType::ReferencePrimitiveSetProperty {
                        property: property.into(),
                        base_type: base.type_of(),
                        base: base.to_string_without_side_effects(agent).into(),
                    }
                };
                return Err(agent.throw_exception(error_type));
            }
            // a. Let baseObj be ? ToObject(V.[[Base]]).
            let base_object = to_object(agent, base)?;
            // b. Let succeeded be ? baseObj.[[Set]](V.[[ReferencedName]], W,
            //    GetThisValue(V)).
            let succeeded =
                base_object.internal_set(agent, reference.referenced_name().clone(), value);
            // c. If succeeded is false and V.[[Strict]] is true, throw a
            //    TypeError exception.
            if !succeeded && reference.strict {
                let property = reference.referenced_name().to_display_string(agent);
                let base = base.to_string_without_side_effects(agent);
                return Err(agent.throw_exception(ErrorType::ReferenceNullishSetProperty {
                    property: property.into(),
                    base: base.into(),
                }));
            }
            // d. Return UNUSED.
            Ok(())
        }
        // 5. Else,
        Base::Environment(env) => {
            let name = reference.referenced_name_str();
            // a. Return ? base.SetMutableBinding(V.[[ReferencedName]], W,
            //    V.[[Strict]]).
            // The declaration kind is preserved across the write; a const
            // binding refuses it before the store is touched.
            let kind = env
                .get_binding(agent, name)
                .map_or(DeclarationKind::Var, |binding| binding.kind);
            if kind == DeclarationKind::Const {
                return Err(agent.throw_exception(ErrorType::InvalidAssignToConst));
            }
            let succeeded = env.put_binding(agent, name, Binding { value, kind })?;
            if !succeeded && reference.strict {
                return Err(
                    agent.throw_exception(ErrorType::DescWriteNonWritable(name.into()))
                );
            }
            Ok(())
        }
    }
}

/// ### [13.5.1.2 Runtime Semantics: Evaluation](https://tc39.es/ecma262/#sec-delete-operator-runtime-semantics-evaluation)
///
/// The delete operator applied to a reference. Returns whether the binding
/// or property was removed (or never existed).
pub fn delete_reference(agent: &mut Agent, reference: &Reference) -> JsResult<bool> {
    match reference.base {
        // 3. If IsUnresolvableReference(ref) is true, then
        Base::Unresolvable => {
            // a. Assert: ref.[[Strict]] is false.
            debug_assert!(!reference.strict);
            // b. Return true.
            Ok(true)
        }
        // 4. If IsPropertyReference(ref) is true, then
        Base::Value(base) => {
            // a. If IsSuperReference(ref) is true, throw a ReferenceError
            //    exception.
            if is_super_reference(reference) {
                return Err(agent.throw_exception(ErrorType::UnsupportedDeleteSuperProperty));
            }
            // b. Let baseObj be ? ToObject(ref.[[Base]]).
            let base_object = to_object(agent, base)?;
            // c. Let deleteStatus be ? baseObj.[[Delete]](
            //    ref.[[ReferencedName]]).
            let delete_status = base_object.internal_delete(agent, reference.referenced_name());
            // d. If deleteStatus is false and ref.[[Strict]] is true, throw
            //    a TypeError exception.
            if !delete_status && reference.strict {
                let property = reference.referenced_name().to_display_string(agent);
                let base = base.to_string_without_side_effects(agent);
                return Err(agent.throw_exception(
                    ErrorType::ReferenceNullishDeleteProperty {
                        property: property.into(),
                        base: base.into(),
                    },
                ));
            }
            // e. Return deleteStatus.
            Ok(delete_status)
        }
        // 5. Else,
        Base::Environment(env) => {
            // b. Return ? base.DeleteBinding(ref.[[ReferencedName]]).
            Ok(env.delete_binding(agent, reference.referenced_name_str()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::{
        execution::{ExceptionType, new_declarative_environment},
        types::{Object, PropertyDescriptor},
    };

    fn declarative_env(agent: &mut Agent) -> EnvironmentIndex {
        EnvironmentIndex::Declarative(new_declarative_environment(agent, None))
    }

    fn bind(agent: &mut Agent, env: EnvironmentIndex, name: &str, value: Value, kind: DeclarationKind) {
        env.put_binding(agent, name, Binding { value, kind }).unwrap();
    }

    fn object_with_property(agent: &mut Agent, name: &str, value: Value) -> Object {
        let object = agent.heap.create_object();
        object.internal_set(agent, name.into(), value);
        object
    }

    #[test]
    fn sloppy_write_to_undeclared_name_creates_a_global_var() {
        let mut agent = Agent::new();
        let reference = Reference::new_unresolvable_reference(Some("answer".into()), false);
        put_value(&mut agent, &reference, Value::Number(42.0)).unwrap();

        let global = EnvironmentIndex::Global(agent.global_env());
        let binding = global.get_binding(&agent, "answer").unwrap();
        assert_eq!(binding.value, Value::Number(42.0));
        assert_eq!(binding.kind, DeclarationKind::Var);

        // The name now resolves like any other global.
        let resolved =
            crate::ecmascript::execution::get_identifier_reference(&agent, Some(global), "answer", false);
        assert!(!is_unresolvable_reference(&resolved));
        assert_eq!(
            get_value(&mut agent, &resolved, true).unwrap(),
            Value::Number(42.0)
        );
    }

    #[test]
    fn strict_write_to_undeclared_name_throws_and_binds_nothing() {
        let mut agent = Agent::new();
        let reference = Reference::new_unresolvable_reference(Some("answer".into()), true);
        let error = put_value(&mut agent, &reference, Value::Number(42.0)).unwrap_err();
        assert_eq!(error.exception_type(), ExceptionType::ReferenceError);
        assert_eq!(error.message(), "'answer' is not defined");

        let global = EnvironmentIndex::Global(agent.global_env());
        assert!(!global.has_binding(&agent, "answer"));
    }

    #[test]
    fn strict_read_of_undeclared_name_names_the_identifier() {
        let mut agent = Agent::new();
        let reference = Reference::new_unresolvable_reference(Some("z".into()), true);
        let error = get_value(&mut agent, &reference, true).unwrap_err();
        assert_eq!(error.exception_type(), ExceptionType::ReferenceError);
        assert!(error.message().contains("'z'"));
    }

    #[test]
    fn unresolvable_reference_without_a_name_still_throws() {
        let mut agent = Agent::new();
        let reference = Reference::new_unresolvable_reference(None, false);
        let error = get_value(&mut agent, &reference, true).unwrap_err();
        assert_eq!(error.error_type(), &ErrorType::ReferenceUnresolvable);
    }

    #[test]
    fn const_assignment_throws_in_both_modes_and_keeps_the_value() {
        for strict in [false, true] {
            let mut agent = Agent::new();
            let env = declarative_env(&mut agent);
            bind(&mut agent, env, "c", Value::Number(1.0), DeclarationKind::Const);

            let reference = Reference::new_variable_reference(env, "c".into(), strict);
            let error = put_value(&mut agent, &reference, Value::Number(2.0)).unwrap_err();
            assert_eq!(error.error_type(), &ErrorType::InvalidAssignToConst);
            assert_eq!(error.exception_type(), ExceptionType::TypeError);
            assert_eq!(
                env.get_binding(&agent, "c").unwrap().value,
                Value::Number(1.0)
            );
        }
    }

    #[test]
    fn variable_write_preserves_the_declaration_kind() {
        let mut agent = Agent::new();
        let env = declarative_env(&mut agent);
        bind(&mut agent, env, "x", Value::Number(1.0), DeclarationKind::Let);

        let reference = Reference::new_variable_reference(env, "x".into(), false);
        put_value(&mut agent, &reference, Value::Number(2.0)).unwrap();
        assert_eq!(
            env.get_binding(&agent, "x").unwrap(),
            Binding {
                value: Value::Number(2.0),
                kind: DeclarationKind::Let,
            }
        );
        assert_eq!(
            get_value(&mut agent, &reference, true).unwrap(),
            Value::Number(2.0)
        );
    }

    #[test]
    fn reads_do_not_change_what_the_reference_denotes() {
        let mut agent = Agent::new();
        let env = declarative_env(&mut agent);
        bind(&mut agent, env, "x", Value::Number(7.0), DeclarationKind::Var);
        let reference = Reference::new_variable_reference(env, "x".into(), false);

        let first = get_value(&mut agent, &reference, true).unwrap();
        let second = get_value(&mut agent, &reference, true).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_environment_binding_on_the_typeof_path_is_undefined() {
        let mut agent = Agent::new();
        let env = declarative_env(&mut agent);
        let reference = Reference::new_variable_reference(env, "ghost".into(), false);
        assert_eq!(
            get_value(&mut agent, &reference, false).unwrap(),
            Value::Undefined
        );
        let error = get_value(&mut agent, &reference, true).unwrap_err();
        assert_eq!(error.exception_type(), ExceptionType::ReferenceError);
    }

    #[test]
    fn property_write_through_a_reference() {
        let mut agent = Agent::new();
        let object = object_with_property(&mut agent, "a", Value::Number(1.0));
        let reference = Reference::new_property_reference(object.into(), "a".into(), false);
        put_value(&mut agent, &reference, Value::Number(5.0)).unwrap();
        assert_eq!(
            get_value(&mut agent, &reference, true).unwrap(),
            Value::Number(5.0)
        );
    }

    #[test]
    fn absent_property_reads_as_undefined() {
        let mut agent = Agent::new();
        let object = agent.heap.create_object();
        let reference = Reference::new_property_reference(object.into(), "missing".into(), true);
        assert_eq!(
            get_value(&mut agent, &reference, true).unwrap(),
            Value::Undefined
        );
    }

    #[test]
    fn strict_write_through_a_nullish_base_allocates_no_object() {
        let mut agent = Agent::new();
        let objects_before = agent.heap.objects.len();
        let reference = Reference::new_property_reference(Value::Null, "p".into(), true);
        let error = put_value(&mut agent, &reference, Value::Number(1.0)).unwrap_err();
        assert_eq!(error.exception_type(), ExceptionType::TypeError);
        assert_eq!(error.message(), "Cannot set property 'p' of null");
        assert_eq!(agent.heap.objects.len(), objects_before);
    }

    #[test]
    fn strict_write_through_a_primitive_base_names_the_primitive() {
        let mut agent = Agent::new();
        let reference = Reference::new_property_reference(Value::Number(3.0), "y".into(), true);
        let error = put_value(&mut agent, &reference, Value::Number(1.0)).unwrap_err();
        assert_eq!(error.exception_type(), ExceptionType::TypeError);
        assert_eq!(
            error.message(),
            "Cannot set property 'y' of primitive number '3'"
        );
    }

    #[test]
    fn sloppy_write_through_a_primitive_base_is_dropped() {
        let mut agent = Agent::new();
        let reference = Reference::new_property_reference(Value::Number(3.0), "y".into(), false);
        put_value(&mut agent, &reference, Value::Number(1.0)).unwrap();
        // The write went to a transient wrapper; a fresh read sees nothing.
        assert_eq!(
            get_value(&mut agent, &reference, true).unwrap(),
            Value::Undefined
        );
    }

    #[test]
    fn nullish_base_reads_fail_in_coercion() {
        let mut agent = Agent::new();
        let reference = Reference::new_property_reference(Value::Undefined, "p".into(), false);
        let error = get_value(&mut agent, &reference, true).unwrap_err();
        assert_eq!(error.error_type(), &ErrorType::ToObjectNullOrUndefined);
        assert_eq!(error.exception_type(), ExceptionType::TypeError);
    }

    #[test]
    fn rejected_property_write_is_swallowed_in_sloppy_mode() {
        let mut agent = Agent::new();
        let object = agent.heap.create_object();
        object.internal_define_property(
            &mut agent,
            "frozen".into(),
            PropertyDescriptor {
                value: Value::Number(1.0),
                writable: false,
                configurable: false,
            },
        );
        let reference = Reference::new_property_reference(object.into(), "frozen".into(), false);
        put_value(&mut agent, &reference, Value::Number(2.0)).unwrap();
        assert_eq!(
            get_value(&mut agent, &reference, true).unwrap(),
            Value::Number(1.0)
        );

        let strict = Reference::new_property_reference(object.into(), "frozen".into(), true);
        let error = put_value(&mut agent, &strict, Value::Number(2.0)).unwrap_err();
        assert_eq!(error.exception_type(), ExceptionType::TypeError);
        assert!(error.message().contains("'frozen'"));
    }

    #[test]
    fn delete_removes_a_configurable_property() {
        let mut agent = Agent::new();
        let object = object_with_property(&mut agent, "a", Value::Number(1.0));
        let reference = Reference::new_property_reference(object.into(), "a".into(), false);
        assert_eq!(delete_reference(&mut agent, &reference), Ok(true));
        assert_eq!(object.internal_get(&agent, &"a".into()), None);
    }

    #[test]
    fn delete_of_a_non_configurable_property_depends_on_mode() {
        let mut agent = Agent::new();
        let object = agent.heap.create_object();
        object.internal_define_property(
            &mut agent,
            "pinned".into(),
            PropertyDescriptor {
                value: Value::Number(1.0),
                writable: true,
                configurable: false,
            },
        );

        let sloppy = Reference::new_property_reference(object.into(), "pinned".into(), false);
        assert_eq!(delete_reference(&mut agent, &sloppy), Ok(false));

        let strict = Reference::new_property_reference(object.into(), "pinned".into(), true);
        let error = delete_reference(&mut agent, &strict).unwrap_err();
        assert_eq!(error.exception_type(), ExceptionType::TypeError);
        assert_eq!(
            error.message(),
            "Cannot delete property 'pinned' of [object Object]"
        );
        assert_eq!(
            object.internal_get(&agent, &"pinned".into()),
            Some(Value::Number(1.0))
        );
    }

    #[test]
    fn delete_of_an_absent_property_succeeds() {
        let mut agent = Agent::new();
        let object = agent.heap.create_object();
        let reference = Reference::new_property_reference(object.into(), "missing".into(), true);
        assert_eq!(delete_reference(&mut agent, &reference), Ok(true));
    }

    #[test]
    fn delete_of_a_super_property_throws_before_touching_the_object() {
        let mut agent = Agent::new();
        let object = object_with_property(&mut agent, "p", Value::Number(1.0));
        let reference = Reference::new_super_reference(
            object.into(),
            "p".into(),
            Value::Undefined,
            false,
        );
        let error = delete_reference(&mut agent, &reference).unwrap_err();
        assert_eq!(error.error_type(), &ErrorType::UnsupportedDeleteSuperProperty);
        assert_eq!(error.exception_type(), ExceptionType::ReferenceError);
        assert_eq!(
            object.internal_get(&agent, &"p".into()),
            Some(Value::Number(1.0))
        );
    }

    #[test]
    fn delete_of_an_environment_binding() {
        let mut agent = Agent::new();
        let env = declarative_env(&mut agent);
        bind(&mut agent, env, "x", Value::Number(1.0), DeclarationKind::Var);
        let reference = Reference::new_variable_reference(env, "x".into(), false);
        assert_eq!(delete_reference(&mut agent, &reference), Ok(true));
        assert_eq!(delete_reference(&mut agent, &reference), Ok(false));
    }

    #[test]
    fn delete_of_an_unresolvable_reference_succeeds() {
        let mut agent = Agent::new();
        let reference = Reference::new_unresolvable_reference(Some("ghost".into()), false);
        assert_eq!(delete_reference(&mut agent, &reference), Ok(true));
    }

    #[test]
    fn super_reference_reads_the_property_and_keeps_its_own_this() {
        let mut agent = Agent::new();
        let object = object_with_property(&mut agent, "p", Value::Number(9.0));
        let reference = Reference::new_super_reference(
            object.into(),
            "p".into(),
            Value::Number(1.0),
            true,
        );
        assert!(is_super_reference(&reference));
        assert_eq!(get_this_value(&reference), Value::Number(1.0));
        assert_eq!(
            get_value(&mut agent, &reference, true).unwrap(),
            Value::Number(9.0)
        );

        let plain = Reference::new_property_reference(object.into(), "p".into(), true);
        assert!(!is_super_reference(&plain));
        assert_eq!(get_this_value(&plain), Value::Object(object));
    }

    #[test]
    fn describe_renders_every_field() {
        let mut agent = Agent::new();
        let env = declarative_env(&mut agent);
        let variable = Reference::new_variable_reference(env, "x".into(), false);
        assert_eq!(
            variable.describe(&agent),
            "Reference { Base=DeclarativeEnvironment, ReferencedName=x, Strict=false, ThisValue=<empty> }"
        );

        let invalid = Reference::new_unresolvable_reference(None, false);
        assert_eq!(
            invalid.describe(&agent),
            "Reference { Base=Unresolvable, ReferencedName=<invalid>, Strict=false, ThisValue=<empty> }"
        );

        let object = agent.heap.create_object();
        let superref = Reference::new_super_reference(
            object.into(),
            "p".into(),
            Value::Number(1.0),
            true,
        );
        assert_eq!(
            superref.describe(&agent),
            "Reference { Base=[object Object], ReferencedName=p, Strict=true, ThisValue=1 }"
        );
    }
}
