// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.1 Type Conversion](https://tc39.es/ecma262/#sec-type-conversion)

use crate::ecmascript::{
    execution::{Agent, JsResult, agent::ErrorType},
    types::{Object, Value},
};

/// ### [7.1.18 ToObject ( argument )](https://tc39.es/ecma262/#sec-toobject)
///
/// The abstract operation ToObject takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing an
/// Object or a throw completion. It converts argument to a value of type
/// Object.
pub(crate) fn to_object(agent: &mut Agent, argument: Value) -> JsResult<Object> {
    match argument {
        // Undefined and Null: Throw a TypeError exception.
        Value::Undefined | Value::Null => {
            Err(agent.throw_exception(ErrorType::ToObjectNullOrUndefined))
        }
        // Object: Return argument.
        Value::Object(object) => Ok(object),
        // Boolean, Number, String, Symbol: Return a new wrapper object.
        // The wrapper starts with no own properties; prototype-chain lookups
        // on boxed primitives are outside this subsystem.
        _ => Ok(agent.heap.create_object()),
    }
}
