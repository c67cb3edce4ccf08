// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::fmt;

use crate::heap::Heap;

use super::environments::{GlobalEnvironment, GlobalEnvironmentIndex};

pub type JsResult<T> = core::result::Result<T, JsError>;

/// ### [9.7 Agents](https://tc39.es/ecma262/#sec-agents)
///
/// The agent owns the heap and the global environment. The full engine's
/// realm and execution-context stack collapse to just the global environment
/// here; it is the target of sloppy-mode writes to undeclared names.
#[derive(Debug)]
pub struct Agent {
    pub heap: Heap,
    pub(crate) global_environment: GlobalEnvironmentIndex,
}

impl Agent {
    pub fn new() -> Self {
        let mut heap = Heap::new();
        let global_environment = heap
            .environments
            .push_global_environment(GlobalEnvironment::new());
        Self {
            heap,
            global_environment,
        }
    }

    pub fn global_env(&self) -> GlobalEnvironmentIndex {
        self.global_environment
    }

    /// ### [5.2.3.2 Throw an Exception](https://tc39.es/ecma262/#sec-throw-an-exception)
    pub fn throw_exception(&mut self, error_type: ErrorType) -> JsError {
        JsError::new(error_type)
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}

/// An abrupt completion unwinding the current evaluation.
///
/// The full engine allocates an error object on the heap; here the error
/// keeps its kind and message parameters directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsError(ErrorType);

impl JsError {
    pub(crate) fn new(error_type: ErrorType) -> Self {
        Self(error_type)
    }

    pub fn error_type(&self) -> &ErrorType {
        &self.0
    }

    pub fn exception_type(&self) -> ExceptionType {
        self.0.exception_type()
    }

    pub fn message(&self) -> String {
        self.0.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionType {
    ReferenceError,
    TypeError,
}

/// The error kinds raised while resolving references, each carrying its
/// message parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    /// An internally produced reference with no known name failed to
    /// resolve.
    ReferenceUnresolvable,
    /// An identifier did not resolve to any binding.
    UnknownIdentifier(Box<str>),
    /// Assignment to a `const` binding.
    InvalidAssignToConst,
    /// Strict-mode write to a non-writable binding.
    DescWriteNonWritable(Box<str>),
    /// Strict-mode property write through a nullish base, or a write the
    /// property table rejected.
    ReferenceNullishSetProperty { property: Box<str>, base: Box<str> },
    /// Strict-mode property write through a primitive base.
    ReferencePrimitiveSetProperty {
        property: Box<str>,
        base_type: &'static str,
        base: Box<str>,
    },
    /// Strict-mode delete of a non-configurable property.
    ReferenceNullishDeleteProperty { property: Box<str>, base: Box<str> },
    /// `delete super.property` is never allowed.
    UnsupportedDeleteSuperProperty,
    /// ToObject called on undefined or null.
    ToObjectNullOrUndefined,
}

impl ErrorType {
    pub fn exception_type(&self) -> ExceptionType {
        match self {
            ErrorType::ReferenceUnresolvable
            | ErrorType::UnknownIdentifier(_)
            | ErrorType::UnsupportedDeleteSuperProperty => ExceptionType::ReferenceError,
            ErrorType::InvalidAssignToConst
            | ErrorType::DescWriteNonWritable(_)
            | ErrorType::ReferenceNullishSetProperty { .. }
            | ErrorType::ReferencePrimitiveSetProperty { .. }
            | ErrorType::ReferenceNullishDeleteProperty { .. }
            | ErrorType::ToObjectNullOrUndefined => ExceptionType::TypeError,
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::ReferenceUnresolvable => write!(f, "Unresolvable reference"),
            ErrorType::UnknownIdentifier(name) => write!(f, "'{name}' is not defined"),
            ErrorType::InvalidAssignToConst => {
                write!(f, "Invalid assignment to const variable")
            }
            ErrorType::DescWriteNonWritable(name) => {
                write!(f, "Cannot write to non-writable binding '{name}'")
            }
            ErrorType::ReferenceNullishSetProperty { property, base } => {
                write!(f, "Cannot set property '{property}' of {base}")
            }
            ErrorType::ReferencePrimitiveSetProperty {
                property,
                base_type,
                base,
            } => {
                write!(
                    f,
                    "Cannot set property '{property}' of primitive {base_type} '{base}'"
                )
            }
            ErrorType::ReferenceNullishDeleteProperty { property, base } => {
                write!(f, "Cannot delete property '{property}' of {base}")
            }
            ErrorType::UnsupportedDeleteSuperProperty => {
                write!(f, "Can't delete a property on 'super'")
            }
            ErrorType::ToObjectNullOrUndefined => {
                write!(f, "ToObject on null or undefined")
            }
        }
    }
}
