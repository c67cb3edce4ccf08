// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod agent;
mod environments;

pub use agent::{Agent, ErrorType, ExceptionType, JsError, JsResult};
pub use environments::{
    Binding, DeclarationKind, DeclarativeEnvironmentIndex, EnvironmentIndex, Environments,
    GlobalEnvironmentIndex, get_identifier_reference, new_declarative_environment,
};
