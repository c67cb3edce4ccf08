// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod reference;

pub use reference::{
    Base, Reference, delete_reference, get_this_value, get_value, is_property_reference,
    is_super_reference, is_unresolvable_reference, put_value,
};
