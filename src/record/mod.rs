//! Static introspection over route-table records.
//!
//! A route table is a struct whose fields all hold pattern strings. The
//! [`route_table!`](crate::route_table) macro declares such a struct and
//! implements [`Reflect`] and [`ReflectMut`] for it, so it can be checked
//! against a registry and have empty fields filled from declared defaults.

mod defaults;
mod error;
mod macros;
mod reflect;

pub use defaults::{fill_defaults, populated};
pub use error::{RecordError, RecordResult};
pub use reflect::{
    FieldMut, FieldRef, FieldSlot, FieldType, FieldValue, Reflect, ReflectMut, Reflection,
    ReflectionMut, reference_set,
};
