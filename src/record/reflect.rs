use crate::record::{RecordError, RecordResult};
use std::rc::Rc;
use std::sync::Arc;

/// Read access to a field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Other { type_name: &'static str },
}

/// Write access to a field of a record.
#[derive(Debug, PartialEq, Eq)]
pub enum FieldSlot<'a> {
    Str(&'a mut String),
    StaticStr(&'a mut &'static str),
    Other { type_name: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRef<'a> {
    pub name: &'static str,
    pub value: FieldValue<'a>,
}

impl<'a> FieldRef<'a> {
    pub fn new(name: &'static str, value: FieldValue<'a>) -> Self {
        Self { name, value }
    }
}

#[derive(Debug)]
pub struct FieldMut<'a> {
    pub name: &'static str,
    pub default: Option<&'static str>,
    pub slot: FieldSlot<'a>,
}

impl<'a> FieldMut<'a> {
    pub fn new(name: &'static str, default: Option<&'static str>, slot: FieldSlot<'a>) -> Self {
        Self {
            name,
            default,
            slot,
        }
    }
}

/// The shape of a value as seen through [`Reflect`].
pub enum Reflection<'a> {
    /// A record and its fields in declaration order.
    Record(Vec<FieldRef<'a>>),
    /// A pointer-like value; `None` when it points at nothing.
    Indirect {
        target: Option<&'a dyn Reflect>,
        type_name: &'static str,
    },
    /// Any other value.
    Value { type_name: &'static str },
}

pub enum ReflectionMut<'a> {
    Record(Vec<FieldMut<'a>>),
    Indirect {
        target: Option<&'a mut dyn ReflectMut>,
        type_name: &'static str,
    },
    Value { type_name: &'static str },
}

pub trait Reflect {
    fn reflect(&self) -> Reflection<'_>;
}

pub trait ReflectMut: Reflect {
    fn reflect_mut(&mut self) -> ReflectionMut<'_>;
}

/// Maps a field's type onto the two kinds a route table distinguishes:
/// strings and everything else.
pub trait FieldType {
    fn field_value(&self) -> FieldValue<'_>;

    fn field_slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Other {
            type_name: std::any::type_name::<Self>(),
        }
    }
}

impl FieldType for String {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_str())
    }

    fn field_slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Str(self)
    }
}

impl FieldType for &'static str {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(*self)
    }

    fn field_slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::StaticStr(self)
    }
}

macro_rules! other_field_types {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldType for $ty {
                fn field_value(&self) -> FieldValue<'_> {
                    FieldValue::Other {
                        type_name: std::any::type_name::<Self>(),
                    }
                }
            }
        )*
    };
}

other_field_types!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl<T> FieldType for Option<T> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Other {
            type_name: std::any::type_name::<Self>(),
        }
    }
}

impl<T> FieldType for Vec<T> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Other {
            type_name: std::any::type_name::<Self>(),
        }
    }
}

impl<T> FieldType for Box<T> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Other {
            type_name: std::any::type_name::<Self>(),
        }
    }
}

macro_rules! scalar_values {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn reflect(&self) -> Reflection<'_> {
                    Reflection::Value {
                        type_name: std::any::type_name::<Self>(),
                    }
                }
            }

            impl ReflectMut for $ty {
                fn reflect_mut(&mut self) -> ReflectionMut<'_> {
                    ReflectionMut::Value {
                        type_name: std::any::type_name::<Self>(),
                    }
                }
            }
        )*
    };
}

scalar_values!(
    (), bool, char, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64
);

impl<T: Reflect> Reflect for &T {
    fn reflect(&self) -> Reflection<'_> {
        Reflection::Indirect {
            target: Some(*self),
            type_name: std::any::type_name::<Self>(),
        }
    }
}

impl<T: Reflect> Reflect for &mut T {
    fn reflect(&self) -> Reflection<'_> {
        Reflection::Indirect {
            target: Some(&**self),
            type_name: std::any::type_name::<Self>(),
        }
    }
}

impl<T: ReflectMut> ReflectMut for &mut T {
    fn reflect_mut(&mut self) -> ReflectionMut<'_> {
        ReflectionMut::Indirect {
            target: Some(&mut **self),
            type_name: std::any::type_name::<Self>(),
        }
    }
}

impl<T: Reflect> Reflect for Box<T> {
    fn reflect(&self) -> Reflection<'_> {
        Reflection::Indirect {
            target: Some(&**self),
            type_name: std::any::type_name::<Self>(),
        }
    }
}

impl<T: ReflectMut> ReflectMut for Box<T> {
    fn reflect_mut(&mut self) -> ReflectionMut<'_> {
        ReflectionMut::Indirect {
            target: Some(&mut **self),
            type_name: std::any::type_name::<Self>(),
        }
    }
}

impl<T: Reflect> Reflect for Rc<T> {
    fn reflect(&self) -> Reflection<'_> {
        Reflection::Indirect {
            target: Some(&**self),
            type_name: std::any::type_name::<Self>(),
        }
    }
}

impl<T: Reflect> Reflect for Arc<T> {
    fn reflect(&self) -> Reflection<'_> {
        Reflection::Indirect {
            target: Some(&**self),
            type_name: std::any::type_name::<Self>(),
        }
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn reflect(&self) -> Reflection<'_> {
        Reflection::Indirect {
            target: self.as_ref().map(|value| value as &dyn Reflect),
            type_name: std::any::type_name::<Self>(),
        }
    }
}

impl<T: ReflectMut> ReflectMut for Option<T> {
    fn reflect_mut(&mut self) -> ReflectionMut<'_> {
        ReflectionMut::Indirect {
            target: self.as_mut().map(|value| value as &mut dyn ReflectMut),
            type_name: std::any::type_name::<Self>(),
        }
    }
}

/// Follows indirections from `value` down to a record and returns its fields.
pub(crate) fn resolve(value: &dyn Reflect) -> RecordResult<Vec<FieldRef<'_>>> {
    match value.reflect() {
        Reflection::Record(fields) => Ok(fields),
        Reflection::Indirect {
            target: Some(next), ..
        } => resolve(next),
        Reflection::Indirect {
            target: None,
            type_name,
        } => Err(RecordError::NullIndirection { type_name }),
        Reflection::Value { type_name } => Err(RecordError::NonRecord { type_name }),
    }
}

pub(crate) fn resolve_mut(value: &mut dyn ReflectMut) -> RecordResult<Vec<FieldMut<'_>>> {
    match value.reflect_mut() {
        ReflectionMut::Record(fields) => Ok(fields),
        ReflectionMut::Indirect {
            target: Some(next), ..
        } => resolve_mut(next),
        ReflectionMut::Indirect {
            target: None,
            type_name,
        } => Err(RecordError::NullIndirection { type_name }),
        ReflectionMut::Value { type_name } => Err(RecordError::NonRecord { type_name }),
    }
}

/// Flattens a route table into its field values, in declaration order.
///
/// Fails if `record` does not lead to a record, or if any field is not a
/// string.
pub fn reference_set(record: &dyn Reflect) -> RecordResult<Vec<String>> {
    resolve(record)?
        .into_iter()
        .map(|field| match field.value {
            FieldValue::Str(value) => Ok(value.to_string()),
            FieldValue::Other { type_name } => Err(RecordError::NonStringField {
                field: field.name,
                type_name,
            }),
        })
        .collect()
}
