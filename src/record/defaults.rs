use crate::record::reflect::resolve_mut;
use crate::record::{FieldSlot, RecordError, RecordResult, ReflectMut};

/// Sets every empty string field of the record behind `record` to that
/// field's declared default.
///
/// Fields that already hold a value are left alone. An empty field without a
/// default, a non-string field, or a value that does not lead to a record is
/// an error.
pub fn fill_defaults(record: &mut dyn ReflectMut) -> RecordResult<()> {
    for field in resolve_mut(record)? {
        let default = || match field.default {
            Some(default) if !default.is_empty() => Ok(default),
            _ => Err(RecordError::MissingDefault { field: field.name }),
        };
        match field.slot {
            FieldSlot::Str(value) if value.is_empty() => value.push_str(default()?),
            FieldSlot::StaticStr(value) if value.is_empty() => *value = default()?,
            FieldSlot::Str(_) | FieldSlot::StaticStr(_) => {}
            FieldSlot::Other { type_name } => {
                return Err(RecordError::NonStringField {
                    field: field.name,
                    type_name,
                });
            }
        }
    }

    Ok(())
}

/// Builds a `T` with every field set to its default.
pub fn populated<T>() -> RecordResult<T>
where
    T: ReflectMut + Default,
{
    let mut value = T::default();
    fill_defaults(&mut value)?;
    Ok(value)
}
