/// Declares a route table: a struct whose fields name the patterns an
/// application serves.
///
/// Each field may carry a default pattern after `=`, which
/// [`fill_defaults`](crate::record::fill_defaults) applies to fields left
/// empty. The generated struct implements
/// [`Reflect`](crate::record::Reflect) and
/// [`ReflectMut`](crate::record::ReflectMut).
///
/// ```
/// use reverse_router_rs::route_table;
///
/// route_table! {
///     #[derive(Debug, Clone, Default)]
///     pub struct ApiRoutes {
///         pub sessions: String = "/v1/sessions/",
///         pub users: String = "/v1/users/",
///     }
/// }
///
/// let routes: ApiRoutes = reverse_router_rs::record::populated().unwrap();
/// assert_eq!(routes.users, "/v1/users/");
/// ```
#[macro_export]
macro_rules! route_table {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty $(= $default:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::record::Reflect for $name {
            fn reflect(&self) -> $crate::record::Reflection<'_> {
                $crate::record::Reflection::Record(::std::vec![
                    $(
                        $crate::record::FieldRef::new(
                            ::core::stringify!($field),
                            $crate::record::FieldType::field_value(&self.$field),
                        ),
                    )*
                ])
            }
        }

        impl $crate::record::ReflectMut for $name {
            fn reflect_mut(&mut self) -> $crate::record::ReflectionMut<'_> {
                $crate::record::ReflectionMut::Record(::std::vec![
                    $(
                        $crate::record::FieldMut::new(
                            ::core::stringify!($field),
                            $crate::route_table!(@default $($default)?),
                            $crate::record::FieldType::field_slot(&mut self.$field),
                        ),
                    )*
                ])
            }
        }
    };
    (@default) => {
        ::core::option::Option::None
    };
    (@default $default:literal) => {
        ::core::option::Option::Some($default)
    };
}
