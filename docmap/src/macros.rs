/// Implements [`FieldType`](crate::FieldType) for a unit-only enum, storing each variant as a
/// fixed string.
///
/// ```
/// use docmap::{Mapper, Value};
///
/// #[derive(Debug, PartialEq)]
/// enum Status {
///     Active,
///     Archived,
/// }
///
/// docmap::string_enum!(Status {
///     Active => "active",
///     Archived => "ARCHIVED",
/// });
///
/// let mapper = Mapper::new();
/// assert_eq!(mapper.encode(&Status::Archived).unwrap(), Value::from("ARCHIVED"));
/// assert_eq!(
///     mapper.decode_value::<Status>(&Value::from("active"), None).unwrap(),
///     Status::Active
/// );
/// assert!(mapper.decode_value::<Status>(&Value::from("Active"), None).is_err());
/// ```
#[macro_export]
macro_rules! string_enum {
    ($ty:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $crate::FieldType for $ty {
            fn shape() -> $crate::TypeShape {
                $crate::TypeShape::Enum(::std::string::String::from(stringify!($ty)))
            }

            fn decode(
                value: &$crate::Value,
                cx: &mut $crate::DecodeContext<'_>,
            ) -> $crate::Result<Self> {
                match value {
                    $crate::Value::String(name) => match name.as_str() {
                        $($wire => Ok($ty::$variant),)+
                        other => Err(cx.error(format!(
                            "Could not find enum value of {} for value \"{}\"",
                            stringify!($ty),
                            other
                        ))),
                    },
                    other => Err(cx.error(format!(
                        "Failed to convert value of type {} to enum {}",
                        other.type_name(),
                        stringify!($ty)
                    ))),
                }
            }

            fn encode(
                &self,
                _cx: &mut $crate::EncodeContext<'_>,
            ) -> $crate::Result<$crate::Value> {
                let name = match self {
                    $($ty::$variant => $wire,)+
                };
                Ok($crate::Value::String(::std::string::String::from(name)))
            }
        }
    };
}
