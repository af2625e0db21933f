/// Declare an options struct together with its [`crate::OptionSet`] impl.
///
/// Every field names a kind marker from [`crate::kind`]. All kinds except
/// `Recursive` take the wire key in parentheses:
///
/// ```rust
/// use courier_encoder::{option_set, OptionSet};
///
/// option_set! {
///     #[derive(Default)]
///     pub struct Shared {
///         pub disable_notification: bool => Scalar("disable_notification"),
///     }
/// }
///
/// option_set! {
///     #[derive(Default)]
///     pub struct Outer {
///         pub shared: Shared => Recursive,
///         pub entities: Vec<String> => Composite("entities"),
///     }
/// }
///
/// let keys: Vec<_> = Outer::schema().fields().iter().map(|f| f.key).collect();
/// assert_eq!(keys, ["disable_notification", "entities"]);
/// ```
///
/// The table is built on first use. A wire key that appears twice,
/// directly or through an embedded group, panics at that point with the
/// [`crate::ConfigurationError::DuplicateKey`] message.
#[macro_export]
macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $fty:ty => $kind:ident $( ($key:literal) )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $(#[$fmeta])* $fvis $field: $fty, )*
        }

        impl $crate::OptionSet for $name {
            fn schema() -> &'static $crate::Schema {
                static SCHEMA: ::std::sync::LazyLock<$crate::Schema> =
                    ::std::sync::LazyLock::new(|| {
                        let builder = $crate::Schema::builder(stringify!($name));
                        $(
                            let builder = <$crate::kind::$kind as $crate::Slot<$fty>>::describe(
                                builder,
                                $crate::__wire_key!($($key)?),
                            );
                        )*
                        builder
                            .build()
                            .unwrap_or_else(|e| panic!("invalid option schema: {e}"))
                    });
                &SCHEMA
            }

            fn collect<'a>(&'a self, out: &mut ::std::vec::Vec<$crate::FieldValue<'a>>) {
                $( <$crate::kind::$kind as $crate::Slot<$fty>>::push(&self.$field, out); )*
            }

            fn validate(&self) -> ::std::result::Result<(), $crate::ConfigurationError> {
                $( <$crate::kind::$kind as $crate::Slot<$fty>>::validate(&self.$field)?; )*
                Ok(())
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __wire_key {
    () => { "" };
    ($key:literal) => { $key };
}
