/// Declare a provider struct.
///
/// ```ignore
/// provider! {
///     pub Provider {
///         email: Email,
///         ..config: ConfigProvider { RestServerConfig, HealthFeatureConfig }
///     }
/// }
/// ```
///
/// Plain fields are handed out as clones. A field written as `..name: Base`
/// is a nested provider to which the listed types are delegated.
#[macro_export]
macro_rules! provider {
    (
        $(#[$meta:meta])*
        $vis:vis $provider:ident {
            $( $(#[$field_meta:meta])* $field:ident: $ty:ty, )*
            $( .. $nested:ident: $nested_ty:ty { $($delegated:ty),* $(,)? } )*
        }
    ) => {
        $(#[$meta])*
        $vis struct $provider {
            _cache: $crate::TypeMap,
            $( $(#[$field_meta])* $field: $ty, )*
            $( $nested: $nested_ty, )*
        }

        impl $crate::Provider for $provider {
            fn cache(&mut self) -> &mut $crate::TypeMap {
                &mut self._cache
            }
        }

        $( $crate::provider!(@field $provider, $field, $ty); )*
        $( $( $crate::provider!(@delegate $provider, $nested, $delegated); )* )*
    };

    (@field $provider:ident, $field:ident, $ty:ty) => {
        impl $crate::Build<$provider> for $ty {
            fn build(provider: &mut $provider) -> Self {
                ::core::clone::Clone::clone(&provider.$field)
            }
        }
    };

    (@delegate $provider:ident, $nested:ident, $ty:ty) => {
        impl $crate::Build<$provider> for $ty {
            fn build(provider: &mut $provider) -> Self {
                <$ty as $crate::Build<_>>::build(&mut provider.$nested)
            }
        }
    };
}
