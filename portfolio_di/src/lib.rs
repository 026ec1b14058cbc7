//! Minimal compile time dependency injection.
//!
//! A provider is declared with [`provider!`] and owns the values that cannot
//! be built from other values (configuration, connections, clients). Every
//! other service derives [`Build`] and is assembled recursively from the
//! provider. Built values are cached per provider, so each service type is
//! constructed exactly once.

extern crate self as portfolio_di;

pub use portfolio_di_derive::Build;
pub use typemap::TypeMap;

mod macros;
mod typemap;

pub trait Provider: Sized {
    /// Cache of values that have already been built by this provider.
    fn cache(&mut self) -> &mut TypeMap;
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provides<T>: Provider {
    fn provide(&mut self) -> T;
}

impl<P: Provider, T: Build<P>> Provides<T> for P {
    fn provide(&mut self) -> T {
        T::build(self)
    }
}
