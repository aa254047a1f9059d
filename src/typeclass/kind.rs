//! Higher-kinded type emulation through brands and Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! This module provides the workaround used by every type class in the crate:
//! a *brand* is a small value that names a type constructor through the GAT
//! [`Kind::Of`], and the brand value itself is the type class dictionary that
//! generic algorithms receive explicitly.
//!
//! # Example
//!
//! ```rust
//! use kindred::typeclass::Kind;
//! use kindred::data::option::OptionKind;
//!
//! fn rebuild<K: Kind>(_brand: &K, value: K::Of<i32>) -> K::Of<i32> {
//!     value
//! }
//!
//! let value: Option<i32> = rebuild(&OptionKind, Some(42));
//! assert_eq!(value, Some(42));
//! ```

/// A brand standing in for a type constructor of one argument.
///
/// Implementors are cheap, usually zero-sized, values. Every type class of the
/// crate is implemented on brands rather than on the data types themselves, so
/// an instance can be chosen explicitly at the call site (for example the
/// error-accumulating applicative for `Result` instead of the default one).
///
/// # Laws
///
/// `Of<A>` must be the same constructor for every `A`: a brand must not
/// change the shape it describes depending on its argument.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Kind;
/// use kindred::data::result::ResultKind;
///
/// fn assert_result<E: 'static>()
/// where
///     ResultKind<E>: Kind<Of<i32> = Result<i32, E>>,
/// {
/// }
///
/// assert_result::<String>();
/// ```
pub trait Kind: Clone + 'static {
    /// The type constructor applied to `A`.
    type Of<A: 'static>: 'static;
}

/// A brand standing in for a type constructor of two arguments.
///
/// Used by [`Bifunctor`](super::Bifunctor), where both the left (error) and
/// the right (success) side vary.
pub trait Kind2: Clone + 'static {
    /// The type constructor applied to `E` (left) and `A` (right).
    type Of<E: 'static, A: 'static>: 'static;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::option::OptionKind;
    use crate::data::result::{ResultBifunctor, ResultKind};
    use crate::data::vec::VecKind;

    #[test]
    fn option_brand_applies_to_option() {
        fn assert_of<K: Kind<Of<i32> = Option<i32>>>() {}
        assert_of::<OptionKind>();
    }

    #[test]
    fn result_brand_fixes_the_error_type() {
        fn assert_of<K: Kind<Of<bool> = Result<bool, String>>>() {}
        assert_of::<ResultKind<String>>();
    }

    #[test]
    fn vec_brand_applies_to_vec() {
        fn transform<K: Kind>(_brand: &K, value: K::Of<char>) -> K::Of<char> {
            value
        }
        assert_eq!(transform(&VecKind, vec!['a', 'b']), vec!['a', 'b']);
    }

    #[test]
    fn result_bifunctor_brand_orders_error_first() {
        fn assert_of<K: Kind2<Of<String, i32> = Result<i32, String>>>() {}
        assert_of::<ResultBifunctor>();
    }
}
