//! Data types and their brands.
//!
//! - [`option`]: `Option<A>` functions and [`OptionKind`](option::OptionKind)
//! - [`result`]: `Result<A, E>` functions and the result brands
//! - [`vec`]: [`VecKind`](vec::VecKind), the brand of `Vec<A>`
//! - [`non_empty`]: [`NonEmptyVec`](non_empty::NonEmptyVec)
//! - [`these`]: [`These`](these::These), a left value, a right value, or both
//! - [`identity`]: [`Identity`](identity::Identity), the trivial effect
//!
//! `Option` and `Result` are the standard library types; their modules add
//! the combinators that std does not have and the brands that let generic
//! code work with them.

pub mod identity;
pub mod non_empty;
pub mod option;
pub mod result;
pub mod these;
pub mod vec;
