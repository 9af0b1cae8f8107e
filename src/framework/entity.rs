//! # Entity Type Marker
//!
//! [`EntityType<T>`] identifies which entity a request or response concerns. It is a
//! zero-sized value: the compiler tracks the entity type through the generic parameter,
//! so nothing has to be carried around at runtime.
//!
//! Two markers compare equal exactly when they have the same type parameter, and that
//! comparison is checked at compile time. `EntityType<User> == EntityType<Product>`
//! simply does not type-check.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Statically typed marker for the entity type `T`.
///
/// The trait impls below are written by hand so that they hold for every `T`, not only
/// for entity types that are themselves `Clone`, `Eq`, `Hash` or `Debug`.
pub struct EntityType<T: ?Sized>(PhantomData<fn() -> T>);

impl<T: ?Sized> EntityType<T> {
    /// Creates the marker for `T`.
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    /// Full type path, e.g. `my_app::model::User`.
    pub fn name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    /// Type name with every path reduced to its last segment.
    ///
    /// `my_app::model::User` becomes `User`, and wrapped or composite types keep their
    /// shape: `Arc<User>`, `(User, Team)`, `[User; 3]`.
    pub fn short_name(&self) -> Cow<'static, str> {
        let name = self.name();
        if name.chars().all(is_path_char) {
            return Cow::Borrowed(last_segment(name));
        }

        let mut short = String::with_capacity(name.len());
        let mut path_start = None;
        for (i, c) in name.char_indices() {
            if is_path_char(c) {
                path_start.get_or_insert(i);
                continue;
            }
            if let Some(start) = path_start.take() {
                short.push_str(last_segment(&name[start..i]));
            }
            short.push(c);
        }
        if let Some(start) = path_start {
            short.push_str(last_segment(&name[start..]));
        }
        Cow::Owned(short)
    }
}

fn is_path_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == ':'
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

impl<T: ?Sized> Clone for EntityType<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for EntityType<T> {}

impl<T: ?Sized> Default for EntityType<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> PartialEq for EntityType<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T: ?Sized> Eq for EntityType<T> {}

impl<T: ?Sized> Hash for EntityType<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl<T: ?Sized> fmt::Debug for EntityType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntityType").field(&self.name()).finish()
    }
}

impl<T: ?Sized> fmt::Display for EntityType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_name())
    }
}
