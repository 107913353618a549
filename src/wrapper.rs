//! single-value wrapper with kotlin-style scope functions
//!
//! Every operation comes in two flavours. The strict form always runs its
//! callback and hands it the held `Option`. The `*_some` form skips the
//! callback when nothing is held.
//!
//! ```
//! let greeting = scopes::of(Some(String::from("Hello ")))
//!     .map_some(|s| Some(s + "World"))
//!     .map_some(|s| Some(s + "!"))
//!     .unwrap();
//! assert_eq!(greeting.as_deref(), Some("Hello World!"));
//! ```

use crate::{
    error::{Operation, Result},
    require::require,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Wrapper<T> {
    value: Option<T>,
}

/// Wraps `value`; `None` is the absent marker.
pub fn of<T>(value: Option<T>) -> Wrapper<T> {
    Wrapper { value }
}

impl<T> Wrapper<T> {
    const fn absent() -> Self {
        Self { value: None }
    }

    /// `let`: runs `f` on the held value, present or not, and wraps what it returns.
    pub fn map<Y>(self, f: impl FnOnce(Option<T>) -> Option<Y>) -> Wrapper<Y> {
        of(f(self.value))
    }

    /// `?.let`
    pub fn map_some<Y>(self, f: impl FnOnce(T) -> Option<Y>) -> Wrapper<Y> {
        of(self.value.and_then(f))
    }

    /// `also`: runs `f` for its side effects and hands back the same wrapper.
    pub fn inspect(self, f: impl FnOnce(Option<&T>)) -> Self {
        f(self.value.as_ref());
        self
    }

    /// `?.also`
    pub fn inspect_some(self, f: impl FnOnce(&T)) -> Self {
        if let Some(value) = &self.value {
            f(value);
        }
        self
    }

    /// `takeIf`: keeps the held value when `pred` holds, drops it otherwise.
    pub fn take_if(self, pred: impl FnOnce(Option<&T>) -> bool) -> Self {
        if pred(self.value.as_ref()) {
            self
        } else {
            Self::absent()
        }
    }

    /// `?.takeIf`
    pub fn take_if_some(self, pred: impl FnOnce(&T) -> bool) -> Self {
        if self.value.as_ref().is_some_and(pred) {
            self
        } else {
            Self::absent()
        }
    }

    /// `takeUnless`: drops the held value when `pred` holds.
    pub fn take_unless(self, pred: impl FnOnce(Option<&T>) -> bool) -> Self {
        if pred(self.value.as_ref()) {
            Self::absent()
        } else {
            self
        }
    }

    /// `?.takeUnless`
    pub fn take_unless_some(self, pred: impl FnOnce(&T) -> bool) -> Self {
        if self.value.as_ref().is_some_and(|value| !pred(value)) {
            self
        } else {
            Self::absent()
        }
    }

    pub fn unwrap(self) -> Option<T> {
        self.value
    }
}

// Checked twins for callbacks that may be missing at runtime. The callback is
// validated before the held value is looked at.
impl<T> Wrapper<T> {
    pub fn try_map<Y, F>(self, f: Option<F>) -> Result<Wrapper<Y>>
    where
        F: FnOnce(Option<T>) -> Option<Y>,
    {
        Ok(self.map(require(f, Operation::Map)?))
    }

    pub fn try_map_some<Y, F>(self, f: Option<F>) -> Result<Wrapper<Y>>
    where
        F: FnOnce(T) -> Option<Y>,
    {
        Ok(self.map_some(require(f, Operation::MapSome)?))
    }

    pub fn try_inspect<F>(self, f: Option<F>) -> Result<Self>
    where
        F: FnOnce(Option<&T>),
    {
        Ok(self.inspect(require(f, Operation::Inspect)?))
    }

    pub fn try_inspect_some<F>(self, f: Option<F>) -> Result<Self>
    where
        F: FnOnce(&T),
    {
        Ok(self.inspect_some(require(f, Operation::InspectSome)?))
    }

    pub fn try_take_if<F>(self, pred: Option<F>) -> Result<Self>
    where
        F: FnOnce(Option<&T>) -> bool,
    {
        Ok(self.take_if(require(pred, Operation::TakeIf)?))
    }

    pub fn try_take_if_some<F>(self, pred: Option<F>) -> Result<Self>
    where
        F: FnOnce(&T) -> bool,
    {
        Ok(self.take_if_some(require(pred, Operation::TakeIfSome)?))
    }

    pub fn try_take_unless<F>(self, pred: Option<F>) -> Result<Self>
    where
        F: FnOnce(Option<&T>) -> bool,
    {
        Ok(self.take_unless(require(pred, Operation::TakeUnless)?))
    }

    pub fn try_take_unless_some<F>(self, pred: Option<F>) -> Result<Self>
    where
        F: FnOnce(&T) -> bool,
    {
        Ok(self.take_unless_some(require(pred, Operation::TakeUnlessSome)?))
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Wrapper<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}
