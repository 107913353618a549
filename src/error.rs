use std::fmt;

/// The callback-taking operations of a [`Wrapper`](crate::Wrapper).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operation {
    Map,
    MapSome,
    Inspect,
    InspectSome,
    TakeIf,
    TakeIfSome,
    TakeUnless,
    TakeUnlessSome,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::MapSome => "map_some",
            Self::Inspect => "inspect",
            Self::InspectSome => "inspect_some",
            Self::TakeIf => "take_if",
            Self::TakeIfSome => "take_if_some",
            Self::TakeUnless => "take_unless",
            Self::TakeUnlessSome => "take_unless_some",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
pub enum Error {
    /// An operation that needs a callback was handed none.
    #[error("missing callback for `{0}`")]
    MissingCallback(Operation),
}

pub type Result<T> = std::result::Result<T, Error>;
