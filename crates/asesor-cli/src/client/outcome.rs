/// Result of a call that the backend accepted.
///
/// Only `200` and `204` count as accepted; every other status is a
/// [`ClientError`](crate::ClientError).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// 200 OK
    Done(T),
    /// 204 No Content
    NoContent,
}

impl<T> Outcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Done(value) => Outcome::Done(f(value)),
            Outcome::NoContent => Outcome::NoContent,
        }
    }
}
