/// Which slice of `/asesorias` to fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListScope {
    /// Whole collection; the backend narrows it by bearer token
    Token,
    Username(String),
    UserId(i64),
}
