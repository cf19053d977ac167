//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the fixed prefix table
//! - Look up the endpoint for a request path
//! - Fall through to the home endpoint for anything unmatched
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) path prefix scan over a handful of entries
//! - Dispatch is on path only; the request method is not checked,
//!   matching the source mux behavior
//! - `/` is the catch-all: `/user/get` without the trailing slash, or any
//!   unknown path, lands on the home endpoint

/// The closed set of endpoints the service dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Home,
    GetUser,
    PostUser,
    DeleteUser,
    PatchUser,
    ListUsers,
}

impl Endpoint {
    /// Stable label for logging and metrics.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Home => "home",
            Endpoint::GetUser => "get_user",
            Endpoint::PostUser => "post_user",
            Endpoint::DeleteUser => "delete_user",
            Endpoint::PatchUser => "patch_user",
            Endpoint::ListUsers => "list_users",
        }
    }
}

/// Path prefixes the user endpoints are mounted under. The trailing
/// segment after the prefix carries the record id where one is taken.
pub const GET_PREFIX: &str = "/user/get/";
pub const POST_PREFIX: &str = "/user/post/";
pub const DELETE_PREFIX: &str = "/user/delete/";
pub const PATCH_PREFIX: &str = "/user/patch/";
pub const ALL_PREFIX: &str = "/user/all/";

/// Fixed prefix routing table.
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<(&'static str, Endpoint)>,
}

impl RouteTable {
    /// Build the table. Specific prefixes are scanned in order; `/` is the
    /// implicit last entry.
    pub fn new() -> Self {
        Self {
            entries: vec![
                (GET_PREFIX, Endpoint::GetUser),
                (POST_PREFIX, Endpoint::PostUser),
                (DELETE_PREFIX, Endpoint::DeleteUser),
                (PATCH_PREFIX, Endpoint::PatchUser),
                (ALL_PREFIX, Endpoint::ListUsers),
            ],
        }
    }

    /// Return the endpoint for a request path.
    pub fn match_path(&self, path: &str) -> Endpoint {
        self.entries
            .iter()
            .find(|(prefix, _)| path.starts_with(prefix))
            .map(|(_, endpoint)| *endpoint)
            .unwrap_or(Endpoint::Home)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prefixes_dispatch_to_their_handlers() {
        let table = RouteTable::new();
        assert_eq!(table.match_path("/user/get/1"), Endpoint::GetUser);
        assert_eq!(table.match_path("/user/post/"), Endpoint::PostUser);
        assert_eq!(table.match_path("/user/delete/42"), Endpoint::DeleteUser);
        assert_eq!(table.match_path("/user/patch/42"), Endpoint::PatchUser);
        assert_eq!(table.match_path("/user/all/"), Endpoint::ListUsers);
    }

    #[test]
    fn everything_else_falls_through_to_home() {
        let table = RouteTable::new();
        assert_eq!(table.match_path("/"), Endpoint::Home);
        assert_eq!(table.match_path("/anything"), Endpoint::Home);
        // Missing the trailing slash misses the prefix.
        assert_eq!(table.match_path("/user/get"), Endpoint::Home);
        assert_eq!(table.match_path("/user"), Endpoint::Home);
    }

    #[test]
    fn nested_suffixes_still_match_their_prefix() {
        let table = RouteTable::new();
        assert_eq!(table.match_path("/user/get/1/extra"), Endpoint::GetUser);
    }
}
