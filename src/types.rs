use serde_json::Value;

/// Result of a single pull against the posts endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch {
    /// Leading entries of the decoded array, already cut down to the limit.
    Posts(Vec<Value>),
    /// Any status other than 200.
    Failed(u16),
}
