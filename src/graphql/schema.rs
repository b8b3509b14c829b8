use async_graphql::{EmptySubscription, Schema};

use crate::graphql::{MutationRoot, QueryRoot};

/// Project, member and task relations resolve into each other, so queries
/// can nest without end. These bound how far a single request may go.
const MAX_QUERY_DEPTH: usize = 12;
const MAX_QUERY_COMPLEXITY: usize = 1000;

pub type ApiSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Store and services are attached per request by the HTTP handler.
pub fn create_schema() -> ApiSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .limit_depth(MAX_QUERY_DEPTH)
        .limit_complexity(MAX_QUERY_COMPLEXITY)
        .finish()
}
