mod query;

pub use self::query::{OrderQueryService, OrderQueryServiceDeps};
