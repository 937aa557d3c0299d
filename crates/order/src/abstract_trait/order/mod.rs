mod repository;
mod service;

pub use self::repository::{DynOrderQueryRepository, OrderQueryRepositoryTrait};
pub use self::service::{DynOrderQueryService, OrderQueryServiceTrait};

#[cfg(test)]
pub use self::repository::MockOrderQueryRepositoryTrait;
#[cfg(test)]
pub use self::service::MockOrderQueryServiceTrait;
