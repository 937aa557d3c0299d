mod restaurant;

pub use self::restaurant::{DynRestaurantHttpClient, RestaurantHttpClientTrait};

#[cfg(test)]
pub use self::restaurant::MockRestaurantHttpClientTrait;
