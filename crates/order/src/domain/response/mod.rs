mod order;
mod restaurant;

pub use self::order::OrderResponse;
pub use self::restaurant::RestaurantResponse;
