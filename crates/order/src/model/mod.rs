mod order;
mod restaurant;

pub use self::order::Order;
pub use self::restaurant::Restaurant;
