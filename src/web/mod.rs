pub mod api;
pub mod models;
pub mod server;

use ordered_float::OrderedFloat;

/// Weight type used at the HTTP boundary.
pub type Weight = OrderedFloat<f64>;
