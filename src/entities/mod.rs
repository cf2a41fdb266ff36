mod destination;
mod vehicle;

pub use destination::Destination;
pub use vehicle::Vehicle;
