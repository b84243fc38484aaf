pub mod asteroid;
pub mod coin;
pub mod galaxy;
pub mod planet;
pub mod satellite;
pub mod star;
