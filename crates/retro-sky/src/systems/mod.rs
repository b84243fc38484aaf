pub mod background;
pub mod rng;
pub mod splash;
