pub mod sky_loop;
pub mod types;
