pub mod api;
pub mod core;
pub mod components;
pub mod config;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::sky_loop::{SkyLoop, LoopConfig, LoopContext};
pub use api::types::{LoopEvent, SurfaceSize};
pub use config::{SkyConfig, BackgroundConfig, SplashConfig};
pub use core::time::{FixedTimestep, FrameClock};
pub use input::queue::{InputEvent, InputQueue, KEY_ENTER, KEY_SPACE};
pub use renderer::{Backdrop, Color, ColorStop, FrameBuffer, PixelGrid, RadialGradient, RectInstance, Surface};
pub use systems::background::SpaceBackground;
pub use systems::splash::{CoinSplash, ExitTransition, SplashState};
pub use systems::rng::Rng;
pub use components::asteroid::{Asteroid, AsteroidShape};
pub use components::coin::{Coin, CoinOverlays};
pub use components::galaxy::Galaxy;
pub use components::planet::Planet;
pub use components::satellite::Satellite;
pub use components::star::Star;
pub use extensions::{Easing, ease, lerp};
