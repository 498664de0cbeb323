// Platform-free pieces: simulation, easing, scheduling state and page decisions.
// No web-sys here, so host tests can include these files directly.
pub mod color;
pub mod constants;
pub mod counter;
pub mod debounce;
pub mod field;
pub mod page;
pub mod ticker;
pub mod trail;
pub mod waves;

pub use color::*;
pub use constants::*;
pub use counter::*;
pub use debounce::*;
pub use field::*;
pub use page::*;
pub use ticker::*;
pub use trail::*;
pub use waves::*;
