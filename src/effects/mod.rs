pub mod cursor;
pub mod field;
pub mod waves;

pub use cursor::init_cursor_trail;
pub use field::init_particle_field;
pub use waves::init_wave_canvas;
