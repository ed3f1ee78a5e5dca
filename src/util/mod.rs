pub mod display;

pub use self::display::outline;
