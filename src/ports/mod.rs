//! Ports - interfaces between the application core and the outside world.

mod content_source;

pub use content_source::ContentSource;
