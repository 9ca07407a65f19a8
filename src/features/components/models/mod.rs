mod component;

pub use component::Component;
