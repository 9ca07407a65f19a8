mod component_service;

pub use component_service::ComponentService;
