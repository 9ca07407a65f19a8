pub mod component_handler;
