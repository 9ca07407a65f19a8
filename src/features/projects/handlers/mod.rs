pub mod project_handler;
