mod component_dto;

pub use component_dto::{ComponentResponseDto, CreateComponentDto, UpdateComponentDto};
