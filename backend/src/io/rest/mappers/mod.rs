pub mod calculator_mapper;
pub mod support_mapper;
