pub mod emitters;
pub mod generator;
pub mod type_mapper;

pub use emitters::model::emit_model;
pub use generator::TypescriptModelGenerator;
