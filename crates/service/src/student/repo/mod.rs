pub mod json_file;
pub mod seaorm;

pub use json_file::JsonFileStudentCollection;
pub use seaorm::SeaOrmStudentCollection;
