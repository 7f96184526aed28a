pub mod field;
pub mod quality;
pub mod task_record;

pub use field::Field;
pub use quality::QualityFlag;
pub use task_record::TaskRecord;
