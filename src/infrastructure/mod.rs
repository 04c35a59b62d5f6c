pub mod clock;
pub mod ids;
pub mod sample_data;
