pub mod collection;
pub mod grocery;
pub mod ports;
pub mod preview;

mod collection_tests;
