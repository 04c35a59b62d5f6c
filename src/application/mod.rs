pub mod grocery_service;
pub mod navigator;
