pub mod clipboard;
pub mod export;
pub mod fixtures;
pub mod repository;
pub mod storage;
pub mod store;
