pub mod catalog;
pub mod events;
pub mod fetcher;
pub mod pipeline;
pub mod storage;
