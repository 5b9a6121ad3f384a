pub mod clipboard;
pub mod storage;
pub mod url;
