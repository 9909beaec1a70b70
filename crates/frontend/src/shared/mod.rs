pub mod components;
pub mod date_utils;
pub mod dialog;
pub mod icons;
pub mod storage;
pub mod theme;
