//! 外部接口

pub mod ocr;
