//! 한글 로마자 변환과 문자열 정규화

pub mod normalize;
pub mod romanizer;
pub mod unicode;
