//! Infrastructure layer
//! 표준 입출력 등 외부 자원과 직접 통신하는 구현체 집합.

pub mod adapters;
pub mod config;
