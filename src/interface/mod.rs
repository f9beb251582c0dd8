//! Interface layer
//! 사용자 입출력 진입점(CLI/REPL)과 조립 루트.

pub mod cli;
