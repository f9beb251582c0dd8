//! Application layer
//! 디스패치 루프와 기본 명령을 정의하고 포트(추상 인터페이스)를 통해 입출력을 사용한다.

pub mod builtins;
pub mod ports;
pub mod usecases;
