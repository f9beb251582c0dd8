//! Domain layer
//! 명령 레지스트리와 인자 해석 규칙을 외부 의존성 없이 표현한다.

pub mod command;
pub mod operand;
pub mod registry;
