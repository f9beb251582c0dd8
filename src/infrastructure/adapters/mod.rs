//! 애플리케이션 포트를 실제 입출력 구현체로 연결하는 어댑터 계층.

mod line_source;
mod reporter;

pub use line_source::{ScriptedLineSource, StdinLineSource};
pub use reporter::{BufferReporter, ConsoleReporter, ReportLine};
