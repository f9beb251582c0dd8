//! CLI 인자 파싱 모듈.

use clap::Parser;

/// 사용자 정의 플래그는 없다. clap이 `--help`/`--version`만 처리한다.
#[derive(Debug, Parser)]
#[command(name = "cmdshell", version)]
#[command(about = "Interactive command dispatcher: greet, add, subtract, help, exit")]
pub struct Cli {}

impl Cli {
    /// 프로세스 인자를 검증한다. 알 수 없는 인자는 clap이 사용법과 함께 종료 처리한다.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
