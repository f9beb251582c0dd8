//! cmdshell library root.
//! 계층(domain/application/infrastructure/interface)을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use application::ports::{LineSource, Reporter};
use interface::cli::AppComposition;

/// 기본 구성으로 stdin/stdout 대화형 세션을 실행한다.
pub fn run() -> Result<()> {
    let composition = AppComposition::default();
    interface::cli::run_repl(&composition)
}

/// 라이브러리 직접 호출용 실행 함수. 입출력 어댑터를 호출부가 제공한다.
pub fn run_with(source: &mut dyn LineSource, reporter: &dyn Reporter) -> Result<()> {
    let composition = AppComposition::default();
    interface::cli::run_session(&composition, source, reporter)
}
