//! 기본 제공 명령(greet/add/subtract)과 기본 명령표.

use crate::domain::command::CommandError;
use crate::domain::operand::parse_pair;
use crate::domain::registry::Registry;

/// 이름을 받아 인사말을 만든다.
pub fn greet(args: &[&str]) -> Result<String, CommandError> {
    let [name] = args else {
        return Err(CommandError::argument(format!(
            "usage: greet <name> (expected 1 argument, got {})",
            args.len()
        )));
    };
    Ok(format!("Hello, {name}!"))
}

pub fn add(args: &[&str]) -> Result<String, CommandError> {
    let (a, b) = parse_pair("add", args)?;
    Ok(format!("Sum: {}", a.checked_add(b)?))
}

pub fn subtract(args: &[&str]) -> Result<String, CommandError> {
    let (a, b) = parse_pair("subtract", args)?;
    Ok(format!("Difference: {}", a.checked_sub(b)?))
}

/// 시작 시점에 기본 명령표를 등록한다.
/// 실패는 명령표 자체의 결함이므로 호출부에서 치명 오류로 처리한다.
pub fn register_builtins(registry: &mut Registry) -> Result<(), CommandError> {
    registry.register_described("greet", greet, "Greets the user by name.")?;
    registry.register_described("add", add, "Adds two numbers.")?;
    registry.register_described(
        "subtract",
        subtract,
        "Subtracts the second number from the first.",
    )?;
    Ok(())
}

/// 기본 명령이 등록된 레지스트리를 만든다.
pub fn builtin_registry() -> Result<Registry, CommandError> {
    let mut registry = Registry::new();
    register_builtins(&mut registry)?;
    Ok(registry)
}
