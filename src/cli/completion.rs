//! Shell completion generation for i18n-complete
//!
//! Scripts come from `clap_complete`, extended so that `-n/--ns` completes
//! namespace names read from the locale directory at completion time.

use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io::Write;

use crate::cli::CliArgs;
use crate::error::{ConfigError, I18nError, Result};

const BIN_NAME: &str = "i18n-complete";

/// Write the completion script for `shell_name` to `out`
///
/// # Arguments
/// * `shell_name` - Shell type (bash, zsh, fish)
/// * `out` - Destination, usually stdout
pub fn generate_completion(shell_name: &str, out: &mut impl Write) -> Result<()> {
    let shell = parse_shell(shell_name)?;

    let mut cmd = CliArgs::command();
    let mut buffer = Vec::new();
    generate(shell, &mut cmd, BIN_NAME, &mut buffer);
    let basic_completion = String::from_utf8_lossy(&buffer);

    let extension = match shell {
        Shell::Bash => BASH_NAMESPACES,
        Shell::Zsh => ZSH_NAMESPACES,
        Shell::Fish => FISH_NAMESPACES,
        _ => "",
    };

    write!(out, "{}\n{}", basic_completion, extension)?;
    Ok(())
}

/// Parse shell name string to Shell enum
fn parse_shell(shell_name: &str) -> Result<Shell> {
    match shell_name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        _ => Err(I18nError::Config(ConfigError::Generic(format!(
            "Unsupported shell: {}. Supported shells: bash, zsh, fish",
            shell_name
        )))),
    }
}

const BASH_NAMESPACES: &str = r#"
_i18n_complete_namespaces() {
    i18n-complete keys --namespaces 2>/dev/null
}

_i18n_complete_enhanced() {
    local cur prev words cword
    _init_completion || return

    if [[ "$prev" == "-n" || "$prev" == "--ns" ]]; then
        COMPREPLY=($(compgen -W "$(_i18n_complete_namespaces)" -- "$cur"))
        return 0
    fi

    _i18n-complete "$@"
}

complete -F _i18n_complete_enhanced i18n-complete
"#;

const ZSH_NAMESPACES: &str = r#"
_i18n_complete_namespaces() {
    local -a namespaces
    namespaces=($(i18n-complete keys --namespaces 2>/dev/null))
    _describe 'namespaces' namespaces
}

_i18n_complete_enhanced() {
    if [[ ${words[CURRENT-1]} == "-n" || ${words[CURRENT-1]} == "--ns" ]]; then
        _i18n_complete_namespaces
        return 0
    fi

    _i18n-complete "$@"
}

compdef _i18n_complete_enhanced i18n-complete
"#;

const FISH_NAMESPACES: &str = r#"
complete -c i18n-complete -s n -l ns -f -a "(i18n-complete keys --namespaces 2>/dev/null)" -d "Namespace from the locale directory"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: &str) -> String {
        let mut out = Vec::new();
        generate_completion(shell, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_shell() {
        assert!(matches!(parse_shell("bash"), Ok(Shell::Bash)));
        assert!(matches!(parse_shell("zsh"), Ok(Shell::Zsh)));
        assert!(matches!(parse_shell("fish"), Ok(Shell::Fish)));
        assert!(parse_shell("invalid").is_err());
    }

    #[test]
    fn test_parse_shell_case_insensitive() {
        assert!(matches!(parse_shell("BASH"), Ok(Shell::Bash)));
        assert!(matches!(parse_shell("FiSh"), Ok(Shell::Fish)));
    }

    #[test]
    fn test_scripts_complete_namespaces() {
        assert!(script("bash").contains("complete -F _i18n_complete_enhanced i18n-complete"));
        assert!(script("zsh").contains("compdef _i18n_complete_enhanced i18n-complete"));
        assert!(script("fish").contains("keys --namespaces"));
    }

    #[test]
    fn test_unsupported_shell_writes_nothing() {
        let mut out = Vec::new();
        assert!(generate_completion("powershell", &mut out).is_err());
        assert!(out.is_empty());
    }
}
