use crate::error::{PromptError, Result};
use crate::types::Shell;

/// Shell code that re-renders the segment before every prompt.
///
/// The prompt in effect when the snippet is first sourced becomes the base,
/// and the segment is appended to it. `PS1` only holds a reference to
/// `__git_prompt_segment`; the segment text itself is never subject to
/// prompt expansion, so branch names like `$(cmd)` stay literal.
pub fn init_script(shell: Shell, exe: &str) -> Result<String> {
    let exe = single_quote(exe);

    match shell {
        Shell::Bash => Ok(format!(
            r#"__git_prompt_base_ps1="${{__git_prompt_base_ps1-$PS1}}"
__git_prompt_update() {{
    __git_prompt_segment="$({exe} render --shell bash)"
    PS1="${{__git_prompt_base_ps1}}"'${{__git_prompt_segment}}'
}}
case ";${{PROMPT_COMMAND:-}};" in
    *";__git_prompt_update;"*) ;;
    *) PROMPT_COMMAND="__git_prompt_update${{PROMPT_COMMAND:+;$PROMPT_COMMAND}}" ;;
esac
"#
        )),
        Shell::Zsh => Ok(format!(
            r#"typeset -g __git_prompt_base_ps1="${{__git_prompt_base_ps1-$PS1}}"
__git_prompt_update() {{
    __git_prompt_segment="$({exe} render --shell zsh)"
    PS1="${{__git_prompt_base_ps1}}"'${{__git_prompt_segment}}'
}}
setopt PROMPT_SUBST
autoload -Uz add-zsh-hook
add-zsh-hook precmd __git_prompt_update
"#
        )),
        Shell::Plain => Err(PromptError::UnsupportedShell(shell)),
    }
}

fn single_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_hook() {
        let script = init_script(Shell::Bash, "/usr/local/bin/git-prompt").unwrap();
        assert!(script.contains(
            "__git_prompt_segment=\"$('/usr/local/bin/git-prompt' render --shell bash)\""
        ));
        assert!(script.contains("PS1=\"${__git_prompt_base_ps1}\"'${__git_prompt_segment}'"));
        assert!(script.contains("PROMPT_COMMAND=\"__git_prompt_update${PROMPT_COMMAND:+;$PROMPT_COMMAND}\""));
    }

    #[test]
    fn test_zsh_hook() {
        let script = init_script(Shell::Zsh, "git-prompt").unwrap();
        assert!(script.contains("__git_prompt_segment=\"$('git-prompt' render --shell zsh)\""));
        assert!(script.contains("PS1=\"${__git_prompt_base_ps1}\"'${__git_prompt_segment}'"));
        assert!(script.contains("setopt PROMPT_SUBST"));
        assert!(script.contains("add-zsh-hook precmd __git_prompt_update"));
    }

    #[test]
    fn test_quotes_in_path() {
        let script = init_script(Shell::Bash, "/opt/it's/git-prompt").unwrap();
        assert!(script.contains(r"'/opt/it'\''s/git-prompt'"));
    }

    #[test]
    fn test_plain_has_no_hook() {
        assert!(matches!(
            init_script(Shell::Plain, "git-prompt"),
            Err(PromptError::UnsupportedShell(Shell::Plain))
        ));
    }
}
