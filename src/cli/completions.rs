use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    ygit completions bash > ~/.bash_completion.d/ygit\n\n\
                  Generate zsh completions:\n    ygit completions zsh > ~/.zfunc/_ygit\n\n\
                  Generate fish completions:\n    ygit completions fish > ~/.config/fish/completions/ygit.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
