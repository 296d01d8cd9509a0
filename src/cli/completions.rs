use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    connect-doctor completions bash > ~/.bash_completion.d/connect-doctor\n\n\
                  Generate zsh completions:\n    connect-doctor completions zsh > ~/.zfunc/_connect-doctor\n\n\
                  Generate fish completions:\n    connect-doctor completions fish > ~/.config/fish/completions/connect-doctor.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
