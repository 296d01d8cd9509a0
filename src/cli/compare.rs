use clap::Parser;

/// Arguments for the compare command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Compare two builds:\n    connect-doctor compare 2.45.1 3.0.0\n\n\
                  Trailing zeros are ignored:\n    connect-doctor compare 2.45.1 2.45.1.0")]
pub struct CompareArgs {
    /// First version
    pub left: String,

    /// Second version
    pub right: String,
}
