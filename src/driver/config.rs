use clap::Parser as ClapParser;

#[derive(ClapParser, Debug)]
pub struct CliArgs {
    /// Elements whose subsets to enumerate. Defaults to `1 2 3 4`.
    elems: Vec<i64>,

    #[clap(long = "handles")]
    only_handles: bool,

    #[clap(long = "subsets")]
    only_subsets: bool,

    #[clap(long = "recursive")]
    algorithm_recursive: bool,

    #[clap(long = "stack")]
    algorithm_stack: bool,

    #[clap(long = "doubling")]
    algorithm_doubling: bool,
}

pub struct Args {
    pub elems: Vec<i64>,

    pub demos: DemoSelection,

    pub algorithm: Algorithm,
}
impl From<CliArgs> for Args {
    fn from(cli_args: CliArgs) -> Self {
        let demos = match (cli_args.only_handles, cli_args.only_subsets) {
            (true, false) => DemoSelection::Handles,
            (false, true) => DemoSelection::Subsets,
            _ => DemoSelection::Both,
        };

        let algorithm = if cli_args.algorithm_recursive {
            Algorithm::Recursive
        } else if cli_args.algorithm_stack {
            Algorithm::Stack
        } else {
            Algorithm::Doubling
        };

        let elems = if cli_args.elems.is_empty() {
            vec![1, 2, 3, 4]
        } else {
            cli_args.elems
        };

        Self { elems, demos, algorithm }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DemoSelection {
    Handles,
    Subsets,
    Both,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Algorithm {
    Recursive,
    Stack,
    Doubling,
}
