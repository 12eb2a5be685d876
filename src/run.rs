mod cli;

pub(crate) use cli::{as_cli, print_discovery};
