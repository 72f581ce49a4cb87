use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read input")]
    ReadInput(#[source] std::io::Error),
    #[error("failed to write output")]
    WriteOutput(#[source] std::io::Error),
}
