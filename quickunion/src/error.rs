use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("site index {index} is out of range 0..{n}")]
    SiteOutOfRange { index: usize, n: usize },
}
