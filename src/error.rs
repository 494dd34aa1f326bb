use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
	#[error("Invalid input: {0}")]
	InvalidInput(String),

	#[error("Invalid encoding tree: {0}")]
	InvalidTree(String),

	#[error("Symbol {0:?} has no code in the encoding tree")]
	MissingSymbol(char),

	#[error("Malformed stream: {0}")]
	MalformedStream(String),

	#[error("Configuration error: {0}")]
	Config(String),
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
