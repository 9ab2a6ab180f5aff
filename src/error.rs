/// Lexing errors.
///
/// Raised while turning source text into tokens: characters outside the
/// grammar, strings that never close, and integer literals that do not fit.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building statements from
/// tokens: unexpected tokens, malformed clause heads and clause name
/// mismatches.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unknown variables and functions, division by zero, type mismatches and
/// failed clause dispatch.
pub mod runtime_error;
/// The uniform error returned by the interpreter facade.
///
/// Wraps a lexing, parsing or runtime error and prefixes its message with
/// `Execution error:`.
pub mod execution_error;

pub use execution_error::ExecutionError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
