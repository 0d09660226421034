/// A message error for input and argument problems; library errors are
/// passed through as they are.
#[derive(Debug, derive_more::Display)]
#[display("{msg}")]
pub struct CliError {
    pub msg: String
}

impl std::error::Error for CliError {}

macro_rules! err {
    ($($arg:tt)*) => {{
        let e = crate::app::err::CliError { msg: format!($($arg)*) };
        Err(e.into())
    }}
}

macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {{
        if !$cond {
            return err!($($arg)*);
        }
    }}
}

pub(crate) use {err, ensure};
