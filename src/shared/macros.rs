/***************************************/
/*               Macros                */
/***************************************/

/// Unwraps a startup result, or logs the failure with some context and exits.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr, $context:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("{}: {}", $context, e);
                std::process::exit(1);
            }
        }
    };
}
