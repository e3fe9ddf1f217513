//! Exit code constants for the entrypoint CLI.
//!
//! - 0: Success (including dry-run completion)
//! - 1: User error (no command to launch)
//! - 2: Configuration error (config or property files)
//! - 3: Render error (template missing or failed to render)
//! - 4: Write error (destination could not be written)
//! - 5: Launch error (command could not be executed)
//!
//! Once the trailing command has been launched, the process exit code is
//! whatever that command returns.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: nothing to launch.
pub const USER_ERROR: i32 = 1;

/// Configuration error: template mapping or property files missing or malformed.
pub const CONFIG_FAILURE: i32 = 2;

/// Render error: template file missing, undefined variable, or syntax error.
pub const RENDER_FAILURE: i32 = 3;

/// Write error: destination file could not be created or written.
pub const WRITE_FAILURE: i32 = 4;

/// Launch error: the trailing command could not be executed.
pub const LAUNCH_FAILURE: i32 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            CONFIG_FAILURE,
            RENDER_FAILURE,
            WRITE_FAILURE,
            LAUNCH_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn failures_are_non_zero() {
        assert_eq!(SUCCESS, 0);
        for code in [
            USER_ERROR,
            CONFIG_FAILURE,
            RENDER_FAILURE,
            WRITE_FAILURE,
            LAUNCH_FAILURE,
        ] {
            assert_ne!(code, SUCCESS);
        }
    }
}
