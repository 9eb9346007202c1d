//! Secret capture from the controlling terminal

use std::io;

use secrecy::SecretString;

/// Label shown before the password is read
pub const PASSWORD_LABEL: &str = "Password: ";

/// Source of secrets typed by the operator
pub trait SecretPrompt {
    /// Show `label`, then read one line with echo disabled
    fn read_secret(&mut self, label: &str) -> io::Result<SecretString>;
}

impl<P: SecretPrompt + ?Sized> SecretPrompt for &mut P {
    fn read_secret(&mut self, label: &str) -> io::Result<SecretString> {
        (**self).read_secret(label)
    }
}

/// Reads from the controlling terminal (`/dev/tty` or the console)
///
/// Echo is switched off only for the duration of the read and restored on
/// every exit path, including read errors. The terminating newline is still
/// echoed so the cursor ends up on a fresh line. Input that is not valid
/// UTF-8 is rejected with `InvalidData`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl SecretPrompt for TerminalPrompt {
    fn read_secret(&mut self, label: &str) -> io::Result<SecretString> {
        rpassword::prompt_password(label).map(SecretString::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_debug_is_redacted() {
        let secret = SecretString::from("hunter22".to_string());
        let rendered = format!("{:?}", secret);
        assert!(!rendered.contains("hunter22"));
        assert_eq!(secret.expose_secret(), "hunter22");
    }

    struct Fixed(&'static str);

    impl SecretPrompt for Fixed {
        fn read_secret(&mut self, _label: &str) -> io::Result<SecretString> {
            Ok(SecretString::from(self.0.to_string()))
        }
    }

    #[test]
    fn test_prompt_by_mutable_reference() {
        let mut fixed = Fixed("longenough1");
        let mut borrowed = &mut fixed;
        let secret = <&mut Fixed as SecretPrompt>::read_secret(&mut borrowed, PASSWORD_LABEL).unwrap();
        assert_eq!(secret.expose_secret(), "longenough1");
    }
}
