//! Farewell message printed when the session ends

/// Prints the farewell line when dropped.
///
/// Held by `main` for the whole session, so the message appears however the
/// loop ends: `.exit`, end of input, or Ctrl+C.
pub struct Farewell {
    user_name: String,
}

impl Farewell {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
        }
    }

    pub fn message(&self) -> String {
        format!("Thank you for using File Manager, {}, goodbye!", self.user_name)
    }
}

impl Drop for Farewell {
    fn drop(&mut self) {
        println!("{}", self.message());
        tracing::info!("Session ended for {}", self.user_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_user() {
        let farewell = Farewell::new("alice");
        assert_eq!(
            farewell.message(),
            "Thank you for using File Manager, alice, goodbye!"
        );
    }
}
