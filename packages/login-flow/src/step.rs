//! Sign-in steps and their copy

/// Which half of the sign-in the user is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    IdentifierEntry,
    CodeEntry,
}

impl Step {
    pub fn title(&self, identifier: &str) -> String {
        match self {
            Step::IdentifierEntry => "Sign in to Cash App".to_string(),
            Step::CodeEntry => format!("Cool! We sent a code to {}", identifier),
        }
    }

    /// Heading shown after a failed submission.
    pub fn invalid_message(&self, identifier: &str) -> String {
        match self {
            Step::IdentifierEntry => "Invalid email address or SMS number".to_string(),
            Step::CodeEntry => format!(
                "That doesn't look like the code we sent to {}",
                identifier
            ),
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Step::IdentifierEntry => "Email or Mobile Number",
            Step::CodeEntry => "Confirmation Code",
        }
    }

    pub fn button_text(&self) -> &'static str {
        match self {
            Step::IdentifierEntry => "Request Sign In Code",
            Step::CodeEntry => "Sign In",
        }
    }
}
