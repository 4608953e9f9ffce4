//! GraphQL mutation definitions

// ============================================================================
// AUTHENTICATION MUTATIONS
// ============================================================================

pub const REQUEST_LOGIN_CODE: &str = r#"
  mutation RequestLoginCode($phoneOrEmail: String!) {
    requestLoginCode(phoneOrEmail: $phoneOrEmail)
  }
"#;

pub const LOGIN_PHONE_OR_EMAIL: &str = r#"
  mutation LoginPhoneOrEmail($phoneOrEmail: String!, $code: String!) {
    loginPhoneOrEmail(phoneOrEmail: $phoneOrEmail, code: $code)
  }
"#;
