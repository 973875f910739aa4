use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

pub const DEFAULT_SUBJECT: &str = "Contact from Portfolio";
pub const SUBMITTED_MESSAGE: &str = "Thank you! Your email client should now open with your message.";
pub const EMAIL_LINK_MESSAGE: &str = "Opening email client...";

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_SUBJECT: &str = "subject";
pub const FIELD_MESSAGE: &str = "message";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Reads the four contact fields through `field`; absent fields are empty.
    pub fn from_fields(field: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            name: field(FIELD_NAME).unwrap_or_default(),
            email: field(FIELD_EMAIL).unwrap_or_default(),
            subject: field(FIELD_SUBJECT).unwrap_or_default(),
            message: field(FIELD_MESSAGE).unwrap_or_default(),
        }
    }

    pub fn subject_or_default(&self) -> &str {
        if self.subject.is_empty() {
            DEFAULT_SUBJECT
        } else {
            &self.subject
        }
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    pub fn mailto_link(&self, recipient: &str) -> Result<Url, url::ParseError> {
        Url::parse(&format!(
            "mailto:{recipient}?subject={}&body={}",
            encode_uri_component(self.subject_or_default()),
            encode_uri_component(&self.body())
        ))
    }
}

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped, the same set
/// the browser's `encodeURIComponent` leaves alone. Spaces become `%20`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}
