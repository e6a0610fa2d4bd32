//! Contact form → `mailto:` link.
//!
//! Percent-encoding is injected so the browser can use its own
//! `encodeURIComponent` while host tests pass a plain encoder.

pub const CONTACT_ADDRESS: &str = "joviantechlabs@gmail.com";
/// How long the submit button shows the sending label.
pub const SUBMIT_RESET_MS: i32 = 2000;
pub const SUBMIT_SENDING_LABEL: &str = "Opening Email Client...";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    pub fn mailto(&self, to: &str, encode: impl Fn(&str) -> String) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            to,
            encode(&self.subject),
            encode(&self.body())
        )
    }
}
