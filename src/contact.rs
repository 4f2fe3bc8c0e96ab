//! Contact form submission through a hosted email relay.
//!
//! The form is cleared as soon as a complete submission is taken from it,
//! before the relay answers, so the user sees an empty form whatever the
//! outcome. Delivery is one-shot: no retry, no queue.

use serde::Serialize;

use crate::config::RelayConfig;
use crate::error::{Notification, PortfolioError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A complete submission, owned independently of the form it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    #[serde(rename = "from_name")]
    pub name: String,
    #[serde(rename = "reply_to")]
    pub email: String,
    pub message: String,
}

impl ContactForm {
    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    fn missing_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
    }

    /// Moves a complete submission out of the form, leaving every field empty.
    /// A field is missing only when it has no characters at all, the same
    /// rule the browser's `required` check applies. An incomplete form is
    /// left as it was.
    pub fn take_message(&mut self) -> Result<ContactMessage, PortfolioError> {
        if let Some(field) = self.missing_field() {
            return Err(PortfolioError::IncompleteForm(field));
        }
        let form = std::mem::take(self);
        Ok(ContactMessage {
            name: form.name,
            email: form.email,
            message: form.message,
        })
    }
}

#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    async fn send(
        &self,
        config: &RelayConfig,
        message: &ContactMessage,
    ) -> Result<(), PortfolioError>;
}

#[derive(Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactMessage,
}

/// The hosted EmailJS REST relay.
#[derive(Debug, Clone, Default)]
pub struct EmailJsRelay {
    client: reqwest::Client,
}

impl EmailJsRelay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmailRelay for EmailJsRelay {
    async fn send(
        &self,
        config: &RelayConfig,
        message: &ContactMessage,
    ) -> Result<(), PortfolioError> {
        let body = EmailJsRequest {
            service_id: config.service_id,
            template_id: config.template_id,
            user_id: config.public_key,
            template_params: message,
        };
        let res = self
            .client
            .post(config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| PortfolioError::EmailDelivery(e.to_string()))?;
        let status = res.status();
        if status.is_success() {
            Ok(())
        } else {
            let text = res.text().await.unwrap_or_default();
            Err(PortfolioError::EmailDelivery(format!("{status}: {text}")))
        }
    }
}

/// Hands `message` to the relay once and reports exactly one outcome.
pub async fn deliver<R: EmailRelay>(
    relay: &R,
    config: &RelayConfig,
    message: &ContactMessage,
) -> Notification {
    match relay.send(config, message).await {
        Ok(()) => {
            log::info!("contact message delivered");
            Notification::MessageSent
        }
        Err(e) => {
            log::warn!("contact message not delivered: {e}");
            Notification::MessageFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    struct FakeRelay {
        fail: bool,
        calls: Cell<usize>,
        last: RefCell<Option<ContactMessage>>,
    }

    impl FakeRelay {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }
    }

    impl EmailRelay for FakeRelay {
        async fn send(
            &self,
            _config: &RelayConfig,
            message: &ContactMessage,
        ) -> Result<(), PortfolioError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(message.clone());
            if self.fail {
                Err(PortfolioError::EmailDelivery("connection reset".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_take_message_clears_form() {
        let mut form = filled_form();
        let message = form.take_message().expect("form is complete");
        assert!(form.is_empty());
        assert_eq!(message.name, "Ada");
        assert_eq!(message.email, "ada@example.com");
        assert_eq!(message.message, "Hello there");
    }

    #[test]
    fn test_whitespace_fields_are_accepted() {
        let mut form = ContactForm {
            name: " ".to_string(),
            email: "a@b.c".to_string(),
            message: "hi".to_string(),
        };
        let message = form.take_message().expect("non-empty fields pass");
        assert_eq!(message.name, " ");
        assert!(form.is_empty());
    }

    #[test]
    fn test_incomplete_form_is_untouched() {
        let mut form = ContactForm {
            email: String::new(),
            ..filled_form()
        };
        let before = form.clone();
        assert_eq!(
            form.take_message(),
            Err(PortfolioError::IncompleteForm("email"))
        );
        assert_eq!(form, before);

        let mut empty = ContactForm::default();
        assert_eq!(
            empty.take_message(),
            Err(PortfolioError::IncompleteForm("name"))
        );
    }

    #[tokio::test]
    async fn test_deliver_success_notifies_once() {
        let relay = FakeRelay::new(false);
        let mut form = filled_form();
        let message = form.take_message().unwrap();
        let notification = deliver(&relay, &RelayConfig::DEFAULT, &message).await;
        assert_eq!(notification, Notification::MessageSent);
        assert_eq!(relay.calls.get(), 1);
        assert_eq!(relay.last.borrow().as_ref(), Some(&message));
        assert!(form.is_empty());
    }

    #[tokio::test]
    async fn test_deliver_failure_notifies_once() {
        let relay = FakeRelay::new(true);
        let mut form = filled_form();
        let message = form.take_message().unwrap();
        let notification = deliver(&relay, &RelayConfig::DEFAULT, &message).await;
        assert_eq!(notification, Notification::MessageFailed);
        assert_eq!(relay.calls.get(), 1);
        assert!(form.is_empty());
    }

    #[test]
    fn test_emailjs_payload_shape() {
        let message = filled_form().take_message().unwrap();
        let config = RelayConfig::DEFAULT;
        let body = EmailJsRequest {
            service_id: config.service_id,
            template_id: config.template_id,
            user_id: config.public_key,
            template_params: &message,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["service_id"], config.service_id);
        assert_eq!(json["template_id"], config.template_id);
        assert_eq!(json["user_id"], config.public_key);
        assert_eq!(json["template_params"]["from_name"], "Ada");
        assert_eq!(json["template_params"]["reply_to"], "ada@example.com");
        assert_eq!(json["template_params"]["message"], "Hello there");
    }
}
