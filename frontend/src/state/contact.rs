#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.subject.is_empty() && self.message.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormFeedback {
    #[default]
    Idle,
    Sent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub feedback: FormFeedback,
    idle_label: String,
    sent_label: String,
}

impl ContactForm {
    pub fn new(idle_label: impl Into<String>, sent_label: impl Into<String>) -> Self {
        ContactForm {
            fields: ContactFields::default(),
            feedback: FormFeedback::Idle,
            idle_label: idle_label.into(),
            sent_label: sent_label.into(),
        }
    }

    pub fn label(&self) -> &str {
        match self.feedback {
            FormFeedback::Idle => &self.idle_label,
            FormFeedback::Sent => &self.sent_label,
        }
    }

    pub fn is_sent(&self) -> bool {
        self.feedback == FormFeedback::Sent
    }

    pub fn submit(mut self) -> Self {
        self.feedback = FormFeedback::Sent;
        self
    }

    pub fn settle(mut self) -> Self {
        self.feedback = FormFeedback::Idle;
        self.fields = ContactFields::default();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new("Send Message", "Message Sent!");
        form.fields = ContactFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Quick question".into(),
        };
        form
    }

    #[test]
    fn submit_switches_label_immediately() {
        let form = filled().submit();
        assert!(form.is_sent());
        assert_eq!(form.label(), "Message Sent!");
        // Fields stay until the reset timer fires.
        assert!(!form.fields.is_empty());
    }

    #[test]
    fn settling_restores_label_and_clears_fields() {
        let form = filled().submit().settle();
        assert_eq!(form.feedback, FormFeedback::Idle);
        assert_eq!(form.label(), "Send Message");
        assert!(form.fields.is_empty());
    }
}
