use std::collections::BTreeSet;

use gloo_timers::callback::Timeout;
use leptos::logging::log;
use leptos::prelude::{Get, GetUntracked, RwSignal, Set};

pub const SUBMIT_LABEL: &str = "Send Message";
pub const PENDING_LABEL: &str = "Sending...";
pub const THANK_YOU: &str = "Thank you for your message! Our team will get back to you shortly.";

/// Pretend network latency for a submit.
pub const SUBMIT_DELAY_MS: u32 = 1500;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Some required field is blank; nothing was sent.
    Blocked,
    /// Accepted, completion is scheduled.
    Pending,
    /// A previous submit hasn't completed yet.
    Busy,
}

/// Runs a continuation once after a fixed delay.
pub trait Delay {
    fn schedule(&self, millis: u32, done: Box<dyn FnOnce() + 'static>);
}

/// Browser timer.
pub struct TimeoutDelay;

impl Delay for TimeoutDelay {
    fn schedule(&self, millis: u32, done: Box<dyn FnOnce() + 'static>) {
        Timeout::new(millis, done).forget();
    }
}

/// Blank-after-trim fields, in field order.
pub fn validate(name: &str, email: &str, message: &str) -> BTreeSet<Field> {
    [(Field::Name, name), (Field::Email, email), (Field::Message, message)]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(f, _)| f)
        .collect()
}

#[derive(Copy, Clone)]
pub struct ContactForm {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub message: RwSignal<String>,
    invalid: RwSignal<BTreeSet<Field>>,
    pending: RwSignal<bool>,
    notice: RwSignal<Option<&'static str>>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
            invalid: RwSignal::new(BTreeSet::new()),
            pending: RwSignal::new(false),
            notice: RwSignal::new(None),
        }
    }

    pub fn field(&self, field: Field) -> RwSignal<String> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    pub fn is_invalid(&self, field: Field) -> bool {
        self.invalid.get().contains(&field)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    pub fn button_label(&self) -> &'static str {
        if self.pending.get() { PENDING_LABEL } else { SUBMIT_LABEL }
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice.get()
    }

    pub fn submit(&self, delay: &dyn Delay) -> SubmitOutcome {
        if self.pending.get_untracked() {
            return SubmitOutcome::Busy;
        }

        let invalid = validate(
            &self.name.get_untracked(),
            &self.email.get_untracked(),
            &self.message.get_untracked(),
        );
        let blocked = !invalid.is_empty();
        self.invalid.set(invalid);
        if blocked {
            return SubmitOutcome::Blocked;
        }

        self.notice.set(None);
        self.pending.set(true);

        let form = *self;
        delay.schedule(SUBMIT_DELAY_MS, Box::new(move || form.complete()));
        SubmitOutcome::Pending
    }

    fn complete(&self) {
        log!("contact form sent by {:?}", self.name.get_untracked());
        for f in Field::ALL {
            self.field(f).set(String::new());
        }
        self.pending.set(false);
        self.notice.set(Some(THANK_YOU));
    }
}
