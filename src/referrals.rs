//! Static list of mental health support contacts.

use std::fmt;

/// How to reach a support service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Phone(&'static str),
    Website(&'static str),
}

/// One support service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Referral {
    pub name: &'static str,
    pub contact: Contact,
}

impl fmt::Display for Referral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.contact {
            Contact::Phone(number) => write!(f, "{}: {}", self.name, number),
            Contact::Website(url) => write!(f, "{} <{}>", self.name, url),
        }
    }
}

/// Support services, helplines first.
pub const REFERRALS: [Referral; 4] = [
    Referral {
        name: "iCall",
        contact: Contact::Phone("9152987821"),
    },
    Referral {
        name: "AASRA",
        contact: Contact::Phone("91-9820466726"),
    },
    Referral {
        name: "Tele-MANAS",
        contact: Contact::Website("https://telemanas.mohfw.gov.in/"),
    },
    Referral {
        name: "Practo - Mental Health",
        contact: Contact::Website("https://www.practo.com/consult"),
    },
];
