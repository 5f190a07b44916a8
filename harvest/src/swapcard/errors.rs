use failure::Error;

#[derive(Debug, Fail)]
pub enum HarvestError {
    #[fail(display = "HTTP error {}: {}", status, body)]
    Http {
        status: u16,
        body: String
    },
    #[fail(display = "{}", reason)]
    Protocol {
        reason: String
    },
    #[fail(display = "invalid person data, missing '{}' in node {}", field, node)]
    Validation {
        field: &'static str,
        node: String
    },
    #[fail(display = "error while loading attendees page {}", page)]
    PageLoad {
        page: u32,
        #[cause] cause: Error
    },
    #[fail(display = "missing setting {}", name)]
    MissingSetting {
        name: String
    },
    #[fail(display = "invalid value {:?} for setting {}", value, name)]
    InvalidSetting {
        name: String,
        value: String
    }
}

impl HarvestError {
    pub fn protocol<S: Into<String>>(reason: S) -> HarvestError {
        HarvestError::Protocol { reason: reason.into() }
    }
}
