//! Payload encoding for the content variants.
//!
//! Each variant serializes into the string grammar its scanner expects:
//! URL/text/menu pass through unchanged, Wi-Fi uses the `WIFI:` provisioning
//! grammar, events use a bare `VEVENT` block. Encoding is pure and total:
//! malformed field values are emitted verbatim rather than rejected, so the
//! preview always has something to render.
//!
//! Known fidelity gap: grammar-significant characters in user input
//! (`;`, `,`, `\`, `:` for Wi-Fi; newlines and colons for events) are NOT
//! escaped. A payload containing them is not spec-compliant until the caller
//! escapes it.

use super::{ContentSpec, Event, Wifi};

impl ContentSpec {
    /// Encode this content into the payload string handed to the QR renderer.
    ///
    /// Returns the empty string when the active variant's primary fields are
    /// all empty; callers must treat that as "nothing to render" and skip the
    /// renderer entirely.
    pub fn payload(&self) -> String {
        match self {
            ContentSpec::Url(u) => u.value.clone(),
            ContentSpec::Text(t) => t.value.clone(),
            ContentSpec::Menu(m) => m.url.clone(),
            ContentSpec::Wifi(w) => encode_wifi(w),
            ContentSpec::Event(e) => encode_event(e),
        }
    }

    /// True when the active variant has no content worth encoding.
    pub fn is_empty(&self) -> bool {
        self.payload().is_empty()
    }
}

fn encode_wifi(w: &Wifi) -> String {
    if w.ssid.is_empty() && w.password.is_empty() {
        return String::new();
    }
    format!(
        "WIFI:S:{};T:{};P:{};;",
        w.ssid,
        w.encryption.token(),
        w.password
    )
}

fn encode_event(e: &Event) -> String {
    if e.name.is_empty()
        && e.start_date.is_empty()
        && e.end_date.is_empty()
        && e.location.is_empty()
        && e.description.is_empty()
    {
        return String::new();
    }
    format!(
        "BEGIN:VEVENT\nSUMMARY:{}\nDTSTART:{}\nDTEND:{}\nLOCATION:{}\nDESCRIPTION:{}\nEND:VEVENT",
        e.name,
        event_timestamp(&e.start_date),
        event_timestamp(&e.end_date),
        e.location,
        e.description
    )
}

/// `YYYY-MM-DD` → `YYYYMMDDT000000` (fixed midnight, no timezone).
///
/// Strips every dash and appends the time suffix; an empty date yields the
/// bare `T000000`, which is produced verbatim rather than rejected.
fn event_timestamp(date: &str) -> String {
    format!("{}T000000", date.replace('-', ""))
}
