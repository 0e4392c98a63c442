//! # Content Model
//!
//! The five content variants a QR code can carry, as one tagged union.
//! `ContentSpec` is both the Rust API and the JSON API: construct it in Rust
//! or deserialize it from JSON like `{"kind": "wifi", "ssid": "Home", ...}`.
//!
//! Exactly one variant is active at a time. A form UI may keep the field
//! values of unselected variants around, but only the active variant ever
//! reaches the payload encoder. The enum makes any other reading
//! impossible.

mod payload;

use serde::{Deserialize, Serialize};

/// Wi-Fi encryption scheme, serialized as the literal provisioning tokens.
///
/// `None` maps to the token `nopass` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WifiEncryption {
    #[default]
    #[serde(rename = "WPA")]
    Wpa,
    #[serde(rename = "WEP")]
    Wep,
    #[serde(rename = "nopass")]
    None,
}

impl WifiEncryption {
    /// The literal token used in the `WIFI:` grammar.
    pub fn token(self) -> &'static str {
        match self {
            WifiEncryption::Wpa => "WPA",
            WifiEncryption::Wep => "WEP",
            WifiEncryption::None => "nopass",
        }
    }
}

/// Website URL content.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Url {
    pub value: String,
}

impl Url {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

/// Free-form text content.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Text {
    pub value: String,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

/// Wi-Fi network credentials.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Wifi {
    pub ssid: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub encryption: WifiEncryption,
}

impl Wifi {
    pub fn new(ssid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            password: password.into(),
            encryption: WifiEncryption::Wpa,
        }
    }
}

/// Basic calendar event.
///
/// Dates are `YYYY-MM-DD` strings. They are carried verbatim: the encoder
/// strips the dashes and never validates, so a half-typed date still
/// produces a renderable preview.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Event {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
}

/// Restaurant menu link.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Menu {
    pub url: String,
}

impl Menu {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// The unified content enum.
///
/// The `#[serde(tag = "kind")]` attribute enables JSON like
/// `{"kind": "url", "value": "https://example.com"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentSpec {
    Url(Url),
    Text(Text),
    Wifi(Wifi),
    Event(Event),
    Menu(Menu),
}

impl Default for ContentSpec {
    fn default() -> Self {
        ContentSpec::Url(Url::default())
    }
}

impl ContentSpec {
    /// Human-readable display label for this variant.
    pub fn label(&self) -> &'static str {
        match self {
            ContentSpec::Url(_) => "URL",
            ContentSpec::Text(_) => "Text",
            ContentSpec::Wifi(_) => "Wi-Fi",
            ContentSpec::Event(_) => "Event",
            ContentSpec::Menu(_) => "Menu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tag_deserialization() {
        let spec: ContentSpec =
            serde_json::from_str(r#"{"kind": "url", "value": "https://example.com"}"#).unwrap();
        assert!(matches!(spec, ContentSpec::Url(ref u) if u.value == "https://example.com"));
    }

    #[test]
    fn test_wifi_defaults() {
        let spec: ContentSpec =
            serde_json::from_str(r#"{"kind": "wifi", "ssid": "Home"}"#).unwrap();
        match spec {
            ContentSpec::Wifi(w) => {
                assert_eq!(w.ssid, "Home");
                assert_eq!(w.password, "");
                assert_eq!(w.encryption, WifiEncryption::Wpa);
            }
            other => panic!("expected wifi, got {:?}", other),
        }
    }

    #[test]
    fn test_encryption_tokens() {
        assert_eq!(WifiEncryption::Wpa.token(), "WPA");
        assert_eq!(WifiEncryption::Wep.token(), "WEP");
        assert_eq!(WifiEncryption::None.token(), "nopass");
    }

    #[test]
    fn test_nopass_wire_name() {
        let spec: ContentSpec = serde_json::from_str(
            r#"{"kind": "wifi", "ssid": "Cafe", "encryption": "nopass"}"#,
        )
        .unwrap();
        assert!(matches!(
            spec,
            ContentSpec::Wifi(ref w) if w.encryption == WifiEncryption::None
        ));
    }

    #[test]
    fn test_serialize_roundtrip_all_variants() {
        let specs = vec![
            ContentSpec::Url(Url::new("https://example.com")),
            ContentSpec::Text(Text::new("hello")),
            ContentSpec::Wifi(Wifi::new("Home", "secret1")),
            ContentSpec::Event(Event {
                name: "Launch".into(),
                start_date: "2024-05-01".into(),
                end_date: "2024-05-02".into(),
                location: "HQ".into(),
                description: "Kickoff".into(),
            }),
            ContentSpec::Menu(Menu::new("https://restaurant.example/menu")),
        ];
        for spec in specs {
            let json = serde_json::to_string(&spec).unwrap();
            let back: ContentSpec = serde_json::from_str(&json).unwrap();
            assert_eq!(back.payload(), spec.payload());
        }
    }
}
