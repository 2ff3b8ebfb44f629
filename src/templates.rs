//! Ready-made payloads for common QR use cases.

use serde::Serialize;

/// A named, pre-filled payload.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Template {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub data: &'static str,
    pub description: &'static str,
}

/// The generator a template is applied to: something holding the data to
/// encode that can be asked to re-render.
pub trait QrGenerator {
    fn set_current_data(&mut self, data: &str);
    fn generate(&mut self);
}

/// A visible text field mirroring the generator's data.
pub trait TextInput {
    fn set_value(&mut self, value: &str);
}

const BUSINESS_CARD: &str = "BEGIN:VCARD
VERSION:3.0
FN:John Smith
ORG:Your Company
TEL:+1-555-123-4567
EMAIL:john@yourcompany.com
URL:https://yourcompany.com
END:VCARD";

const EVENT: &str = "BEGIN:VEVENT
VERSION:2.0
SUMMARY:Event Name
DTSTART:20250301T180000Z
DTEND:20250301T220000Z
LOCATION:Event Venue
DESCRIPTION:Event Description
END:VEVENT";

static TEMPLATES: [Template; 5] = [
    Template {
        key: "restaurant",
        name: "Restaurant Menu",
        icon: "🍽️",
        data: "https://restaurant.com/menu",
        description: "Contactless menu access",
    },
    Template {
        key: "business",
        name: "Business Card",
        icon: "👤",
        data: BUSINESS_CARD,
        description: "Contact information",
    },
    Template {
        key: "social",
        name: "Social Media",
        icon: "📱",
        data: "https://instagram.com/yourusername",
        description: "Social media profile",
    },
    Template {
        key: "event",
        name: "Event Info",
        icon: "📅",
        data: EVENT,
        description: "Calendar event",
    },
    Template {
        key: "wifi",
        name: "WiFi Access",
        icon: "📶",
        data: "WIFI:T:WPA;S:NetworkName;P:password123;;",
        description: "Network credentials",
    },
];

/// All templates, in display order.
pub fn templates() -> &'static [Template] {
    &TEMPLATES
}

pub fn template(key: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.key == key)
}

/// Loads the template named `key` into `generator` and renders it.
///
/// When `input` is given it is updated with the payload before rendering.
/// An unknown key does nothing and returns `None`.
pub fn apply_template(
    key: &str,
    generator: &mut dyn QrGenerator,
    input: Option<&mut dyn TextInput>,
) -> Option<&'static Template> {
    let template = template(key)?;
    log::debug!("Applying template '{}'", template.key);

    generator.set_current_data(template.data);
    if let Some(input) = input {
        input.set_value(template.data);
    }
    generator.generate();

    Some(template)
}
