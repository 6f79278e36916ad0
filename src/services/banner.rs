use serde::Serialize;

use crate::models::promotional_message::{MessageType, PromotionalMessage};

/// Presentation for one message type, consumed by the navigation partial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BannerStyle {
    pub class: &'static str,
    pub icon: &'static str,
}

pub fn style_for(kind: MessageType) -> BannerStyle {
    match kind {
        MessageType::Info => BannerStyle {
            class: "alert-info",
            icon: "info-circle",
        },
        MessageType::Warning => BannerStyle {
            class: "alert-warning",
            icon: "exclamation-triangle",
        },
        MessageType::Success => BannerStyle {
            class: "alert-success",
            icon: "check-circle",
        },
        MessageType::Error => BannerStyle {
            class: "alert-danger",
            icon: "x-circle",
        },
    }
}

/// What the storefront receives for the selected message.
///
/// `content` is the admin-authored markup, passed through unescaped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BannerView {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub style: BannerStyle,
}

impl From<&PromotionalMessage> for BannerView {
    fn from(message: &PromotionalMessage) -> Self {
        let kind = message.kind();
        Self {
            id: message.id,
            title: message.title.clone(),
            content: message.content.clone(),
            kind,
            style: style_for(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn message(message_type: &str) -> PromotionalMessage {
        let now = Utc::now();
        PromotionalMessage {
            id: 3,
            title: "Flash sale".into(),
            content: "<a href=\"/sale\">Shop now</a>".into(),
            start_date: now,
            end_date: now,
            message_type: message_type.into(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn each_type_has_its_own_class() {
        let classes: Vec<_> = MessageType::ALL.iter().map(|k| style_for(*k).class).collect();
        assert_eq!(
            classes,
            ["alert-info", "alert-warning", "alert-success", "alert-danger"]
        );
    }

    #[test]
    fn unknown_type_renders_with_info_style() {
        let view = BannerView::from(&message("promo"));
        assert_eq!(view.kind, MessageType::Info);
        assert_eq!(view.style, style_for(MessageType::Info));
    }

    #[test]
    fn content_markup_is_passed_through() {
        let view = BannerView::from(&message("success"));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["content"], "<a href=\"/sale\">Shop now</a>");
        assert_eq!(json["type"], "success");
        assert_eq!(json["style"]["class"], "alert-success");
    }
}
