use serde::{Deserialize, Serialize};

use crate::shared::validation::{max_chars, require_text, ValidationError};

pub const MAX_BODY_CHARS: usize = 1024;
pub const MAX_FOOTER_CHARS: usize = 60;
pub const MAX_HEADER_TEXT_CHARS: usize = 60;
pub const MAX_BUTTONS: usize = 3;

pub const MSG_TEMPLATE_CREATED: &str = "Plantilla creada correctamente";

/// Заголовок шаблона маркетинговой кампании
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum TemplateHeader {
    #[default]
    None,
    Text {
        text: String,
    },
    Image {
        url: String,
    },
    Video {
        url: String,
    },
    Document {
        url: String,
        filename: String,
    },
}

impl TemplateHeader {
    pub fn kind(&self) -> &'static str {
        match self {
            TemplateHeader::None => "NONE",
            TemplateHeader::Text { .. } => "TEXT",
            TemplateHeader::Image { .. } => "IMAGE",
            TemplateHeader::Video { .. } => "VIDEO",
            TemplateHeader::Document { .. } => "DOCUMENT",
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            TemplateHeader::None => Ok(()),
            TemplateHeader::Text { text } => {
                let text = require_text("header.text", Some(text.as_str()), "El texto del encabezado es requerido")?;
                max_chars(
                    "header.text",
                    &text,
                    MAX_HEADER_TEXT_CHARS,
                    "El encabezado no puede superar los 60 caracteres",
                )
            }
            TemplateHeader::Image { url } | TemplateHeader::Video { url } => media_url(url),
            TemplateHeader::Document { url, filename } => {
                media_url(url)?;
                require_text(
                    "header.filename",
                    Some(filename.as_str()),
                    "El nombre del documento es requerido",
                )
                .map(|_| ())
            }
        }
    }
}

fn media_url(url: &str) -> Result<(), ValidationError> {
    let url = require_text("header.url", Some(url), "La URL del archivo es requerida")?;
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ValidationError::new(
            "header.url",
            "La URL del archivo debe comenzar con http:// o https://",
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateButton {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Шаблон сообщения маркетинговой кампании
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CampaignTemplate {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub header: TemplateHeader,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(default)]
    pub buttons: Vec<TemplateButton>,
}

fn default_language() -> String {
    "es".to_string()
}

impl CampaignTemplate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", Some(self.name.as_str()), "El nombre de la plantilla es requerido")?;
        self.header.validate()?;
        let body = require_text("body", Some(self.body.as_str()), "El cuerpo del mensaje es requerido")?;
        max_chars(
            "body",
            &body,
            MAX_BODY_CHARS,
            "El cuerpo del mensaje no puede superar los 1024 caracteres",
        )?;
        if let Some(footer) = &self.footer {
            max_chars(
                "footer",
                footer,
                MAX_FOOTER_CHARS,
                "El pie de página no puede superar los 60 caracteres",
            )?;
        }
        if self.buttons.len() > MAX_BUTTONS {
            return Err(ValidationError::new(
                "buttons",
                "La plantilla admite como máximo 3 botones",
            ));
        }
        for button in &self.buttons {
            require_text("buttons.label", Some(button.label.as_str()), "Cada botón requiere un texto")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template() -> CampaignTemplate {
        serde_json::from_value(json!({
            "name": "promo_verano",
            "header": {"type": "IMAGE", "url": "https://cdn.shop.com/banner.png"},
            "body": "Hola {{1}}, aprovecha 20% de descuento",
            "buttons": [{"label": "Ver ofertas", "url": "https://shop.com"}]
        }))
        .unwrap()
    }

    #[test]
    fn test_header_tagging() {
        let t = template();
        assert_eq!(t.header.kind(), "IMAGE");
        assert_eq!(t.language, "es");
        assert!(t.validate().is_ok());

        let none: TemplateHeader = serde_json::from_value(json!({"type": "NONE"})).unwrap();
        assert_eq!(none, TemplateHeader::None);

        let doc = serde_json::to_value(TemplateHeader::Document {
            url: "https://x/y.pdf".into(),
            filename: "y.pdf".into(),
        })
        .unwrap();
        assert_eq!(doc["type"], "DOCUMENT");
    }

    #[test]
    fn test_unknown_header_type_is_rejected() {
        let r: Result<TemplateHeader, _> = serde_json::from_value(json!({"type": "AUDIO"}));
        assert!(r.is_err());
    }

    #[test]
    fn test_validation_rules() {
        let mut t = template();
        t.header = TemplateHeader::Video {
            url: "ftp://x".into(),
        };
        assert_eq!(t.validate().unwrap_err().field, "header.url");

        let mut t = template();
        t.body = "x".repeat(MAX_BODY_CHARS + 1);
        assert_eq!(t.validate().unwrap_err().field, "body");

        let mut t = template();
        t.footer = Some("f".repeat(61));
        assert_eq!(t.validate().unwrap_err().field, "footer");

        let mut t = template();
        t.buttons = vec![
            TemplateButton {
                label: "a".into(),
                url: None
            };
            4
        ];
        assert_eq!(t.validate().unwrap_err().field, "buttons");

        let mut t = template();
        t.header = TemplateHeader::Text { text: " ".into() };
        assert_eq!(t.validate().unwrap_err().field, "header.text");
    }
}
