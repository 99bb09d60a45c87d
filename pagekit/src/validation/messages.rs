use serde::Deserialize;

/// User-facing validation messages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub required: String,
    pub invalid_email: String,
    pub short_password: String,
}

impl Messages {
    pub fn english() -> Self {
        Self {
            required: "this field is required.".into(),
            invalid_email: "please enter a valid email.".into(),
            short_password: "password must be at least 6 characters.".into(),
        }
    }

    /// The clinic site's own wording.
    pub fn portuguese() -> Self {
        Self {
            required: "Este campo é obrigatório".into(),
            invalid_email: "Por favor, insira um e-mail válido".into(),
            short_password: "A senha deve ter pelo menos 6 caracteres".into(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::english()
    }
}
