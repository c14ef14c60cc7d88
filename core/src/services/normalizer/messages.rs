//! Spanish messages for provider error codes

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Shown when a provider batch carries no usable sub-error
pub const UNKNOWN_ERROR_MESSAGE: &str = "Error desconocido";

/// Shown when nothing in the input can serve as a message
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Error inesperado";

static PROVIDER_MESSAGES: [(&str, &str); 11] = [
    (
        "form_password_pwned",
        "Esta contraseña ha sido comprometida en una violación de datos. Por favor, elige una contraseña diferente.",
    ),
    (
        "form_password_too_common",
        "Esta contraseña es demasiado común. Por favor, elige una contraseña más segura.",
    ),
    (
        "form_password_length_too_short",
        "La contraseña debe tener al menos 8 caracteres.",
    ),
    (
        "form_email_invalid_format",
        "El formato del correo electrónico no es válido.",
    ),
    (
        "form_email_address_taken",
        "Este correo electrónico ya está registrado.",
    ),
    (
        "form_username_invalid_character",
        "El nombre de usuario contiene caracteres no válidos.",
    ),
    (
        "form_code_incorrect",
        "El código de verificación es incorrecto.",
    ),
    (
        "form_identifier_not_found",
        "No se encontró una cuenta con este correo electrónico.",
    ),
    (
        "session_token_revoked",
        "Tu sesión ha expirado. Por favor, inicia sesión nuevamente.",
    ),
    (
        "captcha_invalid",
        "Verificación CAPTCHA fallida. Por favor, inténtalo de nuevo.",
    ),
    (
        "captcha_unavailable",
        "CAPTCHA no disponible. Por favor, inténtalo más tarde.",
    ),
];

static MESSAGE_TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| PROVIDER_MESSAGES.iter().copied().collect());

/// Localized message for a provider code, if the table knows it
pub fn lookup_message(code: &str) -> Option<&'static str> {
    MESSAGE_TABLE.get(code).copied()
}

/// Localized message for `code`, or `fallback` unchanged when the code is unmapped
pub fn resolve_message(code: &str, fallback: &str) -> String {
    lookup_message(code).unwrap_or(fallback).to_string()
}

/// Provider codes that have a localized message
pub fn known_codes() -> impl Iterator<Item = &'static str> {
    PROVIDER_MESSAGES.iter().map(|(code, _)| *code)
}
