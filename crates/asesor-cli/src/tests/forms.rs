use crate::forms::{RegistrationForm, SessionEditForm, SessionForm, parse_date, parse_time};
use crate::ClientError;
use crate::models::Identity;

use asesor_config::OwnerField;
use chrono::{NaiveDate, NaiveTime};
use serde_json::json;

fn alice() -> Identity {
    Identity::new("alice", Some("T".to_string()))
}

fn calc_form() -> SessionForm {
    SessionForm {
        titulo: "Calc I".to_string(),
        descripcion: "Limits and derivatives".to_string(),
        fecha: "2024-05-01".to_string(),
        hora: "10:00".to_string(),
        profesor: "Dr. X".to_string(),
    }
}

#[test]
fn given_matching_passwords_when_payload_then_all_fields_copied() {
    let form = RegistrationForm {
        nombre: "Ana".to_string(),
        apellido: "Pérez".to_string(),
        email: "ana@example.com".to_string(),
        username: "ana".to_string(),
        password: "s3cret".to_string(),
        confirm_password: "s3cret".to_string(),
    };

    let payload = serde_json::to_value(form.to_payload().unwrap()).unwrap();

    assert_eq!(
        payload,
        json!({
            "nombre": "Ana",
            "apellido": "Pérez",
            "email": "ana@example.com",
            "username": "ana",
            "password": "s3cret"
        })
    );
}

#[test]
fn given_mismatched_passwords_when_payload_then_validation_error() {
    let form = RegistrationForm {
        password: "one".to_string(),
        confirm_password: "two".to_string(),
        ..RegistrationForm::default()
    };

    let result = form.to_payload();

    assert!(matches!(result, Err(ClientError::Validation { .. })));
}

#[test]
fn given_session_form_when_payload_then_iso_date_and_short_time() {
    let payload = calc_form().to_payload(&alice(), OwnerField::Username).unwrap();
    let body = serde_json::to_value(&payload).unwrap();

    assert_eq!(
        body,
        json!({
            "titulo": "Calc I",
            "descripcion": "Limits and derivatives",
            "fecha": "2024-05-01",
            "hora": "10:00",
            "profesor": "Dr. X",
            "username": "alice"
        })
    );
}

#[test]
fn given_user_id_owner_when_payload_then_usuario_id_sent() {
    let identity = alice().with_user_id(12);
    let payload = calc_form().to_payload(&identity, OwnerField::UserId).unwrap();
    let body = serde_json::to_value(&payload).unwrap();

    assert_eq!(body["usuario_id"], json!(12));
    assert!(body.get("username").is_none());
}

#[test]
fn given_user_id_owner_without_id_when_payload_then_validation_error() {
    let result = calc_form().to_payload(&alice(), OwnerField::UserId);

    assert!(matches!(result, Err(ClientError::Validation { .. })));
}

#[test]
fn given_bad_date_when_payload_then_validation_error() {
    let form = SessionForm {
        fecha: "01/05/2024".to_string(),
        ..calc_form()
    };

    let result = form.to_payload(&alice(), OwnerField::Username);

    assert!(matches!(result, Err(ClientError::Validation { .. })));
}

#[test]
fn given_strings_with_spaces_when_payload_then_passed_verbatim() {
    let form = SessionForm {
        titulo: "  Calc I ".to_string(),
        ..calc_form()
    };

    let payload = form.to_payload(&alice(), OwnerField::Username).unwrap();

    assert_eq!(payload.titulo, "  Calc I ");
}

#[test]
fn given_blank_edit_fields_when_payload_then_omitted() {
    let form = SessionEditForm {
        titulo: "Calc II".to_string(),
        hora: "14:30".to_string(),
        ..SessionEditForm::default()
    };

    let body = serde_json::to_value(form.to_payload().unwrap()).unwrap();

    assert_eq!(body, json!({"titulo": "Calc II", "hora": "14:30"}));
}

#[test]
fn given_bad_edit_time_when_payload_then_validation_error() {
    let form = SessionEditForm {
        hora: "25:00".to_string(),
        ..SessionEditForm::default()
    };

    assert!(matches!(form.to_payload(), Err(ClientError::Validation { .. })));
}

#[test]
fn given_date_and_time_text_when_parsed_then_values() {
    assert_eq!(
        parse_date(" 2024-02-29 ").unwrap(),
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    );
    assert_eq!(
        parse_time("09:05").unwrap(),
        NaiveTime::from_hms_opt(9, 5, 0).unwrap()
    );
    assert!(parse_date("2023-02-29").is_err());
    assert!(parse_time("9am").is_err());
}
