pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn error_body_serializes_code_and_message() {
        let body = types::ErrorBody::new("NOT_FOUND", "student 7 not found");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"code": "NOT_FOUND", "message": "student 7 not found"}));
    }
}
